//! Configuration for strategy selection, worker identifiers, and the
//! protection state location.

use crate::analyzer::StrategyKind;
use crate::error::{Result, TriageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Complete triage configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Which analysis strategy to run
    pub strategy: StrategyKind,
    /// Worker identifiers per tier
    pub workers: WorkerConfig,
    /// Protection state source
    pub protection: ProtectionConfig,
    /// Whether delegation commands use the notification-capable path
    pub notify: bool,
}

/// Worker identifiers handed to the downstream spawner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Light-tier worker identifier
    pub light: String,
    /// Heavy-tier worker identifier
    pub heavy: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            light: "anthropic/claude-sonnet-4-5".to_owned(),
            heavy: "anthropic/claude-opus-4-6".to_owned(),
        }
    }
}

/// Where to read the persisted protection flag.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ProtectionConfig {
    /// Override path for the protection state file; defaults to
    /// `~/.triage/usage-state.json`
    pub state_file: Option<PathBuf>,
}

impl ProtectionConfig {
    /// Resolved state file path.
    ///
    /// # Errors
    /// Returns an error if no override is set and the home directory
    /// cannot be determined.
    pub fn resolved_state_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.state_file {
            return Ok(path.clone());
        }
        Ok(TriageConfig::config_dir()?.join("usage-state.json"))
    }
}

impl TriageConfig {
    /// Get the default config directory path (`~/.triage`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TriageError::Config("Could not determine home directory".to_owned()))?;
        Ok(home.join(".triage"))
    }

    /// Get the default config file path (`~/.triage/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location, creating it with default
    /// values on first run.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|error| TriageError::Config(format!("Failed to parse config: {error}")))
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|error| TriageError::Config(format!("Failed to serialize config: {error}")))?;

        let header = "# Triage Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))?;

        Ok(())
    }

    /// Worker identifier for a tier, if the tier delegates at all.
    #[must_use]
    pub fn worker_for(&self, tier: crate::types::WorkerTier) -> Option<&str> {
        match tier {
            crate::types::WorkerTier::None => None,
            crate::types::WorkerTier::Light => Some(&self.workers.light),
            crate::types::WorkerTier::Heavy => Some(&self.workers.heavy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkerTier;

    #[test]
    fn test_default_config() {
        let config = TriageConfig::default();
        assert_eq!(config.strategy, StrategyKind::Structural);
        assert!(!config.notify);
        assert!(config.protection.state_file.is_none());
    }

    #[test]
    fn test_worker_for_tier() {
        let config = TriageConfig::default();
        assert!(config.worker_for(WorkerTier::None).is_none());
        assert_eq!(config.worker_for(WorkerTier::Light), Some(config.workers.light.as_str()));
        assert_eq!(config.worker_for(WorkerTier::Heavy), Some(config.workers.heavy.as_str()));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = TriageConfig {
            strategy: StrategyKind::Category,
            notify: true,
            ..TriageConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        config.save_to_file(&path).unwrap();
        let loaded = TriageConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.strategy, StrategyKind::Category);
        assert!(loaded.notify);
        assert_eq!(loaded.workers.light, config.workers.light);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strategy = 12").unwrap();
        assert!(matches!(
            TriageConfig::load_from_file(&path),
            Err(TriageError::Config(_))
        ));
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            TriageConfig::load_from_file(&missing),
            Err(TriageError::Io(_))
        ));
    }
}
