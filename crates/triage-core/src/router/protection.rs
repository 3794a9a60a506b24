//! Cost-protection override: when the protection flag is active, heavy-tier
//! delegation is downgraded to the light tier.
//!
//! The flag is externally owned. The engine only consumes its current
//! value through the [`ProtectionSource`] capability, so the decision path
//! stays pure and testable without filesystem access.

use super::{Decision, LIGHT_TIMEOUT_CAP_SECONDS, TIMEOUT_MULTIPLIER};
use crate::types::{CostTier, WorkerTier};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable that forces protection on.
pub const PROTECTION_ENV: &str = "TRIAGE_PROTECTION";

/// Supplies the current protection flag.
pub trait ProtectionSource: Send + Sync {
    /// Whether cost protection is currently active.
    fn protection_active(&self) -> bool;
}

/// Source that never activates protection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProtection;

impl ProtectionSource for NoProtection {
    fn protection_active(&self) -> bool {
        false
    }
}

/// Shape of the externally persisted protection state.
///
/// The field may be a bool or the string `"true"`; anything else reads as
/// inactive.
#[derive(Debug, Deserialize)]
struct PersistedState {
    #[serde(default)]
    protection_mode: Value,
}

/// Reads the protection flag from the environment, then from a persisted
/// JSON state file.
///
/// A missing, unreadable, or unparseable file is treated as "inactive",
/// never as an error: analysis must not abort because an external store is
/// in a bad state.
#[derive(Debug, Clone)]
pub struct FileProtectionSource {
    path: PathBuf,
}

impl FileProtectionSource {
    /// Create a source backed by the given state file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_state(&self) -> bool {
        let Ok(data) = fs::read_to_string(&self.path) else {
            return false;
        };
        let Ok(state) = serde_json::from_str::<PersistedState>(&data) else {
            tracing::debug!(path = %self.path.display(), "unparseable protection state, treating as inactive");
            return false;
        };
        match state.protection_mode {
            Value::Bool(flag) => flag,
            Value::String(text) => text == "true",
            _ => false,
        }
    }
}

impl ProtectionSource for FileProtectionSource {
    fn protection_active(&self) -> bool {
        if env::var(PROTECTION_ENV).is_ok_and(|value| value == "true") {
            return true;
        }
        self.read_state()
    }
}

/// Downgrade a heavy-tier decision to the light tier when protection is
/// active. Pure and idempotent: an already-downgraded decision passes
/// through unchanged.
#[must_use]
pub fn apply_protection(decision: Decision, protection_active: bool) -> Decision {
    if !protection_active || decision.worker_tier != WorkerTier::Heavy {
        return decision;
    }
    tracing::debug!(
        estimated = decision.estimated_seconds,
        "protection active, downgrading heavy tier to light"
    );
    Decision {
        worker_tier: WorkerTier::Light,
        cost_tier: CostTier::Medium,
        timeout_seconds: (decision.estimated_seconds * TIMEOUT_MULTIPLIER)
            .min(LIGHT_TIMEOUT_CAP_SECONDS),
        protection_override: true,
        ..decision
    }
}
