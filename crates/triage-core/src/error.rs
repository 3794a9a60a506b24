//! Error types for the triage engine.

use serde_json::Error as JsonError;
use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = StdResult<T, TriageError>;

/// Errors surfaced by the triage engine.
///
/// The analysis pipeline itself is total over its inputs; errors only come
/// from the configuration layer and from serializing reports.
#[derive(Debug, Error)]
pub enum TriageError {
    /// IO error while reading or writing configuration
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] JsonError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
