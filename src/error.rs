//! Error handling module for the component wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Transition failures live in `reducer::ReduceError` and convert into
//! `WizardError` at the crate boundary.

use thiserror::Error;

use crate::reducer::ReduceError;

/// Main error type for the component wizard
#[derive(Error, Debug)]
pub enum WizardError {
    /// IO errors (session files, output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A state transition was rejected by the reducer
    #[error("Transition rejected: {0}")]
    Reduce(#[from] ReduceError),

    /// Session file errors (malformed action log, bad envelope)
    #[error("Session error: {0}")]
    Session(String),

    /// State snapshot violates an invariant
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for component wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

impl WizardError {
    /// Create a session file error
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
