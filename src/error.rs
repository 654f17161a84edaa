//! Error types.
//!
//! The sampling core has a single failure mode, [`SimulationError::InvalidArgument`],
//! raised before any entropy is consumed. Configuration loading has its own
//! [`ConfigError`] so that a presentation layer can tell "the user typed
//! garbage" apart from "the engine was called wrongly".

/// Errors raised by the sampling core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// A count argument was zero.
    #[error("invalid argument: {name} must be >= 1, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
}

impl SimulationError {
    /// Returns `Ok(value)` when `value >= 1`.
    pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<usize, Self> {
        if value == 0 {
            Err(SimulationError::InvalidArgument { name, value })
        } else {
            Ok(value)
        }
    }
}

/// Errors raised while loading or validating a [`SimulationConfig`](crate::config::SimulationConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for environment variable {key}: {value:?}")]
    InvalidEnv { key: String, value: String },

    #[error("invalid config field {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
