//! Core error types for ticklab-core.
//!
//! The panel operations surface user-facing validation failures with the
//! same wording the page shows; everything else wraps into [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ticklab-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No platform configuration directory available
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

/// Input validation errors.
///
/// Display strings match the messages the panels render, so a front-end can
/// show `err.to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or not parseable as a number.
    #[error("Please enter a valid {field}!")]
    NotANumber { field: String },

    /// A value that must be non-negative was negative.
    #[error("{field} cannot be negative!")]
    Negative { field: String },

    /// A value that must be strictly positive was zero or below.
    #[error("Please enter a valid {field}!")]
    NonPositive { field: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
