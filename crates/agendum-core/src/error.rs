//! Core error types for agendum-core.
//!
//! This module defines the error hierarchy using thiserror. Scheduling is
//! pure and can only fail on bad input; everything I/O-shaped (config,
//! generator transport) carries its own variant.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for agendum-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timestamp parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

/// Timestamp parsing errors.
///
/// Raised when an input timestamp cannot be read as a naive local
/// date-time after the trailing `Z` marker has been stripped.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input was not an ISO-8601-like date-time
    #[error("Invalid timestamp '{input}': {message}")]
    InvalidTimestamp { input: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
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
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
