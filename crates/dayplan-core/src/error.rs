//! Error types for dayplan-core.
//!
//! The engine itself is total over well-formed inputs; the only failure
//! mode the crate owns is a malformed configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse or serialize configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}
