//! Error types for Axion
//!
//! Session operations are total and never fail, so the errors here only
//! cover the ambient layers around the session: configuration loading and
//! snapshot serialization for the terminal front-end.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Errors produced while rendering a session snapshot
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Serialization to JSON failed
    #[error("Could not serialize session snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::LoadError { path, .. } => format!(
                "The configuration file {} could not be read; using defaults.",
                path.display()
            ),
            ConfigError::ParseError(_) => {
                "The configuration file is not valid JSON.".to_string()
            }
            _ => self.to_string(),
        }
    }
}
