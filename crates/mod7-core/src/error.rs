//! Error types for mod7.
//!
//! Key validation never fails: violations are reported through
//! [`crate::ValidationReport`]. These errors cover the operational paths
//! around the core (reading key files, configuration, task joins).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Batch input errors
    #[error("The key file must be a plain text file with a .txt extension: {0}")]
    InvalidKeyFile(String),

    #[error("The key file is empty: {0}")]
    EmptyKeyFile(String),

    // Configuration errors
    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Invalid config value for {key}: {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // Infrastructure errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Internal(format!("Formatting failed: {}", err))
    }
}
