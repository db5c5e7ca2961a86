//! Custom error types for translation operations

use thiserror::Error;

/// Reasons a dynamically typed translation request is rejected before it
/// reaches the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Neither a string nor an object
    #[error("Unable to i18n object other than string or object: {kind}")]
    UnsupportedType {
        /// JSON type that was received
        kind: &'static str,
    },

    /// Structured request without a message
    #[error("Unable to translate without message: {received}")]
    MissingMessage {
        /// Dump of the received record
        received: String,
    },

    /// A known field holds a value of the wrong type
    #[error("Invalid field `{field}`: expected {expected}, received {kind}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Expected JSON type
        expected: &'static str,
        /// JSON type that was received
        kind: &'static str,
    },
}

/// Configuration and runtime errors
#[derive(Error, Debug)]
pub enum TranslatError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// Wrapper for anyhow errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Layered configuration source error
    #[error("Config source error: {0}")]
    SourceError(#[from] config::ConfigError),
}

impl From<anyhow::Error> for TranslatError {
    fn from(err: anyhow::Error) -> Self {
        TranslatError::InternalError(err.to_string())
    }
}

/// Result type for translat operations
pub type Result<T> = std::result::Result<T, TranslatError>;
