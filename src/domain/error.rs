//! Domain error types

use thiserror::Error;

/// Error when parsing a delay string
#[derive(Debug, Clone, Error)]
#[error("Invalid delay format: \"{input}\". Expected format: 0, <number>ms, <number>s, <number>m or a combination (e.g., 7ms, 2s, 1m30s)")]
pub struct DelayParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
