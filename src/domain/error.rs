//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>ms, <number>s, <number>m, or <number>m<number>s (e.g., 500ms, 2s, 1m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when a peer address cannot be parsed
#[derive(Debug, Clone, Error)]
pub enum PeerAddressError {
    #[error("Peer host must not be empty")]
    EmptyHost,

    #[error("Invalid port: \"{0}\". Expected a number between 1 and 65535")]
    InvalidPort(String),

    #[error("Invalid peer address: \"{0}\". Expected <host>:<port>")]
    MissingPort(String),
}

/// Error when the retry policy is not usable
#[derive(Debug, Clone, Error)]
#[error("Retry attempts must be at least 1")]
pub struct InvalidRetryPolicy;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
