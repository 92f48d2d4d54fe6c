//! Error types for campuscal.

use thiserror::Error;

/// Main error type for campuscal operations.
///
/// The layout engine and the text parser are infallible; errors only come
/// from the edges (configuration, event records crossing the boundary, I/O).
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid event record: {0}")]
    InvalidEvent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for campuscal operations.
pub type Result<T> = std::result::Result<T, CampusError>;
