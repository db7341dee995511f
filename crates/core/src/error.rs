use std::io;

/// Errors that can occur during mocha-lens operations
///
/// Parsing never produces an error: a line that is not a recognizable
/// declaration is skipped. Only the surrounding I/O and configuration layers fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No test block found at the specified location")]
    NoBlockFound,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for mocha-lens operations
pub type Result<T> = std::result::Result<T, Error>;
