use std::io;

/// Errors that can occur during tslint-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to decode the lint report: {0}")]
    ReportDecodeError(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Process error: {0}")]
    ProcessError(String),

    #[error("Lint reporter '{id}' failed: {message}")]
    ReporterError { id: String, message: String },
}

/// Result type alias for tslint-runner operations
pub type Result<T> = std::result::Result<T, Error>;
