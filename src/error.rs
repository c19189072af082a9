use std::io;
use thiserror::Error;

/// Custom error type for memwatch
#[derive(Error, Debug)]
pub enum MemwatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),
}

/// Result type alias for memwatch
pub type Result<T> = std::result::Result<T, MemwatchError>;

impl MemwatchError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MemwatchError::Config(msg.into())
    }

    pub fn backend_unavailable<S: Into<String>>(msg: S) -> Self {
        MemwatchError::BackendUnavailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        MemwatchError::MetricCollection(msg.into())
    }
}
