use std::io;
use thiserror::Error;

/// Custom error type for dirmirror
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for dirmirror
pub type Result<T> = std::result::Result<T, MirrorError>;

impl MirrorError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        MirrorError::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MirrorError::Other(msg.into())
    }

    /// True for failures that come from talking to the remote side
    /// (transport errors and non-2xx statuses).
    pub fn is_network(&self) -> bool {
        matches!(self, MirrorError::Http(_) | MirrorError::Status { .. })
    }
}
