//! Static host error types

use thiserror::Error;

/// Errors that can stop the static host
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configured directory is unusable
    #[error("Invalid directory {path:?}: {reason}")]
    Directory {
        path: std::path::PathBuf,
        reason: String,
    },

    /// Bind or accept failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server loop failed
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for static host operations
pub type ServerResult<T> = Result<T, ServerError>;
