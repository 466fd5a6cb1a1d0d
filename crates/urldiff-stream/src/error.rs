//! Error types for line sources

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pair generation
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that end a pair stream
#[derive(Debug, Error)]
pub enum StreamError {
    /// Failed to open a line file
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read a line
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
