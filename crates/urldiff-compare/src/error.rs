//! Error types for comparisons

use thiserror::Error;

/// Boxed transport or decoding error kept as the source of a comparison error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors that can stop a single comparison
///
/// None of these are retried; the caller decides what an error means for
/// the rest of a run.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Absent, non-string or unparseable input
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The HTTP client could not fetch a URL
    #[error("cannot fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    /// A response body could not be read or decoded as UTF-8
    #[error("cannot read response body: {source}")]
    BodyRead {
        #[source]
        source: BoxError,
    },
}

impl CompareError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn fetch(url: &str, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    /// Whether this error came from bad input rather than I/O
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether this error came from fetching a URL
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Whether this error came from reading a response body
    pub fn is_body_read(&self) -> bool {
        matches!(self, Self::BodyRead { .. })
    }
}
