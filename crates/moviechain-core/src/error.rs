//! Centralized error types for MovieChain.

use thiserror::Error;

/// Main error type for MovieChain operations.
///
/// The first six variants form the failure taxonomy shared across the
/// pipeline and the traversal engine; `Connection` and `Query` are kept
/// distinct so callers can decide retry-ability.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Corrupt archive: {0}")]
    Integrity(String),

    #[error("Unexpected dataset format: {0}")]
    Format(String),

    #[error("Graph store unreachable: {0}")]
    Connection(String),

    #[error("Graph store rejected request: {0}")]
    Query(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for MovieChain operations.
pub type ChainResult<T> = Result<T, ChainError>;

impl ChainError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a dataset format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Whether retrying the failed operation can plausibly succeed.
    ///
    /// Transport failures are transient; a rejected query or a malformed
    /// dataset will fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Connection(_))
    }
}
