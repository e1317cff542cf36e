//! Chain evaluation errors.

use thiserror::Error;

/// Boxed error produced by user handler code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while a chain evaluates a request.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A handler failed. The failure aborts the whole evaluation for this
    /// request; the engine performs no retry and never converts the error
    /// into a response.
    #[error("handler failed: {0}")]
    Handler(#[source] BoxError),
}

impl ChainError {
    /// Wrap a handler failure.
    pub fn handler(err: impl Into<BoxError>) -> Self {
        ChainError::Handler(err.into())
    }
}

impl From<BoxError> for ChainError {
    fn from(err: BoxError) -> Self {
        ChainError::Handler(err)
    }
}

impl From<String> for ChainError {
    fn from(msg: String) -> Self {
        ChainError::Handler(msg.into())
    }
}

impl From<&str> for ChainError {
    fn from(msg: &str) -> Self {
        ChainError::Handler(msg.into())
    }
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
