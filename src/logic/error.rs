//! Error handling
//!
//! Only the fetch/decode seam can fail. Ranking, normalization and metrics
//! extraction are total and never return these.

use thiserror::Error;

pub type ExplainResult<T> = Result<T, ExplainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// Server unreachable, timeout, connection reset
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("explanation service returned status {0}")]
    Status(u16),

    /// Body was not a valid explanation payload
    #[error("invalid explanation payload: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(String),
}

impl ExplainError {
    /// All errors are retryable from the caller's point of view except a
    /// malformed payload, which will come back identical.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ExplainError::Decode(_))
    }
}

impl From<serde_json::Error> for ExplainError {
    fn from(err: serde_json::Error) -> Self {
        ExplainError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ExplainError {
    fn from(err: std::io::Error) -> Self {
        ExplainError::Io(err.to_string())
    }
}

impl From<ureq::Error> for ExplainError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ExplainError::Status(code),
            ureq::Error::Transport(t) => ExplainError::Transport(t.to_string()),
        }
    }
}
