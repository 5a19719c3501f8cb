// ============================================================================
// CLIENT ERROR - Failure categories surfaced to the user
// ============================================================================

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; message comes from the body when present
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response that reports a logical failure
    #[error("{0}")]
    Backend(String),

    /// Response body could not be decoded
    #[error("{0}")]
    Parse(String),
}

impl ClientError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        ClientError::Network(format!("Network error: {}", err))
    }

    pub fn parse(err: impl std::fmt::Display) -> Self {
        ClientError::Parse(format!("Parse error: {}", err))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
