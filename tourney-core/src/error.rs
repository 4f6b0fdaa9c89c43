//! Error types for the tourney crates
//!
//! Only request validation, configuration and the research-service boundary can fail.
//! Text that cannot be parsed is never an error; the extraction engine degrades to
//! placeholder or absent results instead.

use thiserror::Error;

/// Workspace-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourneyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Research service error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TourneyError {
    pub fn config(msg: impl Into<String>) -> Self {
        TourneyError::Config(msg.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        TourneyError::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn api(msg: impl Into<String>) -> Self {
        TourneyError::Api(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        TourneyError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        TourneyError::Internal(msg.into())
    }

    /// Whether the failure originated at the research service rather than in this process
    pub fn is_upstream(&self) -> bool {
        matches!(self, TourneyError::Upstream { .. } | TourneyError::Api(_))
    }
}

/// Result type alias for tourney operations
pub type TourneyResult<T> = Result<T, TourneyError>;
