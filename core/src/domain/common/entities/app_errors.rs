use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("External service returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("External service timed out")]
    Timeout,

    #[error("Malformed response from external service: {0}")]
    MalformedResponse(String),

    #[error("Request superseded by a newer request")]
    Superseded,

    #[error("Internal server error")]
    InternalServerError,
}

/// Distinguishable failure kind surfaced to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidInput,
    UpstreamUnavailable,
    UpstreamRejected,
    UpstreamTimeout,
    UpstreamMalformed,
    Superseded,
    Internal,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidInput(_) => ErrorKind::InvalidInput,
            CoreError::ExternalServiceError(_) => ErrorKind::UpstreamUnavailable,
            CoreError::UpstreamStatus { .. } => ErrorKind::UpstreamRejected,
            CoreError::Timeout => ErrorKind::UpstreamTimeout,
            CoreError::MalformedResponse(_) => ErrorKind::UpstreamMalformed,
            CoreError::Superseded => ErrorKind::Superseded,
            CoreError::InternalServerError => ErrorKind::Internal,
        }
    }

    /// Whether repeating the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CoreError::ExternalServiceError(_) | CoreError::Timeout => true,
            CoreError::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::UpstreamRejected => "upstream_rejected",
            ErrorKind::UpstreamTimeout => "upstream_timeout",
            ErrorKind::UpstreamMalformed => "upstream_malformed",
            ErrorKind::Superseded => "superseded",
            ErrorKind::Internal => "internal",
        }
    }
}
