use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flavormap_core::domain::common::entities::app_errors::{CoreError, ErrorKind};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, warn};
use validator::Validate;

use super::response::{ContentResponse, ErrorBody};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(CoreError),

    #[error("Request superseded by a newer request")]
    Conflict,

    #[error("{0}")]
    InternalServerError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::Superseded => ApiError::Conflict,
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
            other => ApiError::Upstream(other),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InternalServerError(format!("Failed to encode response: {}", error))
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::BadRequest(_) => ErrorKind::InvalidInput,
            ApiError::Upstream(e) => e.kind(),
            ApiError::Conflict => ErrorKind::Superseded,
            ApiError::InternalServerError(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::UpstreamUnavailable
            | ErrorKind::UpstreamRejected
            | ErrorKind::UpstreamMalformed => StatusCode::BAD_GATEWAY,
            ErrorKind::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::Superseded => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn retryable(&self) -> bool {
        match self {
            ApiError::Upstream(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Caller-facing message. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Conflict => self.to_string(),
            ApiError::Upstream(e) => match e.kind() {
                ErrorKind::UpstreamTimeout => "The upstream service timed out".to_string(),
                ErrorKind::UpstreamMalformed => {
                    "The upstream service returned an unreadable response".to_string()
                }
                ErrorKind::UpstreamRejected => "The upstream service rejected the request".to_string(),
                _ => "The upstream service is unavailable".to_string(),
            },
            ApiError::InternalServerError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(kind = self.kind().as_str(), "request failed: {}", self);
        } else {
            warn!(kind = self.kind().as_str(), "request rejected: {}", self);
        }

        let body = ContentResponse::failure(ErrorBody {
            kind: self.kind(),
            message: self.public_message(),
            retryable: self.retryable(),
        });

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
