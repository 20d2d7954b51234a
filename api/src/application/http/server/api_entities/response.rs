use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use flavormap_core::domain::common::entities::app_errors::ErrorKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body returned on every failure, kept identical to what existing clients parse.
pub const FALLBACK_MESSAGE: &str = "An unexpected error occured. Please try again.";

pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
        }
    }
}

/// Request envelope: `content` carries either a JSON document or a data URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ContentRequest {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Response envelope. On success `content` is the JSON-encoded result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ContentResponse {
    pub fn from_json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content: serde_json::to_string(value)?,
            error: None,
        })
    }

    pub fn failure(error: ErrorBody) -> Self {
        Self {
            content: FALLBACK_MESSAGE.to_string(),
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error() {
        let response = ContentResponse::from_json(&json!({ "clip": null })).unwrap();
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value, json!({ "content": "{\"clip\":null}" }));
    }

    #[test]
    fn failure_envelope_keeps_fallback_text() {
        let response = ContentResponse::failure(ErrorBody {
            kind: ErrorKind::UpstreamTimeout,
            message: "timed out".to_string(),
            retryable: true,
        });
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["content"], FALLBACK_MESSAGE);
        assert_eq!(value["error"]["kind"], "upstream_timeout");
        assert_eq!(value["error"]["retryable"], true);
    }
}
