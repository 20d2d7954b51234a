pub mod llm;
pub mod video;

use crate::domain::common::entities::app_errors::CoreError;

/// Maps a transport-level reqwest failure onto the core error taxonomy.
pub(crate) fn map_transport_error(service: &str, error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        tracing::error!("{} request timed out: {}", service, error);
        return CoreError::Timeout;
    }

    tracing::error!("{} request failed: {}", service, error);
    CoreError::ExternalServiceError(format!("{} error: {}", service, error))
}

/// Maps a failure while reading a response body. A timeout keeps its kind,
/// anything else means the payload could not be decoded.
pub(crate) fn map_body_error(service: &str, error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        return map_transport_error(service, error);
    }

    tracing::error!("Failed to parse {} response: {}", service, error);
    CoreError::MalformedResponse(format!("Failed to parse {} response: {}", service, error))
}

/// Reads the body of a non-success response for logging.
pub(crate) async fn read_error_body(
    service: &str,
    response: reqwest::Response,
) -> Result<String, CoreError> {
    match response.text().await {
        Ok(text) => Ok(text),
        Err(e) if e.is_timeout() => Err(map_transport_error(service, e)),
        Err(_) => Ok(String::new()),
    }
}
