use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use flavormap_core::domain::common::{generate_uuid_v7, hash_device_id};
use tracing::{Instrument, info_span};
use uuid::Uuid;

pub const DEVICE_ID_HEADER: HeaderName = HeaderName::from_static("x-device-id");
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request client context stored in request extensions
#[derive(Clone, Debug)]
pub struct ClientContext {
    pub device_id: Option<String>,
    pub request_id: Uuid,
}

/// Reads the optional `x-device-id` header, tags the request with a fresh
/// id and echoes that id back in `x-request-id`.
pub async fn client_middleware(mut req: Request, next: Next) -> Response {
    let device_id = req
        .headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let request_id = generate_uuid_v7();
    let device = device_id.as_deref().map(hash_device_id).unwrap_or_default();
    let span = info_span!("client", %request_id, device = %device);

    req.extensions_mut().insert(ClientContext {
        device_id,
        request_id,
    });

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
