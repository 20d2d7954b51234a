use axum::{Extension, extract::State};
use flavormap_core::domain::product_insight::{
    ports::ProductInsightService, value_objects::ImagePayload,
};
use tracing::info;

use crate::application::{
    client_middleware::ClientContext,
    http::server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{ContentRequest, ContentResponse, Response},
        },
        app_state::AppState,
    },
    in_flight::Feature,
};

#[utoipa::path(
    post,
    path = "/product-insight",
    tag = "groq",
    summary = "Recognize a product",
    description = "Identifies a Chinese food product from a base64 photo or data URL. The response content is a serialized product recognition result whose fields are null when the product is not recognized.",
    request_body = ContentRequest,
    responses(
        (status = 200, body = ContentResponse),
        (status = 400, body = ContentResponse, description = "Invalid image payload"),
        (status = 502, body = ContentResponse, description = "Upstream failure"),
        (status = 504, body = ContentResponse, description = "Upstream timeout"),
    ),
)]
pub async fn product_insight(
    State(state): State<AppState>,
    Extension(client): Extension<ClientContext>,
    ValidateJson(payload): ValidateJson<ContentRequest>,
) -> Result<Response<ContentResponse>, ApiError> {
    let image = ImagePayload::parse(&payload.content)?;
    info!(
        mime_type = %image.mime_type,
        size_bytes = image.size_bytes,
        "received product image"
    );

    let result = state
        .in_flight
        .guard(
            client.device_id.as_deref(),
            Feature::ProductInsight,
            state.service.recognize_product(image),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ContentResponse::from_json(&result)?))
}
