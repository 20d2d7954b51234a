use axum::{Extension, extract::State};
use flavormap_core::domain::video_search::ports::VideoSearchService;

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
    path = "",
    tag = "twelvelabs",
    summary = "Search and resolve in one call",
    description = "Searches the video index and resolves the top match. The response content is a serialized `{query, matches, clip}` outcome.",
    request_body = ContentRequest,
    responses(
        (status = 200, body = ContentResponse),
        (status = 400, body = ContentResponse, description = "Empty or oversized query"),
        (status = 502, body = ContentResponse, description = "Upstream failure"),
    ),
)]
pub async fn combined_search(
    State(state): State<AppState>,
    Extension(client): Extension<ClientContext>,
    ValidateJson(payload): ValidateJson<ContentRequest>,
) -> Result<Response<ContentResponse>, ApiError> {
    let outcome = state
        .in_flight
        .guard(
            client.device_id.as_deref(),
            Feature::VideoSearch,
            state.service.find_clip(payload.content),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ContentResponse::from_json(&outcome)?))
}
