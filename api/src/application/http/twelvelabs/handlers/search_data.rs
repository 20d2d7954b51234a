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
    path = "/searchData",
    tag = "twelvelabs",
    summary = "Search video clips",
    description = "Runs a visual and audio search over the video index. The response content is a serialized array of ranked matches, possibly empty.",
    request_body = ContentRequest,
    responses(
        (status = 200, body = ContentResponse),
        (status = 400, body = ContentResponse, description = "Empty or oversized query"),
        (status = 502, body = ContentResponse, description = "Upstream failure"),
    ),
)]
pub async fn search_data(
    State(state): State<AppState>,
    Extension(client): Extension<ClientContext>,
    ValidateJson(payload): ValidateJson<ContentRequest>,
) -> Result<Response<ContentResponse>, ApiError> {
    let matches = state
        .in_flight
        .guard(
            client.device_id.as_deref(),
            Feature::VideoSearch,
            state.service.search_clips(payload.content),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ContentResponse::from_json(&matches)?))
}
