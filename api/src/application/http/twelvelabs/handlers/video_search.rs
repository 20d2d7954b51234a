use axum::{Extension, extract::State};
use flavormap_core::domain::video_search::{entities::VideoLookup, ports::VideoSearchService};

use crate::application::{
    client_middleware::ClientContext,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::{ContentRequest, ContentResponse, Response},
            },
            app_state::AppState,
        },
        twelvelabs::validators::parse_match_list,
    },
    in_flight::Feature,
};

#[utoipa::path(
    post,
    path = "/videoSearch",
    tag = "twelvelabs",
    summary = "Resolve the top clip",
    description = "Resolves the stream URL of the top match from a serialized match list. An empty list yields `{clip: null}` without contacting the index.",
    request_body = ContentRequest,
    responses(
        (status = 200, body = ContentResponse),
        (status = 400, body = ContentResponse, description = "Invalid match list"),
        (status = 502, body = ContentResponse, description = "Upstream failure"),
    ),
)]
pub async fn video_search(
    State(state): State<AppState>,
    Extension(client): Extension<ClientContext>,
    ValidateJson(payload): ValidateJson<ContentRequest>,
) -> Result<Response<ContentResponse>, ApiError> {
    let matches = parse_match_list(&payload.content)?;

    let clip = state
        .in_flight
        .guard(
            client.device_id.as_deref(),
            Feature::VideoStream,
            state.service.resolve_clip(matches),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ContentResponse::from_json(&VideoLookup { clip })?))
}
