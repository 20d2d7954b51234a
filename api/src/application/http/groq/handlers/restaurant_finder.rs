use axum::{Extension, extract::State};
use flavormap_core::domain::restaurant_finder::ports::RestaurantFinderService;

use crate::application::{
    client_middleware::ClientContext,
    http::{
        groq::validators::TasteProfileRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::{ContentRequest, ContentResponse, Response},
            },
            app_state::AppState,
        },
    },
    in_flight::Feature,
};

#[utoipa::path(
    post,
    path = "/restaurant-finder",
    tag = "groq",
    summary = "Recommend restaurants",
    description = "Recommends nearby Chinese restaurants for a serialized taste profile. The response content is a serialized `{restaurants: [...]}` document.",
    request_body = ContentRequest,
    responses(
        (status = 200, body = ContentResponse),
        (status = 400, body = ContentResponse, description = "Invalid taste profile"),
        (status = 502, body = ContentResponse, description = "Upstream failure"),
        (status = 504, body = ContentResponse, description = "Upstream timeout"),
    ),
)]
pub async fn restaurant_finder(
    State(state): State<AppState>,
    Extension(client): Extension<ClientContext>,
    ValidateJson(payload): ValidateJson<ContentRequest>,
) -> Result<Response<ContentResponse>, ApiError> {
    let profile = TasteProfileRequest::parse(&payload.content)?;

    let recommendations = state
        .in_flight
        .guard(
            client.device_id.as_deref(),
            Feature::RestaurantFinder,
            state.service.find_restaurants(profile.into()),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ContentResponse::from_json(&recommendations)?))
}
