use super::handlers::{
    product_insight::{__path_product_insight, product_insight},
    restaurant_finder::{__path_restaurant_finder, restaurant_finder},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(restaurant_finder, product_insight))]
pub struct GroqApiDoc;

pub fn groq_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/groq/restaurant-finder", state.args.server.root_path),
            post(restaurant_finder),
        )
        .route(
            &format!("{}/api/groq/product-insight", state.args.server.root_path),
            post(product_insight),
        )
}
