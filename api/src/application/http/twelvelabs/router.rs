use super::handlers::{
    combined_search::{__path_combined_search, combined_search},
    search_data::{__path_search_data, search_data},
    video_search::{__path_video_search, video_search},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_data, video_search, combined_search))]
pub struct TwelveLabsApiDoc;

pub fn twelvelabs_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/twelvelabs/searchData", state.args.server.root_path),
            post(search_data),
        )
        .route(
            &format!("{}/api/twelvelabs/videoSearch", state.args.server.root_path),
            post(video_search),
        )
        .route(
            &format!("{}/api/twelvelabs", state.args.server.root_path),
            post(combined_search),
        )
}
