use flavormap_core::domain::video_search::entities::VideoSearchMatch;
use serde::Deserialize;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Match lists arrive either as the bare array returned by `searchData` or
/// still wrapped in the search API's `{data: [...]}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MatchList {
    Plain(Vec<VideoSearchMatch>),
    Wrapped { data: Vec<VideoSearchMatch> },
}

pub fn parse_match_list(content: &str) -> Result<Vec<VideoSearchMatch>, ApiError> {
    let list: MatchList = serde_json::from_str(content)
        .map_err(|_| ApiError::BadRequest("Invalid video match list".to_string()))?;

    Ok(match list {
        MatchList::Plain(matches) => matches,
        MatchList::Wrapped { data } => data,
    })
}
