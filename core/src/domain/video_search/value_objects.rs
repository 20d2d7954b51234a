use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_QUERY_LENGTH: usize = 500;

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,128}$").expect("valid video id regex"));

/// Index video ids are opaque alphanumeric tokens. Anything else is refused
/// before it can reach a retrieval URL.
pub fn validate_video_id(video_id: &str) -> Result<(), CoreError> {
    if video_id.trim().is_empty() {
        return Err(CoreError::InvalidInput("Top match has no video_id".to_string()));
    }
    if !VIDEO_ID.is_match(video_id) {
        return Err(CoreError::InvalidInput(format!(
            "Invalid video_id: {}",
            video_id.escape_default()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchModality {
    Visual,
    Audio,
}

impl SearchModality {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchModality::Visual => "visual",
            SearchModality::Audio => "audio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub modalities: Vec<SearchModality>,
}

impl SearchQuery {
    /// Free text query over both visual and audio content.
    pub fn new(text: &str) -> Result<Self, CoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::InvalidInput("Search query is empty".to_string()));
        }
        if text.chars().count() > MAX_QUERY_LENGTH {
            return Err(CoreError::InvalidInput(format!(
                "Search query must be at most {} characters",
                MAX_QUERY_LENGTH
            )));
        }

        Ok(Self {
            text: text.to_string(),
            modalities: vec![SearchModality::Visual, SearchModality::Audio],
        })
    }
}
