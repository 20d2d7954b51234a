use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ranked hit from the video search index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoSearchMatch {
    pub video_id: String,
    pub start: f64,
    #[serde(default)]
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Index metadata for a single video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub video_id: String,
    pub stream_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Playable clip resolved from the top search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoClip {
    pub video_id: String,
    pub start: f64,
    pub end: f64,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoLookup {
    pub clip: Option<VideoClip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VideoSearchOutcome {
    pub query: String,
    pub matches: Vec<VideoSearchMatch>,
    pub clip: Option<VideoClip>,
}

impl VideoClip {
    pub fn from_match(top: &VideoSearchMatch, details: &VideoDetails, video_url: String) -> Self {
        Self {
            video_id: top.video_id.clone(),
            start: top.start,
            end: top.end,
            video_url,
            thumbnail_url: top
                .thumbnail_url
                .clone()
                .or_else(|| details.thumbnail_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_tolerates_missing_optional_fields() {
        let parsed: VideoSearchMatch =
            serde_json::from_str(r#"{"video_id":"v1","start":12.5}"#).unwrap();
        assert_eq!(parsed.video_id, "v1");
        assert_eq!(parsed.end, 0.0);
        assert_eq!(parsed.score, None);
    }

    #[test]
    fn empty_lookup_serializes_null_clip() {
        let value = serde_json::to_value(VideoLookup { clip: None }).unwrap();
        assert_eq!(value, serde_json::json!({ "clip": null }));
    }
}
