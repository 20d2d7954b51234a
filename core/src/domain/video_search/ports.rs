use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    video_search::{
        entities::{VideoClip, VideoDetails, VideoSearchMatch, VideoSearchOutcome},
        value_objects::SearchQuery,
    },
};

/// Client for the hosted video search API
#[cfg_attr(test, mockall::automock)]
pub trait VideoSearchClient: Send + Sync {
    fn search(
        &self,
        query: SearchQuery,
    ) -> impl Future<Output = Result<Vec<VideoSearchMatch>, CoreError>> + Send;

    fn retrieve_video(
        &self,
        video_id: String,
    ) -> impl Future<Output = Result<VideoDetails, CoreError>> + Send;
}

/// Service trait for the two-stage search then stream lookup
#[cfg_attr(test, mockall::automock)]
pub trait VideoSearchService: Send + Sync {
    /// Stage one: ranked matches for a free text query.
    fn search_clips(
        &self,
        query: String,
    ) -> impl Future<Output = Result<Vec<VideoSearchMatch>, CoreError>> + Send;

    /// Stage two: stream URL for the top match. `None` when there are no matches.
    fn resolve_clip(
        &self,
        matches: Vec<VideoSearchMatch>,
    ) -> impl Future<Output = Result<Option<VideoClip>, CoreError>> + Send;

    /// Both stages in one call.
    fn find_clip(
        &self,
        query: String,
    ) -> impl Future<Output = Result<VideoSearchOutcome, CoreError>> + Send;
}
