use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::CompletionClient,
    video_search::{
        entities::{VideoClip, VideoSearchMatch, VideoSearchOutcome},
        ports::{VideoSearchClient, VideoSearchService},
        value_objects::{SearchQuery, validate_video_id},
    },
};

impl<CC, VC> VideoSearchService for Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    async fn search_clips(&self, query: String) -> Result<Vec<VideoSearchMatch>, CoreError> {
        let query = SearchQuery::new(&query)?;

        let matches = self.video_client.search(query.clone()).await?;
        tracing::info!(
            query = %query.text,
            matches = matches.len(),
            "Video search completed"
        );

        Ok(matches)
    }

    async fn resolve_clip(
        &self,
        matches: Vec<VideoSearchMatch>,
    ) -> Result<Option<VideoClip>, CoreError> {
        // Stage two never runs without a stage one hit.
        let Some(top) = matches.first() else {
            tracing::info!("No video matches, skipping stream lookup");
            return Ok(None);
        };

        validate_video_id(&top.video_id)?;

        let details = self.video_client.retrieve_video(top.video_id.clone()).await?;

        let video_url = details.stream_url.clone().ok_or_else(|| {
            tracing::error!(video_id = %top.video_id, "Video has no stream url");
            CoreError::MalformedResponse(format!("Video {} has no stream url", top.video_id))
        })?;

        Ok(Some(VideoClip::from_match(top, &details, video_url)))
    }

    async fn find_clip(&self, query: String) -> Result<VideoSearchOutcome, CoreError> {
        let matches = self.search_clips(query.clone()).await?;
        let clip = self.resolve_clip(matches.clone()).await?;

        Ok(VideoSearchOutcome {
            query: query.trim().to_string(),
            matches,
            clip,
        })
    }
}
