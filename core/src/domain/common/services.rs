use std::sync::Arc;

use crate::domain::{
    completion::{entities::ApproximateLocation, ports::CompletionClient},
    health::entities::ProviderStatus,
    video_search::ports::VideoSearchClient,
};

/// Aggregate service; each feature implements its port trait on it.
pub struct Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    pub(crate) completion_client: Arc<CC>,
    pub(crate) video_client: Arc<VC>,
    pub(crate) search_location: ApproximateLocation,
    pub(crate) providers: ProviderStatus,
}

impl<CC, VC> Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    pub fn new(
        completion_client: CC,
        video_client: VC,
        search_location: ApproximateLocation,
        providers: ProviderStatus,
    ) -> Self {
        Self {
            completion_client: Arc::new(completion_client),
            video_client: Arc::new(video_client),
            search_location,
            providers,
        }
    }
}

impl<CC, VC> Clone for Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    fn clone(&self) -> Self {
        Self {
            completion_client: Arc::clone(&self.completion_client),
            video_client: Arc::clone(&self.video_client),
            search_location: self.search_location.clone(),
            providers: self.providers.clone(),
        }
    }
}
