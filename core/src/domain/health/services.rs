use crate::domain::{
    common::services::Service,
    completion::ports::CompletionClient,
    health::{entities::ProviderStatus, ports::HealthCheckService},
    video_search::ports::VideoSearchClient,
};

impl<CC, VC> HealthCheckService for Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    fn readiness(&self) -> ProviderStatus {
        self.providers.clone()
    }
}
