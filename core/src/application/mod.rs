use crate::{
    domain::{
        common::{FlavorMapConfig, entities::app_errors::CoreError, services::Service},
        health::entities::ProviderStatus,
    },
    infrastructure::{llm::OpenAiCompletionClient, video::TwelveLabsVideoClient},
};

pub type FlavorMapService = Service<OpenAiCompletionClient, TwelveLabsVideoClient>;

pub fn create_service(config: FlavorMapConfig) -> Result<FlavorMapService, CoreError> {
    let providers = ProviderStatus {
        completion: config.completion.is_configured(),
        video_search: config.video.is_configured(),
    };

    if !providers.completion {
        tracing::warn!("Completion API key is not configured");
    }
    if !providers.video_search {
        tracing::warn!("Video search API key or index id is not configured");
    }

    let completion_client = OpenAiCompletionClient::new(config.completion)?;
    let video_client = TwelveLabsVideoClient::new(config.video)?;

    Ok(Service::new(
        completion_client,
        video_client,
        config.search_location,
        providers,
    ))
}
