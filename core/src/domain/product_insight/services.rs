use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::CompletionClient,
    product_insight::{
        entities::ProductRecognitionResult,
        helpers::{build_product_insight_request, parse_product},
        ports::ProductInsightService,
        value_objects::ImagePayload,
    },
    video_search::ports::VideoSearchClient,
};

impl<CC, VC> ProductInsightService for Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    async fn recognize_product(
        &self,
        image: ImagePayload,
    ) -> Result<ProductRecognitionResult, CoreError> {
        tracing::debug!(
            mime_type = %image.mime_type,
            size_bytes = image.size_bytes,
            "Requesting product recognition"
        );

        let request = build_product_insight_request(&image);
        let raw_response = self.completion_client.complete(request).await?;

        let result = parse_product(&raw_response)?;
        tracing::info!(
            recognized = result.is_recognized(),
            recipes = result.recipes.len(),
            "Product recognition received"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        completion::{
            entities::{ApproximateLocation, CompletionInput},
            ports::MockCompletionClient,
        },
        health::entities::ProviderStatus,
        video_search::ports::MockVideoSearchClient,
    };

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    fn service(completion: MockCompletionClient) -> Service<MockCompletionClient, MockVideoSearchClient> {
        Service::new(
            completion,
            MockVideoSearchClient::new(),
            ApproximateLocation::default(),
            ProviderStatus::default(),
        )
    }

    #[tokio::test]
    async fn recognize_product_returns_unrecognized_result_for_nulls() {
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .withf(|request| {
                request.temperature == 0.5
                    && matches!(request.inputs.get(1), Some(CompletionInput::Image { .. }))
            })
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(r#"{"name":null,"category":null,"description":null,
                        "confidence_percentage":null,"benefits":null,"drawbacks":null,
                        "recipes":null}"#
                        .to_string())
                })
            });

        let image = ImagePayload::parse(PIXEL).unwrap();
        let result = service(completion).recognize_product(image).await.unwrap();

        assert!(!result.is_recognized());
    }

    #[tokio::test]
    async fn recognize_product_surfaces_timeouts() {
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .returning(|_| Box::pin(async { Err(CoreError::Timeout) }));

        let image = ImagePayload::parse(PIXEL).unwrap();
        let err = service(completion)
            .recognize_product(image)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Timeout);
    }
}
