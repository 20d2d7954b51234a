use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::CompletionClient,
    restaurant_finder::{
        entities::{RestaurantRecommendations, TasteProfile},
        helpers::{build_restaurant_finder_request, parse_recommendations},
        ports::RestaurantFinderService,
    },
    video_search::ports::VideoSearchClient,
};

impl<CC, VC> RestaurantFinderService for Service<CC, VC>
where
    CC: CompletionClient,
    VC: VideoSearchClient,
{
    async fn find_restaurants(
        &self,
        profile: TasteProfile,
    ) -> Result<RestaurantRecommendations, CoreError> {
        let request = build_restaurant_finder_request(&profile, &self.search_location)?;

        tracing::debug!(meal = ?profile.meal, "Requesting restaurant recommendations");
        let raw_response = self.completion_client.complete(request).await?;

        let recommendations = parse_recommendations(&raw_response)?;
        tracing::info!(
            count = recommendations.restaurants.len(),
            "Restaurant recommendations received"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        completion::{entities::ApproximateLocation, ports::MockCompletionClient},
        health::entities::ProviderStatus,
        restaurant_finder::entities::MealType,
        video_search::ports::MockVideoSearchClient,
    };

    fn service(completion: MockCompletionClient) -> Service<MockCompletionClient, MockVideoSearchClient> {
        Service::new(
            completion,
            MockVideoSearchClient::new(),
            ApproximateLocation::new("San Francisco, Chinatown", "California", "US"),
            ProviderStatus::default(),
        )
    }

    fn profile() -> TasteProfile {
        TasteProfile {
            meal: MealType::Dinner,
            sweetness: 50,
            sourness: 50,
            spiciness: 80,
            bitterness: 20,
            saltiness: 60,
            umami: 70,
            texture: None,
            temperature: None,
        }
    }

    const ONE_RESTAURANT: &str = r#"{"restaurants":[{
        "name":"Mister Jiu's","description":"Modern Cantonese",
        "address":"28 Waverly Pl, San Francisco, CA","learn_more_link":"https://misterjius.com",
        "tags":["cantonese"],"confidence_percentage":72.5,"cuisine_type":"Cantonese",
        "wait_time":"Long","price_range":"$$$"}]}"#;

    #[tokio::test]
    async fn find_restaurants_returns_parsed_recommendations() {
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .withf(|request| request.temperature == 1.0 && request.inputs.len() == 2)
            .times(1)
            .returning(|_| Box::pin(async { Ok(ONE_RESTAURANT.to_string()) }));

        let result = service(completion).find_restaurants(profile()).await.unwrap();

        assert_eq!(result.restaurants.len(), 1);
        assert_eq!(result.restaurants[0].name, "Mister Jiu's");
    }

    #[tokio::test]
    async fn find_restaurants_propagates_upstream_failure() {
        let mut completion = MockCompletionClient::new();
        completion.expect_complete().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::UpstreamStatus {
                    status: 429,
                    message: "quota".to_string(),
                })
            })
        });

        let err = service(completion)
            .find_restaurants(profile())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn find_restaurants_rejects_unparseable_output() {
        let mut completion = MockCompletionClient::new();
        completion
            .expect_complete()
            .returning(|_| Box::pin(async { Ok("not json".to_string()) }));

        let err = service(completion)
            .find_restaurants(profile())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }
}
