use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::entities::{
        ApproximateLocation, CompletionInput, CompletionRequest, ResponseFormat,
        SearchContextSize, WebSearchTool,
    },
    prompt::templates::RESTAURANT_FINDER_PROMPT,
    restaurant_finder::{
        entities::{RestaurantRecommendations, TasteProfile},
        schema::{RESTAURANT_SCHEMA_NAME, get_restaurant_schema},
    },
};

/// Sampling temperature for recommendations; higher than product insight for
/// more varied suggestions.
pub const RESTAURANT_FINDER_TEMPERATURE: f32 = 1.0;

/// Build the schema-constrained completion request for a taste profile
pub fn build_restaurant_finder_request(
    profile: &TasteProfile,
    location: &ApproximateLocation,
) -> Result<CompletionRequest, CoreError> {
    let preferences = serde_json::to_string(profile).map_err(|e| {
        tracing::error!("Failed to serialize taste profile: {}", e);
        CoreError::InternalServerError
    })?;

    let instructions = RESTAURANT_FINDER_PROMPT.render(&[("location", &location.describe())]);

    Ok(CompletionRequest {
        inputs: vec![
            CompletionInput::Text(instructions),
            CompletionInput::Text(preferences),
        ],
        response_format: ResponseFormat {
            name: RESTAURANT_SCHEMA_NAME.to_string(),
            schema: get_restaurant_schema(),
            strict: true,
        },
        web_search: Some(WebSearchTool {
            context_size: SearchContextSize::High,
            location: location.clone(),
        }),
        temperature: RESTAURANT_FINDER_TEMPERATURE,
    })
}

/// Parse the provider output into typed recommendations
pub fn parse_recommendations(raw: &str) -> Result<RestaurantRecommendations, CoreError> {
    let mut parsed: RestaurantRecommendations = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Invalid restaurant recommendations format: {}", e);
        CoreError::MalformedResponse(format!("Invalid restaurant recommendations: {}", e))
    })?;

    for restaurant in parsed.restaurants.iter_mut() {
        let confidence = restaurant.confidence_percentage;
        if !(0.0..=100.0).contains(&confidence) {
            tracing::warn!(
                restaurant = %restaurant.name,
                confidence,
                "Clamping out of range confidence percentage"
            );
            restaurant.confidence_percentage = if confidence.is_nan() {
                0.0
            } else {
                confidence.clamp(0.0, 100.0)
            };
        }
    }

    Ok(parsed)
}
