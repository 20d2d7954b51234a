use flavormap_core::domain::restaurant_finder::entities::{
    MealType, TasteProfile, TemperaturePreference, Texture,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Taste profile carried as a JSON string inside the request `content`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct TasteProfileRequest {
    pub meal: MealType,
    #[validate(range(max = 100, message = "sweetness must be between 0 and 100"))]
    pub sweetness: u8,
    #[validate(range(max = 100, message = "sourness must be between 0 and 100"))]
    pub sourness: u8,
    #[validate(range(max = 100, message = "spiciness must be between 0 and 100"))]
    pub spiciness: u8,
    #[validate(range(max = 100, message = "bitterness must be between 0 and 100"))]
    pub bitterness: u8,
    #[validate(range(max = 100, message = "saltiness must be between 0 and 100"))]
    pub saltiness: u8,
    #[validate(range(max = 100, message = "umami must be between 0 and 100"))]
    pub umami: u8,
    #[serde(default)]
    pub texture: Option<Texture>,
    #[serde(default)]
    pub temperature: Option<TemperaturePreference>,
}

impl TasteProfileRequest {
    pub fn parse(content: &str) -> Result<Self, ApiError> {
        let request: TasteProfileRequest = serde_json::from_str(content)
            .map_err(|e| ApiError::BadRequest(format!("Invalid taste profile: {}", e)))?;

        request
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(request)
    }
}

impl From<TasteProfileRequest> for TasteProfile {
    fn from(request: TasteProfileRequest) -> Self {
        TasteProfile {
            meal: request.meal,
            sweetness: request.sweetness,
            sourness: request.sourness,
            spiciness: request.spiciness,
            bitterness: request.bitterness,
            saltiness: request.saltiness,
            umami: request.umami,
            texture: request.texture,
            temperature: request.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_dinner_profile() {
        let request = TasteProfileRequest::parse(
            r#"{"meal":"Dinner","sweetness":50,"sourness":50,"spiciness":80,"bitterness":20,"saltiness":60,"umami":70}"#,
        )
        .unwrap();

        let profile = TasteProfile::from(request);
        assert_eq!(profile.meal, MealType::Dinner);
        assert_eq!(profile.spiciness, 80);
        assert_eq!(profile.texture, None);
    }

    #[test]
    fn accepts_room_temperature_label() {
        let request = TasteProfileRequest::parse(
            r#"{"meal":"Lunch","sweetness":0,"sourness":0,"spiciness":0,"bitterness":0,"saltiness":0,"umami":100,"texture":"Crispy","temperature":"Room Temperature"}"#,
        )
        .unwrap();

        assert_eq!(
            request.temperature,
            Some(TemperaturePreference::RoomTemperature)
        );
    }

    #[test]
    fn rejects_out_of_range_slider() {
        let error = TasteProfileRequest::parse(
            r#"{"meal":"Dinner","sweetness":150,"sourness":50,"spiciness":80,"bitterness":20,"saltiness":60,"umami":70}"#,
        )
        .unwrap_err();

        assert!(error.to_string().contains("sweetness"));
    }

    #[test]
    fn rejects_unknown_meal() {
        let result = TasteProfileRequest::parse(
            r#"{"meal":"Brunch","sweetness":50,"sourness":50,"spiciness":80,"bitterness":20,"saltiness":60,"umami":70}"#,
        );

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn rejects_non_json_content() {
        assert!(TasteProfileRequest::parse("spicy please").is_err());
    }
}
