use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Texture {
    Crunchy,
    Creamy,
    Chewy,
    Soft,
    Crispy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TemperaturePreference {
    Hot,
    Warm,
    Cold,
    #[serde(rename = "Room Temperature")]
    RoomTemperature,
}

impl MealType {
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
        MealType::Dessert,
    ];
}

impl Texture {
    pub const ALL: [Texture; 5] = [
        Texture::Crunchy,
        Texture::Creamy,
        Texture::Chewy,
        Texture::Soft,
        Texture::Crispy,
    ];
}

impl TemperaturePreference {
    pub const ALL: [TemperaturePreference; 4] = [
        TemperaturePreference::Hot,
        TemperaturePreference::Warm,
        TemperaturePreference::Cold,
        TemperaturePreference::RoomTemperature,
    ];
}

/// Flavor preferences submitted from the recommendation form. Slider values
/// range from 0 to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TasteProfile {
    pub meal: MealType,
    pub sweetness: u8,
    pub sourness: u8,
    pub spiciness: u8,
    pub bitterness: u8,
    pub saltiness: u8,
    pub umami: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<Texture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperaturePreference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
}

impl PriceRange {
    pub const ALL: [PriceRange; 3] = [PriceRange::Budget, PriceRange::Moderate, PriceRange::Expensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Expensive => "$$$",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantRecommendation {
    pub name: String,
    pub description: String,
    pub address: String,
    pub learn_more_link: String,
    pub tags: Vec<String>,
    pub confidence_percentage: f64,
    pub cuisine_type: String,
    pub wait_time: String,
    pub price_range: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantRecommendations {
    pub restaurants: Vec<RestaurantRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taste_profile_matches_form_payload() {
        let profile: TasteProfile = serde_json::from_str(
            r#"{"meal":"Dinner","sweetness":50,"sourness":50,"spiciness":80,
                "bitterness":20,"saltiness":60,"umami":70,"temperature":"Room Temperature"}"#,
        )
        .unwrap();

        assert_eq!(profile.meal, MealType::Dinner);
        assert_eq!(profile.spiciness, 80);
        assert_eq!(profile.texture, None);
        assert_eq!(
            profile.temperature,
            Some(TemperaturePreference::RoomTemperature)
        );

        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("texture").is_none());
        assert_eq!(value["temperature"], "Room Temperature");
    }

    #[test]
    fn price_range_uses_dollar_signs() {
        let value = serde_json::to_value(PriceRange::Moderate).unwrap();
        assert_eq!(value, "$$");

        let parsed: PriceRange = serde_json::from_str(r#""$$$""#).unwrap();
        assert_eq!(parsed, PriceRange::Expensive);
        assert!(serde_json::from_str::<PriceRange>(r#""$$$$""#).is_err());
    }
}
