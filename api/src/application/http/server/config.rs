use axum::{Json, extract::State};
use flavormap_core::domain::{
    completion::entities::ApproximateLocation,
    health::{entities::ProviderStatus, ports::HealthCheckService},
    restaurant_finder::entities::{MealType, PriceRange, TemperaturePreference, Texture},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::app_state::AppState;

/// Options the client needs to render its forms.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClientConfig {
    pub app_version: String,
    pub meal_types: Vec<MealType>,
    pub textures: Vec<Texture>,
    pub temperatures: Vec<TemperaturePreference>,
    pub price_ranges: Vec<PriceRange>,
    pub search_location: ApproximateLocation,
    pub providers: ProviderStatus,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    let search = &state.args.search;

    Json(ClientConfig {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        meal_types: MealType::ALL.to_vec(),
        textures: Texture::ALL.to_vec(),
        temperatures: TemperaturePreference::ALL.to_vec(),
        price_ranges: PriceRange::ALL.to_vec(),
        search_location: ApproximateLocation::new(&search.city, &search.region, &search.country),
        providers: state.service.readiness(),
    })
}
