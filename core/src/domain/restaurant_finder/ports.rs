use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant_finder::entities::{RestaurantRecommendations, TasteProfile},
};

/// Service trait for restaurant recommendations
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantFinderService: Send + Sync {
    fn find_restaurants(
        &self,
        profile: TasteProfile,
    ) -> impl Future<Output = Result<RestaurantRecommendations, CoreError>> + Send;
}
