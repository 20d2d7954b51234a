pub mod product_insight;
pub mod restaurant_finder;
