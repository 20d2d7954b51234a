pub mod common;
pub mod completion;
pub mod health;
pub mod product_insight;
pub mod prompt;
pub mod restaurant_finder;
pub mod video_search;
