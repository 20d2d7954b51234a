use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_insight::{entities::ProductRecognitionResult, value_objects::ImagePayload},
};

/// Service trait for product image recognition
#[cfg_attr(test, mockall::automock)]
pub trait ProductInsightService: Send + Sync {
    fn recognize_product(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<ProductRecognitionResult, CoreError>> + Send;
}
