use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, completion::entities::CompletionRequest,
};

/// Client for the hosted completion API.
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    /// Sends the request and returns the provider's raw output text.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
