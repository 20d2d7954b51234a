use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which upstream providers have credentials configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderStatus {
    pub completion: bool,
    pub video_search: bool,
}

impl ProviderStatus {
    pub fn is_ready(&self) -> bool {
        self.completion && self.video_search
    }
}
