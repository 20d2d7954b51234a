use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provider-neutral description of one schema-constrained completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub inputs: Vec<CompletionInput>,
    pub response_format: ResponseFormat,
    pub web_search: Option<WebSearchTool>,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionInput {
    Text(String),
    Image { url: String, detail: ImageDetail },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDetail {
    Low,
    High,
    Auto,
}

impl ImageDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageDetail::Low => "low",
            ImageDetail::High => "high",
            ImageDetail::Auto => "auto",
        }
    }
}

/// Named JSON schema the provider must conform its output to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFormat {
    pub name: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebSearchTool {
    pub context_size: SearchContextSize,
    pub location: ApproximateLocation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchContextSize {
    Low,
    Medium,
    High,
}

impl SearchContextSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchContextSize::Low => "low",
            SearchContextSize::Medium => "medium",
            SearchContextSize::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApproximateLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl ApproximateLocation {
    pub fn new(
        city: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: Some(city.into()),
            region: Some(region.into()),
            country: Some(country.into()),
        }
    }

    /// Human readable form used inside prompts, e.g. "San Francisco, California".
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [self.city.as_deref(), self.region.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.country.clone().unwrap_or_default()
        } else {
            parts.join(", ")
        }
    }
}
