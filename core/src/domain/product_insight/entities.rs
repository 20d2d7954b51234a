use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Product details returned by the completion API. Every scalar is nullable
/// because the provider is told to null all fields for non-Chinese products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRecognitionResult {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub confidence_percentage: Option<i64>,
    pub benefits: Option<String>,
    pub drawbacks: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    #[serde(rename = "prepTime")]
    pub prep_time: String,
    pub ingredients: Vec<String>,
    pub url: String,
}

impl ProductRecognitionResult {
    pub fn is_recognized(&self) -> bool {
        self.name
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
