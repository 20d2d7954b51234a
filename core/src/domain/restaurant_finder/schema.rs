use serde_json::json;

use crate::domain::restaurant_finder::entities::PriceRange;

pub const RESTAURANT_SCHEMA_NAME: &str = "restaurant_array";

/// Returns the JSON schema for restaurant recommendation responses
pub fn get_restaurant_schema() -> serde_json::Value {
    let price_ranges: Vec<&str> = PriceRange::ALL.iter().map(PriceRange::as_str).collect();

    json!({
        "type": "object",
        "properties": {
            "restaurants": {
                "type": "array",
                "description": "Restaurants ordered by confidence percentage.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "The name of the restaurant."
                        },
                        "description": {
                            "type": "string",
                            "description": "A short description of the restaurant and why it matches the taste."
                        },
                        "address": {
                            "type": "string",
                            "description": "The exact address of the restaurant."
                        },
                        "learn_more_link": {
                            "type": "string",
                            "description": "The restaurant's own website, or https://www.google.com/search?q=[name] when it has none."
                        },
                        "tags": {
                            "type": "array",
                            "description": "Tags associated with the restaurant.",
                            "items": { "type": "string" }
                        },
                        "confidence_percentage": {
                            "type": "number",
                            "description": "How well the restaurant matches the preferences, from 0 to 100."
                        },
                        "cuisine_type": {
                            "type": "string",
                            "description": "The type of cuisine offered by the restaurant."
                        },
                        "wait_time": {
                            "type": "string",
                            "description": "Estimated wait time for a table or service. One word only."
                        },
                        "price_range": {
                            "type": "string",
                            "description": "Price range of the restaurant.",
                            "enum": price_ranges
                        }
                    },
                    "required": [
                        "name", "description", "address", "learn_more_link", "tags",
                        "confidence_percentage", "cuisine_type", "wait_time", "price_range"
                    ],
                    "additionalProperties": false
                }
            }
        },
        "required": ["restaurants"],
        "additionalProperties": false
    })
}
