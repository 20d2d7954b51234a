use serde_json::json;

pub const PRODUCT_SCHEMA_NAME: &str = "chinese_product";

fn nullable(kind: &str, description: &str) -> serde_json::Value {
    json!({ "type": [kind, "null"], "description": description })
}

/// Returns the JSON schema for product recognition responses
pub fn get_product_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": nullable("string", "The name of the Chinese product."),
            "category": nullable("string", "The category the product belongs to."),
            "description": nullable("string", "A description of the Chinese product."),
            "confidence_percentage": nullable(
                "integer",
                "Confidence percentage, from 0 to 100, indicating the reliability of the data."
            ),
            "benefits": nullable("string", "Benefits associated with using the product."),
            "drawbacks": nullable("string", "Drawbacks or downsides of using the product."),
            "recipes": {
                "type": ["array", "null"],
                "description": "Recipes that include the product.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "The name of the recipe." },
                        "description": { "type": "string", "description": "A description of the recipe." },
                        "difficulty": { "type": "string", "description": "The difficulty level of the recipe." },
                        "prepTime": { "type": "string", "description": "Preparation time for the recipe." },
                        "ingredients": {
                            "type": "array",
                            "description": "Ingredients needed for the recipe.",
                            "items": { "type": "string" }
                        },
                        "url": { "type": "string", "description": "A link to the recipe." }
                    },
                    "required": ["name", "description", "difficulty", "prepTime", "ingredients", "url"],
                    "additionalProperties": false
                }
            }
        },
        "required": [
            "name", "category", "description", "confidence_percentage",
            "benefits", "drawbacks", "recipes"
        ],
        "additionalProperties": false
    })
}
