use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::entities::{
        ApproximateLocation, CompletionInput, CompletionRequest, ImageDetail, ResponseFormat,
        SearchContextSize, WebSearchTool,
    },
    product_insight::{
        entities::ProductRecognitionResult,
        schema::{PRODUCT_SCHEMA_NAME, get_product_schema},
        value_objects::ImagePayload,
    },
    prompt::templates::PRODUCT_INSIGHT_PROMPT,
};

pub const PRODUCT_INSIGHT_TEMPERATURE: f32 = 0.5;

/// Build the schema-constrained completion request for a product image
pub fn build_product_insight_request(image: &ImagePayload) -> CompletionRequest {
    CompletionRequest {
        inputs: vec![
            CompletionInput::Text(PRODUCT_INSIGHT_PROMPT.render(&[])),
            CompletionInput::Image {
                url: image.to_data_url(),
                detail: ImageDetail::High,
            },
        ],
        response_format: ResponseFormat {
            name: PRODUCT_SCHEMA_NAME.to_string(),
            schema: get_product_schema(),
            strict: true,
        },
        web_search: Some(WebSearchTool {
            context_size: SearchContextSize::High,
            location: ApproximateLocation::default(),
        }),
        temperature: PRODUCT_INSIGHT_TEMPERATURE,
    }
}

/// Parse the provider output into a typed recognition result
pub fn parse_product(raw: &str) -> Result<ProductRecognitionResult, CoreError> {
    let mut parsed: ProductRecognitionResult = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Invalid product recognition format: {}", e);
        CoreError::MalformedResponse(format!("Invalid product recognition: {}", e))
    })?;

    if let Some(confidence) = parsed.confidence_percentage
        && !(0..=100).contains(&confidence)
    {
        tracing::warn!(confidence, "Clamping out of range confidence percentage");
        parsed.confidence_percentage = Some(confidence.clamp(0, 100));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    #[test]
    fn request_sends_prompt_and_high_detail_image() {
        let image = ImagePayload::parse(&format!("data:image/png;base64,{}", PIXEL)).unwrap();
        let request = build_product_insight_request(&image);

        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.response_format.name, "chinese_product");
        assert!(matches!(&request.inputs[0], CompletionInput::Text(t) if t.contains("Chinese product")));
        match &request.inputs[1] {
            CompletionInput::Image { url, detail } => {
                assert!(url.starts_with("data:image/png;base64,"));
                assert_eq!(*detail, ImageDetail::High);
            }
            other => panic!("unexpected input {:?}", other),
        }

        let tool = request.web_search.expect("web search enabled");
        assert_eq!(tool.location, ApproximateLocation::default());
    }

    #[test]
    fn parse_reads_recipes() {
        let raw = r#"{
            "name":"Lao Gan Ma Spicy Chili Crisp","category":"Condiment",
            "description":"Chili oil with crispy bits","confidence_percentage":93,
            "benefits":"Adds heat","drawbacks":"Oily",
            "recipes":[{"name":"Chili crisp noodles","description":"Quick noodles",
                "difficulty":"Easy","prepTime":"10 minutes",
                "ingredients":["noodles","chili crisp"],"url":"https://example.com/noodles"}]
        }"#;

        let parsed = parse_product(raw).unwrap();
        assert!(parsed.is_recognized());
        assert_eq!(parsed.recipes.len(), 1);
        assert_eq!(parsed.recipes[0].prep_time, "10 minutes");
    }

    #[test]
    fn parse_clamps_negative_confidence() {
        let raw = r#"{"name":"Pu'er","category":"Tea","description":"","confidence_percentage":-5,
            "benefits":"","drawbacks":"","recipes":[]}"#;
        assert_eq!(parse_product(raw).unwrap().confidence_percentage, Some(0));
    }

    #[test]
    fn parse_rejects_truncated_output() {
        let err = parse_product(r#"{"name":"Moutai""#).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }
}
