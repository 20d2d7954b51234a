use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{CompletionConfig, entities::app_errors::CoreError},
        completion::{
            entities::{ApproximateLocation, CompletionInput, CompletionRequest},
            ports::CompletionClient,
        },
    },
    infrastructure::{map_body_error, map_transport_error, read_error_body},
};

/// Client for an OpenAI compatible Responses API.
#[derive(Debug, Clone)]
pub struct OpenAiCompletionClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    input: Vec<InputMessage>,
    text: TextConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    InputText { text: String },
    InputImage { image_url: String, detail: &'static str },
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: FormatConfig,
}

#[derive(Debug, Serialize)]
struct FormatConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Tool {
    WebSearchPreview {
        search_context_size: &'static str,
        user_location: UserLocation,
    },
}

#[derive(Debug, Serialize)]
struct UserLocation {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    location: ApproximateLocation,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl OpenAiCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build completion http client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.api_key,
            model_name: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_request(&self, request: CompletionRequest) -> ResponsesRequest {
        let content = request
            .inputs
            .into_iter()
            .map(|input| match input {
                CompletionInput::Text(text) => ContentPart::InputText { text },
                CompletionInput::Image { url, detail } => ContentPart::InputImage {
                    image_url: url,
                    detail: detail.as_str(),
                },
            })
            .collect();

        let tools = request
            .web_search
            .into_iter()
            .map(|tool| Tool::WebSearchPreview {
                search_context_size: tool.context_size.as_str(),
                user_location: UserLocation {
                    kind: "approximate",
                    location: tool.location,
                },
            })
            .collect();

        ResponsesRequest {
            model: self.model_name.clone(),
            input: vec![InputMessage {
                role: "user",
                content,
            }],
            text: TextConfig {
                format: FormatConfig {
                    kind: "json_schema",
                    name: request.response_format.name,
                    strict: request.response_format.strict,
                    schema: request.response_format.schema,
                },
            },
            tools,
            stream: false,
            temperature: request.temperature,
        }
    }

    async fn call_responses_api(&self, request: ResponsesRequest) -> Result<String, CoreError> {
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_transport_error("Completion API", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = read_error_body("Completion API", response).await?;
            tracing::error!("Completion API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: ResponsesResponse = response
            .json()
            .await
            .map_err(|e| map_body_error("completion", e))?;

        extract_output_text(body)
    }
}

/// Prefers the aggregated `output_text`, otherwise joins every `output_text`
/// block of the message items.
fn extract_output_text(body: ResponsesResponse) -> Result<String, CoreError> {
    if let Some(text) = body.output_text
        && !text.is_empty()
    {
        return Ok(text);
    }

    let mut out = String::new();
    for block in body.output.iter().flat_map(|item| item.content.iter()) {
        match block.kind.as_str() {
            "output_text" => {
                if let Some(text) = &block.text {
                    out.push_str(text);
                }
            }
            "refusal" => {
                let reason = block.refusal.clone().unwrap_or_default();
                tracing::warn!("Completion API refused: {}", reason);
                return Err(CoreError::MalformedResponse(format!(
                    "Model refused to answer: {}",
                    reason
                )));
            }
            _ => {}
        }
    }

    if out.is_empty() {
        return Err(CoreError::MalformedResponse(
            "No output text from completion API".to_string(),
        ));
    }

    Ok(out)
}

impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let request = self.build_request(request);
        tracing::debug!(
            model = %request.model,
            schema = %request.text.format.name,
            "Calling completion API"
        );

        self.call_responses_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, time::Duration};

    use serde_json::json;

    use super::*;
    use crate::domain::{
        completion::entities::{ImageDetail, ResponseFormat, SearchContextSize, WebSearchTool},
        restaurant_finder::{
            entities::{MealType, TasteProfile},
            helpers::build_restaurant_finder_request,
        },
    };

    fn client(base_url: &str) -> OpenAiCompletionClient {
        OpenAiCompletionClient::new(CompletionConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn image_request() -> CompletionRequest {
        CompletionRequest {
            inputs: vec![
                CompletionInput::Text("identify".to_string()),
                CompletionInput::Image {
                    url: "data:image/png;base64,AAAA".to_string(),
                    detail: ImageDetail::High,
                },
            ],
            response_format: ResponseFormat {
                name: "chinese_product".to_string(),
                schema: json!({ "type": "object" }),
                strict: true,
            },
            web_search: Some(WebSearchTool {
                context_size: SearchContextSize::High,
                location: ApproximateLocation::default(),
            }),
            temperature: 0.5,
        }
    }

    #[test]
    fn wire_request_matches_responses_api() {
        let wire = serde_json::to_value(client("http://localhost").build_request(image_request()))
            .unwrap();

        assert_eq!(wire["model"], "gpt-4o");
        assert_eq!(wire["stream"], false);
        assert_eq!(wire["temperature"], 0.5);
        assert_eq!(wire["input"][0]["role"], "user");
        assert_eq!(wire["input"][0]["content"][0]["type"], "input_text");
        assert_eq!(wire["input"][0]["content"][1]["type"], "input_image");
        assert_eq!(wire["input"][0]["content"][1]["detail"], "high");
        assert_eq!(wire["text"]["format"]["type"], "json_schema");
        assert_eq!(wire["text"]["format"]["name"], "chinese_product");
        assert_eq!(wire["text"]["format"]["strict"], true);
        assert_eq!(
            wire["tools"][0],
            json!({
                "type": "web_search_preview",
                "search_context_size": "high",
                "user_location": { "type": "approximate" }
            })
        );
    }

    #[test]
    fn restaurant_request_carries_location_bias() {
        let profile = TasteProfile {
            meal: MealType::Lunch,
            sweetness: 10,
            sourness: 20,
            spiciness: 30,
            bitterness: 40,
            saltiness: 50,
            umami: 60,
            texture: None,
            temperature: None,
        };
        let location = ApproximateLocation::new("San Francisco, Chinatown", "California", "US");
        let request = build_restaurant_finder_request(&profile, &location).unwrap();

        let wire = serde_json::to_value(client("http://localhost").build_request(request)).unwrap();

        assert_eq!(wire["temperature"], 1.0);
        assert_eq!(
            wire["tools"][0]["user_location"],
            json!({
                "type": "approximate",
                "city": "San Francisco, Chinatown",
                "region": "California",
                "country": "US"
            })
        );
    }

    #[test]
    fn extracts_text_from_message_blocks() {
        let body: ResponsesResponse = serde_json::from_value(json!({
            "output": [
                { "type": "web_search_call", "id": "ws_1", "status": "completed" },
                { "type": "message", "content": [
                    { "type": "output_text", "text": "{\"restaurants\":", "annotations": [] },
                    { "type": "output_text", "text": "[]}", "annotations": [] }
                ]}
            ]
        }))
        .unwrap();

        assert_eq!(extract_output_text(body).unwrap(), "{\"restaurants\":[]}");
    }

    #[test]
    fn refusal_is_malformed() {
        let body: ResponsesResponse = serde_json::from_value(json!({
            "output": [{ "type": "message", "content": [
                { "type": "refusal", "refusal": "I can't help with that." }
            ]}]
        }))
        .unwrap();

        assert!(matches!(
            extract_output_text(body),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn complete_posts_to_responses_endpoint() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/responses")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "text": { "format": { "name": "chinese_product" } }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"resp_1","output_text":"{\"name\":null}"}"#)
            .create_async()
            .await;

        let text = client(&server.url()).complete(image_request()).await.unwrap();

        assert_eq!(text, "{\"name\":null}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn complete_maps_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/responses")
            .with_status(429)
            .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .complete(image_request())
            .await
            .unwrap_err();

        match err {
            CoreError::UpstreamStatus { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("Rate limit"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn complete_rejects_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/responses")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let err = client(&server.url())
            .complete(image_request())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn stalled_body_is_a_timeout() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/responses")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_millis(1500));
                w.write_all(br#"{"output_text":"{}"}"#)
            })
            .create_async()
            .await;

        let client = OpenAiCompletionClient::new(CompletionConfig {
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
            base_url: server.url(),
            timeout: Duration::from_millis(300),
        })
        .unwrap();

        let err = client.complete(image_request()).await.unwrap_err();

        assert_eq!(err, CoreError::Timeout);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let err = client("http://127.0.0.1:9")
            .complete(image_request())
            .await
            .unwrap_err();

        assert!(err.is_retryable());
    }
}
