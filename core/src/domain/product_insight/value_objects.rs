use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

static DATA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^data:(image/[A-Za-z0-9.+-]+);base64,(.*)$").expect("valid data url regex")
});

/// A base64 encoded image, as captured by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
    pub size_bytes: usize,
}

impl ImagePayload {
    /// Accepts either a `data:image/...;base64,` URL or bare base64.
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CoreError::InvalidInput("Missing image content".to_string()));
        }

        let (mime_type, data) = if content.starts_with("data:") {
            let captures = DATA_URL.captures(content).ok_or_else(|| {
                CoreError::InvalidInput("Unsupported image data URL".to_string())
            })?;
            (captures[1].to_string(), captures[2].to_string())
        } else {
            (DEFAULT_IMAGE_MIME.to_string(), content.to_string())
        };

        let data: String = data.chars().filter(|c| !c.is_whitespace()).collect();
        let decoded = general_purpose::STANDARD
            .decode(data.as_bytes())
            .map_err(|e| CoreError::InvalidInput(format!("Image is not valid base64: {}", e)))?;

        if decoded.is_empty() {
            return Err(CoreError::InvalidInput("Image is empty".to_string()));
        }

        if decoded.len() > MAX_IMAGE_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        Ok(Self {
            mime_type,
            data,
            size_bytes: decoded.len(),
        })
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    #[test]
    fn parses_data_url() {
        let payload = ImagePayload::parse(&format!("data:image/png;base64,{}", PIXEL)).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, PIXEL);
        assert!(payload.size_bytes > 0);
        assert_eq!(
            payload.to_data_url(),
            format!("data:image/png;base64,{}", PIXEL)
        );
    }

    #[test]
    fn bare_base64_defaults_to_jpeg() {
        let payload = ImagePayload::parse(PIXEL).unwrap();
        assert_eq!(payload.mime_type, "image/jpeg");
        assert!(payload.to_data_url().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn rejects_non_image_data_urls() {
        let err = ImagePayload::parse("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = ImagePayload::parse("not base64 at all!").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_content() {
        assert!(ImagePayload::parse("   ").is_err());
        assert!(ImagePayload::parse("data:image/png;base64,").is_err());
    }
}
