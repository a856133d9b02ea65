//! Mock provider returning deterministic content.
//!
//! Selected when the configured provider is `mock`; also backs the generator
//! tests. The text reply is built from the topic found in the prompt.

use async_trait::async_trait;
use tracing::info;

use super::provider::{GeneratedImage, ImageGenerator, ImageRequest, TextGenerator, TextRequest};
use super::ProviderError;

/// Smallest byte sequence that still starts and ends like a JPEG
const MOCK_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];

#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Pull the quoted topic out of a generation prompt
fn topic_from_prompt(prompt: &str) -> &str {
    const MARKER: &str = "based on the topic: \"";
    prompt
        .find(MARKER)
        .map(|start| &prompt[start + MARKER.len()..])
        .and_then(|rest| rest.find("\".").map(|end| &rest[..end]))
        .unwrap_or("your topic")
}

#[async_trait]
impl TextGenerator for MockProvider {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError> {
        info!("Mock provider processing text request");

        let topic = topic_from_prompt(&request.prompt);
        let reply = serde_json::json!({
            "videoTitle": format!("Everything You Need to Know About {}", topic),
            "videoScript": format!(
                "Ever wondered about {topic}?\nHere is the short version.\nThanks for watching!"
            ),
            "thumbnailPrompt": format!("Cinematic close-up illustrating {}, vibrant colors", topic),
        });

        // Wrapped in a fence, as real models often do
        Ok(format!("```json\n{}\n```", reply))
    }
}

#[async_trait]
impl ImageGenerator for MockProvider {
    async fn generate_image(&self, request: ImageRequest) -> Result<GeneratedImage, ProviderError> {
        info!("Mock provider processing image request");

        Ok(GeneratedImage {
            bytes: MOCK_JPEG.to_vec(),
            mime_type: request.mime_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_from_prompt() {
        let prompt = "for a short video based on the topic: \"rust traits\".\n\nPlease";
        assert_eq!(topic_from_prompt(prompt), "rust traits");
        assert_eq!(topic_from_prompt("no marker here"), "your topic");
    }

    #[tokio::test]
    async fn test_mock_text_is_fenced_json() {
        let reply = MockProvider::new()
            .generate_text(TextRequest {
                prompt: "based on the topic: \"bees\".".to_string(),
                temperature: 0.8,
                response_mime_type: None,
            })
            .await
            .unwrap();

        assert!(reply.starts_with("```json\n"));
        assert!(reply.contains("About bees"));
    }

    #[tokio::test]
    async fn test_mock_image_echoes_mime_type() {
        let image = MockProvider::new()
            .generate_image(ImageRequest {
                prompt: "p".to_string(),
                count: 1,
                mime_type: "image/jpeg".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(&image.bytes[..2], &[0xFF, 0xD8]);
    }
}
