//! Video generation from a topic.
//!
//! `ArtifactGenerator::generate_artifact` makes two sequential provider
//! calls: one text call returning title, script, and thumbnail prompt as
//! JSON, then one image call for the thumbnail. The image call depends on
//! the text call's output, so the two are never issued concurrently.

pub mod error;
pub mod parse;
pub mod prompt;

use std::sync::Arc;

use base64::Engine;
use tracing::{debug, error, info, warn};

use crate::api::{
    GeneratedImage, ImageGenerator, ImageRequest, TextGenerator, TextRequest, JPEG_MIME_TYPE,
    JSON_MIME_TYPE,
};
use crate::models::Video;
use crate::utils::{next_stamp, word_count};

pub use error::GenerationError;
pub use parse::{parse_video_content, strip_code_fence, VideoContent};
pub use prompt::{content_prompt, MAX_TITLE_CHARS, SCRIPT_WORDS_MAX, SCRIPT_WORDS_MIN};

/// Sampling temperature for the content call
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Encode image bytes as an inline `data:` URI
pub fn to_data_uri(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        base64::engine::general_purpose::STANDARD.encode(&image.bytes)
    )
}

/// Produces `Video` records from topics via the configured provider.
///
/// Stateless between calls; the caller owns the session and conversation.
#[derive(Clone)]
pub struct ArtifactGenerator {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    temperature: f32,
}

impl ArtifactGenerator {
    pub fn new(text: Arc<dyn TextGenerator>, image: Arc<dyn ImageGenerator>) -> Self {
        Self {
            text,
            image,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Generate one video about `topic`. Nothing is retried.
    pub async fn generate_artifact(&self, topic: &str) -> Result<Video, GenerationError> {
        info!(topic = topic, "Generating video content");

        let raw = self
            .text
            .generate_text(TextRequest {
                prompt: content_prompt(topic),
                temperature: self.temperature,
                response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Text generation failed");
                GenerationError::GenerationFailed
            })?;

        let content = parse_video_content(&raw).map_err(|e| {
            error!(error = %e, raw = %raw, "Failed to parse JSON response");
            GenerationError::MalformedResponse
        })?;

        Self::check_content(&content);

        let image = self
            .image
            .generate_image(ImageRequest {
                prompt: content.thumbnail_prompt.clone(),
                count: 1,
                mime_type: JPEG_MIME_TYPE.to_string(),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Thumbnail generation failed");
                GenerationError::GenerationFailed
            })?;

        if image.bytes.is_empty() {
            error!("Thumbnail generation returned an empty image");
            return Err(GenerationError::GenerationFailed);
        }

        let stamp = next_stamp();
        debug!(video_id = %stamp.id, "Video assembled");

        Ok(Video {
            id: stamp.id,
            title: content.video_title,
            script: content.video_script,
            thumbnail_url: to_data_uri(&image),
            created_at: stamp.at,
        })
    }

    /// Log, without rejecting, content that ignores the requested limits
    fn check_content(content: &VideoContent) {
        let title_chars = content.video_title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            warn!(chars = title_chars, "Generated title exceeds requested length");
        }
        let words = word_count(&content.video_script);
        if !(SCRIPT_WORDS_MIN..=SCRIPT_WORDS_MAX).contains(&words) {
            debug!(words = words, "Generated script outside requested word range");
        }
    }
}
