//! Capability traits for the two provider calls a video needs.

use async_trait::async_trait;

use super::ProviderError;

/// MIME type requesting a structured JSON reply from the text model
pub const JSON_MIME_TYPE: &str = "application/json";

/// MIME type for generated thumbnails
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    pub prompt: String,
    pub temperature: f32,
    /// Requested response format, e.g. `application/json`
    pub response_mime_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub prompt: String,
    pub count: u32,
    pub mime_type: String,
}

/// Raw image bytes as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return the model's raw text reply
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError>;
}

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Return the first generated image
    async fn generate_image(&self, request: ImageRequest) -> Result<GeneratedImage, ProviderError>;
}
