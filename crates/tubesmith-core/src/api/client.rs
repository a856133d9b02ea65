//! HTTP client for the Generative Language API.
//!
//! `GeminiClient` implements both provider capabilities: text generation via
//! `generateContent` and thumbnail generation via the Imagen `predict`
//! endpoint. Calls are single-shot; nothing here retries.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::{GeneratedImage, ImageGenerator, ImageRequest, TextGenerator, TextRequest};
use super::ProviderError;

// ============================================================================
// Constants
// ============================================================================

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model for titles, scripts, and thumbnail prompts
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for thumbnails
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// HTTP request timeout in seconds.
/// Image generation routinely takes tens of seconds.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    temperature: f32,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: Vec<PredictInstance<'a>>,
    parameters: PredictParameters<'a>,
}

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct PredictParameters<'a> {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
    #[serde(rename = "outputMimeType")]
    output_mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the Generative Language API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    /// Create a client using the default host and models
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        self.text_model = text_model.into();
        self.image_model = image_model.into();
        self
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Provider request failed");
            Err(ProviderError::from_status(status, &body))
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        Self::check_response(response).await
    }
}

/// Concatenate the text parts of the first candidate
fn first_candidate_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::Empty("candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        warn!(finish_reason = ?candidate.finish_reason, "Candidate carried no text");
        return Err(ProviderError::Empty("text"));
    }
    Ok(text)
}

/// Decode the first prediction's image payload
fn first_prediction_image(response: PredictResponse, requested_mime: &str) -> Result<GeneratedImage, ProviderError> {
    let prediction = response
        .predictions
        .into_iter()
        .next()
        .ok_or(ProviderError::Empty("images"))?;

    let encoded = prediction
        .bytes_base64_encoded
        .ok_or(ProviderError::Empty("image bytes"))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| ProviderError::InvalidResponse(format!("Image payload is not base64: {}", e)))?;

    Ok(GeneratedImage {
        bytes,
        mime_type: prediction
            .mime_type
            .unwrap_or_else(|| requested_mime.to_string()),
    })
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ProviderError> {
        let url = self.model_url(&self.text_model, "generateContent");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: request.response_mime_type.as_deref(),
            },
        };

        debug!(model = %self.text_model, temperature = request.temperature, "Sending text generation request");

        let response = self.post(&url, &body).await?;
        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        first_candidate_text(parsed)
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_image(&self, request: ImageRequest) -> Result<GeneratedImage, ProviderError> {
        let url = self.model_url(&self.image_model, "predict");
        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: &request.prompt,
            }],
            parameters: PredictParameters {
                sample_count: request.count,
                output_mime_type: &request.mime_type,
            },
        };

        debug!(model = %self.image_model, count = request.count, "Sending image generation request");

        let response = self.post(&url, &body).await?;
        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        first_prediction_image(parsed, &request.mime_type)
    }
}
