//! Generative provider module.
//!
//! This module provides the `TextGenerator` and `ImageGenerator` capability
//! traits, the `GeminiClient` that implements them over HTTP, and a
//! deterministic `MockProvider` for offline use and tests.

pub mod client;
pub mod error;
pub mod mock;
pub mod provider;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use provider::{
    GeneratedImage, ImageGenerator, ImageRequest, TextGenerator, TextRequest, JPEG_MIME_TYPE,
    JSON_MIME_TYPE,
};
