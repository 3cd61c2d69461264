//! Provider traits used by the AI proxy handlers.
//!
//! Handlers hold these as trait objects so tests can substitute stubs for
//! the HTTP client.

use academy_core::ai::{ChatPrompt, ImageSize, ImageStyle};
use async_trait::async_trait;

use crate::error::AiError;

/// Parameters for one chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParams {
    pub prompt: ChatPrompt,
    pub max_tokens: u32,
}

/// Parameters for one image generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    /// Prompt as sent to the provider (already framed).
    pub prompt: String,
    pub size: ImageSize,
    pub style: ImageStyle,
}

/// Result of an image generation. `url` is `None` when the provider
/// answered without a usable image reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageOutput {
    pub url: Option<String>,
}

/// Produces text from a chat prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Text of the first completion, or an empty string if there is none.
    async fn generate_text(&self, params: TextParams) -> Result<String, AiError>;
}

/// Produces exactly one image per call.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, params: ImageParams) -> Result<ImageOutput, AiError>;
}
