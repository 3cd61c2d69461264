//! Media record constants and the generation metadata payload.

use serde::{Deserialize, Serialize};

use crate::ai::{ImageSize, ImageStyle};

/// `media.media_type` for images.
pub const MEDIA_TYPE_IMAGE: &str = "image";

/// `media.source` for assets produced by the image provider.
pub const SOURCE_AI_GENERATED: &str = "ai_generated";

/// Metadata stored alongside an AI-generated image.
///
/// `prompt` is the prompt as the caller sent it, without the framing prefix
/// added for the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub prompt: String,
    pub size: ImageSize,
    pub style: ImageStyle,
}

/// A media record ready to be inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMediaRecord {
    pub media_type: &'static str,
    pub url: String,
    pub source: &'static str,
    pub metadata: serde_json::Value,
}

impl NewMediaRecord {
    /// Record for an image returned by the generation provider.
    pub fn ai_image(url: impl Into<String>, metadata: &GenerationMetadata) -> Self {
        Self {
            media_type: MEDIA_TYPE_IMAGE,
            url: url.into(),
            source: SOURCE_AI_GENERATED,
            metadata: serde_json::json!({
                "prompt": metadata.prompt,
                "size": metadata.size,
                "style": metadata.style,
            }),
        }
    }
}
