//! Request types and prompt construction for the AI proxy endpoints.
//!
//! The provider is called with whatever these functions produce; keeping the
//! construction here lets it be tested without any HTTP.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Output-length bound used when the caller does not pass `maxTokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Framing prepended to every image prompt sent to the provider.
pub const IMAGE_PROMPT_PREFIX: &str = "Educational illustration:";

/// System instruction for fresh content.
pub const SYSTEM_CREATE: &str = "You are an expert educational content creator. \
Create clear, engaging, and accurate educational content.";

/// System instruction when rewriting existing text.
pub const SYSTEM_IMPROVE: &str = "You are an expert educational content editor. \
Improve educational content for clarity, accuracy and engagement while preserving its meaning.";

// ---------------------------------------------------------------------------
// Text generation
// ---------------------------------------------------------------------------

/// Body of `POST /api/ai/text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub existing_text: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl TextGenerationRequest {
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }
}

/// System and user messages for one chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build the chat prompt for a text request.
///
/// Existing text takes precedence (an "improve" rewrite), then a context
/// annotated prompt, then the bare prompt. Fails when neither `prompt` nor
/// `existingText` is given.
pub fn build_text_prompt(request: &TextGenerationRequest) -> Result<ChatPrompt, CoreError> {
    let prompt = present(&request.prompt);
    let existing = present(&request.existing_text);
    let context = present(&request.context);

    if let Some(existing) = existing {
        let annotation = context
            .map(|c| format!(" (context: {c})"))
            .unwrap_or_default();
        return Ok(ChatPrompt {
            system: SYSTEM_IMPROVE.to_string(),
            user: format!("Improve the following text{annotation}:\n\n{existing}"),
        });
    }

    let prompt = prompt.ok_or_else(|| {
        CoreError::Validation("Prompt or existing text is required".to_string())
    })?;

    let user = match context {
        Some(context) => format!("{context}\n\n{prompt}"),
        None => prompt.to_string(),
    };

    Ok(ChatPrompt {
        system: SYSTEM_CREATE.to_string(),
        user,
    })
}

// ---------------------------------------------------------------------------
// Image generation
// ---------------------------------------------------------------------------

/// Supported output sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1792x1024")]
    Landscape,
    #[serde(rename = "1024x1792")]
    Portrait,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1024x1024",
            Self::Landscape => "1792x1024",
            Self::Portrait => "1024x1792",
        }
    }
}

/// Rendering style requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    #[default]
    Natural,
}

impl ImageStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vivid => "vivid",
            Self::Natural => "natural",
        }
    }
}

/// Body of `POST /api/ai/image`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub size: Option<ImageSize>,
    #[serde(default)]
    pub style: Option<ImageStyle>,
}

impl ImageGenerationRequest {
    /// The caller's prompt, or a validation error if missing or empty.
    pub fn required_prompt(&self) -> Result<&str, CoreError> {
        present(&self.prompt).ok_or_else(|| CoreError::Validation("Prompt is required".to_string()))
    }

    pub fn size(&self) -> ImageSize {
        self.size.unwrap_or_default()
    }

    pub fn style(&self) -> ImageStyle {
        self.style.unwrap_or_default()
    }
}

/// Prompt actually sent to the image provider.
pub fn framed_image_prompt(prompt: &str) -> String {
    format!("{IMAGE_PROMPT_PREFIX} {prompt}")
}
