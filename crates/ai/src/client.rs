//! HTTP client for an OpenAI-compatible provider.
//!
//! Wraps the chat completion and image generation endpoints using
//! [`reqwest`]. One provider call per method call; no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::error::AiError;
use crate::provider::{ImageGenerator, ImageOutput, ImageParams, TextGenerator, TextParams};

/// Provider client holding a pooled [`reqwest::Client`] and its config.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    config: AiConfig,
}

// ---- wire types ----

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'static str,
    style: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    #[serde(default)]
    url: Option<String>,
}

impl OpenAiClient {
    /// Create a client; the configured timeout bounds every provider call.
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: AiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    // ---- private helpers ----

    fn api_key(&self) -> Result<&str, AiError> {
        self.config.api_key.as_deref().ok_or(AiError::MissingApiKey)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AiError>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.config.base_url, path))
            .bearer_auth(self.api_key()?)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate_text(&self, params: TextParams) -> Result<String, AiError> {
        let request = ChatCompletionRequest {
            model: &self.config.text_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &params.prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &params.prompt.user,
                },
            ],
            max_tokens: params.max_tokens,
        };

        let response: ChatCompletionResponse = self.post_json("chat/completions", &request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        tracing::debug!(
            model = %self.config.text_model,
            max_tokens = params.max_tokens,
            chars = text.len(),
            "Chat completion received",
        );
        Ok(text)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate_image(&self, params: ImageParams) -> Result<ImageOutput, AiError> {
        let request = ImageGenerationRequest {
            model: &self.config.image_model,
            prompt: &params.prompt,
            n: 1,
            size: params.size.as_str(),
            style: params.style.as_str(),
        };

        let response: ImageGenerationResponse =
            self.post_json("images/generations", &request).await?;

        let output = response
            .data
            .into_iter()
            .next()
            .map(|d| ImageOutput {
                url: d.url.filter(|u| !u.is_empty()),
            })
            .unwrap_or_default();

        tracing::debug!(
            model = %self.config.image_model,
            size = params.size.as_str(),
            has_url = output.url.is_some(),
            "Image generation received",
        );
        Ok(output)
    }
}
