//! Provider configuration.

use std::time::Duration;

/// Errors raised while reading provider configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Default provider timeout. Kept below the server's request timeout so a
/// hung provider surfaces as a provider error rather than a cut connection.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Settings for the generative-AI provider, injected into [`OpenAiClient`].
///
/// [`OpenAiClient`]: crate::client::OpenAiClient
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Bearer token. Calls fail with [`AiError::MissingApiKey`] when unset.
    ///
    /// [`AiError::MissingApiKey`]: crate::error::AiError::MissingApiKey
    pub api_key: Option<String>,
    /// API root, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Chat completion model.
    pub text_model: String,
    /// Image generation model.
    pub image_model: String,
    /// Per-request timeout for provider calls.
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            text_model: "gpt-4o-mini".to_string(),
            image_model: "dall-e-3".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AiConfig {
    /// Load provider configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | unset                       |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `AI_TEXT_MODEL`   | `gpt-4o-mini`               |
    /// | `AI_IMAGE_MODEL`  | `dall-e-3`                  |
    /// | `AI_TIMEOUT_SECS` | `20`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());
        let base_url = lookup("OPENAI_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let text_model = lookup("AI_TEXT_MODEL").unwrap_or(defaults.text_model);
        let image_model = lookup("AI_IMAGE_MODEL").unwrap_or(defaults.image_model);

        let timeout = match lookup("AI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "AI_TIMEOUT_SECS",
                    expected: "u64",
                    value: raw.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            api_key,
            base_url,
            text_model,
            image_model,
            timeout,
        })
    }
}
