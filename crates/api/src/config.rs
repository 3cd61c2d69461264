use std::time::Duration;

use academy_ai::AiConfig;

/// Errors raised while loading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    /// A downstream timeout would outlive the request it belongs to, so the
    /// request timeout would fire first and hide the downstream error.
    #[error("{var} ({value}s) must be shorter than REQUEST_TIMEOUT_SECS ({request}s)")]
    TimeoutOrder {
        var: &'static str,
        value: u64,
        request: u64,
    },

    #[error(transparent)]
    Ai(#[from] academy_ai::config::ConfigError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Wait for a pooled database connection in seconds (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// Generative-AI provider settings.
    pub ai: AiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                        |
    ///
    /// Provider settings are read by [`AiConfig::from_env`]. Both the
    /// database acquire timeout and `AI_TIMEOUT_SECS` must be shorter than
    /// the request timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = parse_var(&lookup, "PORT", "3000", "u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.parse::<axum::http::HeaderValue>().is_err())
        {
            return Err(ConfigError::InvalidOrigin(bad.clone()));
        }

        let request_timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "u64")?;
        let db_acquire_timeout_secs: u64 =
            parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", "5", "u64")?;

        let ai = AiConfig::from_lookup(&lookup)?;

        let config = Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_acquire_timeout_secs,
            ai,
        };
        config.check_timeouts()?;
        Ok(config)
    }

    /// Reject downstream timeouts that are not strictly shorter than the
    /// request timeout.
    pub fn check_timeouts(&self) -> Result<(), ConfigError> {
        let request = self.request_timeout_secs;
        let ai_timeout = self.ai.timeout;
        if ai_timeout >= self.request_timeout() {
            return Err(ConfigError::TimeoutOrder {
                var: "AI_TIMEOUT_SECS",
                value: ai_timeout.as_secs(),
                request,
            });
        }
        if self.db_acquire_timeout_secs >= request {
            return Err(ConfigError::TimeoutOrder {
                var: "DB_ACQUIRE_TIMEOUT_SECS",
                value: self.db_acquire_timeout_secs,
                request,
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    raw.parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw,
    })
}
