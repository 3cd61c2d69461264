//! Generative-AI provider client.
//!
//! [`provider`] defines the traits the API handlers depend on;
//! [`client::OpenAiClient`] implements them against an OpenAI-compatible
//! HTTP API using [`reqwest`].

pub mod client;
pub mod config;
pub mod error;
pub mod provider;

pub use client::OpenAiClient;
pub use config::AiConfig;
pub use error::AiError;
pub use provider::{ImageGenerator, ImageOutput, ImageParams, TextGenerator, TextParams};
