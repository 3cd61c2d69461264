use std::sync::Arc;

use academy_ai::{ImageGenerator, TextGenerator};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: academy_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat completion provider.
    pub text_generator: Arc<dyn TextGenerator>,
    /// Image generation provider.
    pub image_generator: Arc<dyn ImageGenerator>,
}
