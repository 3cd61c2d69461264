//! Route definitions for the `/ai` proxy endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST   /text    -> generate_text
/// POST   /image   -> generate_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/text", post(ai::generate_text))
        .route("/image", post(ai::generate_image))
}
