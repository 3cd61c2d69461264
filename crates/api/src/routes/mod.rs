pub mod ai;
pub mod certificates;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ai/text                          generate or improve text (POST)
/// /ai/image                         generate image + media record (POST)
///
/// /certificates                     list, create (GET, POST)
/// /certificates/{id}                get (GET)
/// /certificates/{id}/export         download template JSON (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ai", ai::router())
        .nest("/certificates", certificates::router())
}
