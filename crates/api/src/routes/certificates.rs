//! Route definitions for the `/certificates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::certificates;
use crate::state::AppState;

/// Routes mounted at `/certificates`.
///
/// ```text
/// GET    /               -> list_templates   (?limit, ?offset)
/// POST   /               -> create_template
/// GET    /{id}           -> get_template
/// GET    /{id}/export    -> export_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(certificates::list_templates).post(certificates::create_template),
        )
        .route("/{id}", get(certificates::get_template))
        .route("/{id}/export", get(certificates::export_template))
}
