//! Liveness and readiness report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether a provider API key is configured. The AI endpoints answer
    /// with 500 on every call while this is `false`.
    pub ai_configured: bool,
}

/// GET /health
///
/// Answers 200 when the database is reachable and 503 when it is not, so a
/// load balancer can take the instance out of rotation.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let db_healthy = match academy_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };
    let ai_configured = state.config.ai.api_key.is_some();

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        ai_configured,
    };
    (code, Json(report))
}

/// `/health`, mounted at the root next to `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
