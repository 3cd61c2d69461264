use academy_core::error::CoreError;

/// Errors raised by the dashboard clients.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backend answered but did not accept the request.
    #[error("Request rejected: {0}")]
    Rejected(String),
}
