#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use academy_ai::{
    AiConfig, AiError, ImageGenerator, ImageOutput, ImageParams, TextGenerator, TextParams,
};
use academy_api::config::ServerConfig;
use academy_api::router::build_app_router;
use academy_api::state::AppState;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and the production timeouts.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_acquire_timeout_secs: 5,
        ai: AiConfig::default(),
    }
}

// ---------------------------------------------------------------------------
// Provider stubs
// ---------------------------------------------------------------------------

/// Text provider stub that records every call.
pub struct StubText {
    reply: Result<String, u16>,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<TextParams>>,
}

impl StubText {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    /// Stub that fails with a provider API error.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> TextParams {
        self.last.lock().unwrap().clone().expect("text provider was not called")
    }
}

#[async_trait]
impl TextGenerator for StubText {
    async fn generate_text(&self, params: TextParams) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(params);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(AiError::Api {
                status: *status,
                body: "upstream detail with sk-secret".to_string(),
            }),
        }
    }
}

/// Image provider stub that records every call.
pub struct StubImage {
    reply: Result<Option<String>, u16>,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<ImageParams>>,
}

impl StubImage {
    pub fn replying(url: &str) -> Arc<Self> {
        Self::with_reply(Ok(Some(url.to_string())))
    }

    /// Stub whose response carries no image URL.
    pub fn without_url() -> Arc<Self> {
        Self::with_reply(Ok(None))
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Self::with_reply(Err(status))
    }

    fn with_reply(reply: Result<Option<String>, u16>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> ImageParams {
        self.last.lock().unwrap().clone().expect("image provider was not called")
    }
}

#[async_trait]
impl ImageGenerator for StubImage {
    async fn generate_image(&self, params: ImageParams) -> Result<ImageOutput, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(params);
        match &self.reply {
            Ok(url) => Ok(ImageOutput { url: url.clone() }),
            Err(status) => Err(AiError::Api {
                status: *status,
                body: "content policy violation".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with the production middleware stack
/// and the given pool and provider stubs.
pub fn build_test_app_with(
    pool: PgPool,
    text: Arc<StubText>,
    image: Arc<StubImage>,
) -> Router {
    build_test_app_from(test_config(), pool, text, image)
}

/// Build the application router from an explicit config and providers.
pub fn build_test_app_from(
    config: ServerConfig,
    pool: PgPool,
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        text_generator: text,
        image_generator: image,
    };
    build_app_router(state, &config)
}

/// Build the application router with providers that are never expected to
/// be called successfully.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, StubText::failing(500), StubImage::failing(500))
}

/// Acquire timeout of [`lazy_pool`].
pub const LAZY_POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(1);

/// A pool pointing at a closed port. It never connects; tests that must be
/// rejected before the database use it, and any query fails within
/// [`LAZY_POOL_ACQUIRE_TIMEOUT`].
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(LAZY_POOL_ACQUIRE_TIMEOUT)
        .connect_lazy("postgres://academy@127.0.0.1:1/unreachable")
        .expect("lazy pool")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
