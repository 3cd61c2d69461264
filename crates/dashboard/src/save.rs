//! Certificate template save client.
//!
//! One save is one `POST /api/certificates`. On success the designer moves
//! to the stored template's page; on any failure the user gets a blocking
//! alert and stays where they are. There is no retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use academy_core::certificate::{CertificateTemplate, CreateCertificateTemplate};
use async_trait::async_trait;
use serde::Deserialize;

use crate::error::DashboardError;

/// Message shown to the user when a save fails.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save certificate template";

/// Page of a stored certificate template.
pub fn certificate_route(id: &str) -> String {
    format!("/certificates/{id}")
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Body returned by `POST /api/certificates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<SavedTemplate>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedTemplate {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl SaveResponse {
    /// The stored template's id, if the backend accepted the save.
    ///
    /// Ids are accepted as JSON strings or numbers.
    pub fn into_id(self) -> Result<String, DashboardError> {
        if !self.success {
            return Err(DashboardError::Rejected(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        match self.data.and_then(|d| d.id) {
            Some(serde_json::Value::String(id)) if !id.is_empty() => Ok(id),
            Some(serde_json::Value::Number(id)) => Ok(id.to_string()),
            _ => Err(DashboardError::Rejected(
                "response carried no template id".to_string(),
            )),
        }
    }
}

/// Backend endpoint that stores templates.
#[async_trait]
pub trait TemplateApi: Send + Sync {
    async fn create_template(
        &self,
        body: &CreateCertificateTemplate,
    ) -> Result<SaveResponse, DashboardError>;
}

/// Client-side router.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Blocking user notification.
pub trait Alerter: Send + Sync {
    fn alert(&self, message: &str);
}

/// [`TemplateApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTemplateApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTemplateApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl TemplateApi for HttpTemplateApi {
    async fn create_template(
        &self,
        body: &CreateCertificateTemplate,
    ) -> Result<SaveResponse, DashboardError> {
        // Error statuses still carry the JSON envelope, so the body is
        // decoded regardless of status.
        let response = self
            .client
            .post(format!("{}/api/certificates", self.base_url))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let parsed: SaveResponse = serde_json::from_slice(&bytes)?;

        tracing::debug!(status = status.as_u16(), success = parsed.success, "Save response received");
        Ok(parsed)
    }
}

// ---------------------------------------------------------------------------
// Saver
// ---------------------------------------------------------------------------

/// Result of one save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(String),
    Failed,
}

/// Clears the saving flag when dropped.
struct SavingGuard<'a>(&'a AtomicBool);

impl<'a> SavingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Saves designer templates and drives the follow-up UI.
pub struct CertificateSaver {
    api: Arc<dyn TemplateApi>,
    navigator: Arc<dyn Navigator>,
    alerter: Arc<dyn Alerter>,
    saving: AtomicBool,
}

impl CertificateSaver {
    pub fn new(
        api: Arc<dyn TemplateApi>,
        navigator: Arc<dyn Navigator>,
        alerter: Arc<dyn Alerter>,
    ) -> Self {
        Self {
            api,
            navigator,
            alerter,
            saving: AtomicBool::new(false),
        }
    }

    /// Whether a save is in flight. Drives the disabled state of the save
    /// button.
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Send `template` to the backend once.
    ///
    /// Navigates to the stored template on success; logs and alerts on any
    /// failure. The saving flag is cleared on every path.
    pub async fn save(&self, template: &CertificateTemplate) -> SaveOutcome {
        let _guard = SavingGuard::acquire(&self.saving);

        let body = CreateCertificateTemplate::from_template(template);
        match self.submit(&body).await {
            Ok(id) => {
                tracing::info!(template_id = %id, name = %template.name, "Certificate template saved");
                self.navigator.navigate(&certificate_route(&id));
                SaveOutcome::Saved(id)
            }
            Err(e) => {
                tracing::error!(error = %e, name = %template.name, "Error saving template");
                self.alerter.alert(SAVE_FAILED_MESSAGE);
                SaveOutcome::Failed
            }
        }
    }

    async fn submit(&self, body: &CreateCertificateTemplate) -> Result<String, DashboardError> {
        self.api.create_template(body).await?.into_id()
    }
}
