//! Certificate template models.

use academy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `certificate_templates` table.
///
/// `template` holds the designer JSON exactly as submitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CertificateTemplateRow {
    pub id: DbId,
    pub name: String,
    pub template: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
