//! Repository for the `certificate_templates` table.

use academy_core::certificate::CreateCertificateTemplate;
use academy_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::certificate_template::CertificateTemplateRow;

/// Column list for `certificate_templates` queries.
const COLUMNS: &str = "id, name, template, created_at, updated_at";

/// Default page size for listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for listing.
const MAX_LIMIT: i64 = 100;

/// Provides data access for saved certificate templates.
pub struct CertificateTemplateRepo;

impl CertificateTemplateRepo {
    /// Store a new template.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertificateTemplate,
    ) -> Result<CertificateTemplateRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO certificate_templates (name, template) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CertificateTemplateRow>(&query)
            .bind(&input.name)
            .bind(Json(&input.template))
            .fetch_one(pool)
            .await
    }

    /// Find a template by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CertificateTemplateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certificate_templates WHERE id = $1");
        sqlx::query_as::<_, CertificateTemplateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List templates, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<CertificateTemplateRow>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM certificate_templates \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, CertificateTemplateRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
