//! Repository for the `media` table.

use academy_core::media::NewMediaRecord;
use academy_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::Media;

/// Column list for `media` queries.
const COLUMNS: &str = "id, media_type, url, source, metadata, created_at, updated_at";

/// Provides data access for media records.
pub struct MediaRepo;

impl MediaRepo {
    /// Insert a media record, returning the stored row.
    pub async fn create(pool: &PgPool, input: &NewMediaRecord) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (media_type, url, source, metadata) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.media_type)
            .bind(&input.url)
            .bind(input.source)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// Find a media record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media records from one source, newest first.
    pub async fn list_by_source(pool: &PgPool, source: &str) -> Result<Vec<Media>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM media WHERE source = $1 ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Media>(&query)
            .bind(source)
            .fetch_all(pool)
            .await
    }
}
