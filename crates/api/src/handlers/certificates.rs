//! Handlers for the `/certificates` resource.
//!
//! Stores designer templates and serves them back, including as a
//! downloadable JSON file identical to the dashboard's local export.

use academy_core::certificate::{
    export_template as serialize_template, CertificateTemplate, CreateCertificateTemplate,
};
use academy_core::error::CoreError;
use academy_core::types::DbId;
use academy_db::repositories::CertificateTemplateRepo;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PaginationParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /api/certificates
///
/// Store a template. Returns the created row with HTTP 201.
pub async fn create_template(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCertificateTemplate>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let row = CertificateTemplateRepo::create(&state.pool, &input).await?;

    tracing::info!(template_id = row.id, name = %row.name, "Certificate template created");

    Ok((StatusCode::CREATED, Json(SuccessResponse::new(row))))
}

/// GET /api/certificates
///
/// List stored templates, newest first.
pub async fn list_templates(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let rows = CertificateTemplateRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(SuccessResponse::new(rows)))
}

/// GET /api/certificates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CertificateTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CertificateTemplate",
            id,
        }))?;
    Ok(Json(SuccessResponse::new(row)))
}

/// GET /api/certificates/{id}/export
///
/// Download the stored template as `{name}-template.json`.
pub async fn export_template(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CertificateTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CertificateTemplate",
            id,
        }))?;

    let template: CertificateTemplate = serde_json::from_value(row.template).map_err(|e| {
        AppError::InternalError(format!("Stored template {id} is not a valid template: {e}"))
    })?;
    let exported = serialize_template(&template)?;

    let disposition = HeaderValue::from_str(&content_disposition(&exported.file_name))
        .map_err(|e| AppError::InternalError(format!("Invalid Content-Disposition: {e}")))?;

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8")),
            (CONTENT_DISPOSITION, disposition),
        ],
        exported.contents,
    ))
}

/// Build an `attachment` disposition with an ASCII fallback name and an
/// RFC 5987 `filename*` carrying the exact UTF-8 name.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut encoded = String::with_capacity(file_name.len());
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
