//! Handlers for the `/ai` proxy endpoints.
//!
//! Both endpoints validate the body, make exactly one provider call and
//! never retry. Provider and persistence failures are logged in full and
//! reported to the caller with a fixed message.
//!
//! Image generation and media persistence are not transactional: when the
//! insert fails after the provider produced an image, the provider-hosted
//! image is left unreferenced. The URL is logged so it can be traced.

use academy_ai::{ImageParams, TextParams};
use academy_core::ai::{
    build_text_prompt, framed_image_prompt, ImageGenerationRequest, TextGenerationRequest,
};
use academy_core::media::{GenerationMetadata, NewMediaRecord};
use academy_db::models::media::Media;
use academy_db::repositories::MediaRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult, IMAGE_GENERATION_FAILED, TEXT_GENERATION_FAILED};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload of a successful text generation.
#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub text: String,
}

/// Payload of a successful image generation.
#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    pub url: String,
    pub media: Media,
}

/// POST /api/ai/text
///
/// Generate new educational text, or improve `existingText`. Returns 400
/// when neither `prompt` nor `existingText` is given.
pub async fn generate_text(
    State(state): State<AppState>,
    AppJson(body): AppJson<TextGenerationRequest>,
) -> AppResult<Json<DataResponse<GeneratedText>>> {
    let prompt = build_text_prompt(&body)?;
    let params = TextParams {
        prompt,
        max_tokens: body.max_tokens(),
    };

    let text = state
        .text_generator
        .generate_text(params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Text generation failed");
            AppError::Generation(TEXT_GENERATION_FAILED)
        })?;

    tracing::info!(
        improve = body.existing_text.is_some(),
        chars = text.len(),
        "Text generated",
    );

    Ok(Json(DataResponse {
        data: GeneratedText { text },
    }))
}

/// POST /api/ai/image
///
/// Generate one illustration and store it as an `ai_generated` media
/// record. Returns 400 when `prompt` is missing or empty.
pub async fn generate_image(
    State(state): State<AppState>,
    AppJson(body): AppJson<ImageGenerationRequest>,
) -> AppResult<Json<DataResponse<GeneratedImage>>> {
    let prompt = body.required_prompt()?.to_string();
    let size = body.size();
    let style = body.style();

    let output = state
        .image_generator
        .generate_image(ImageParams {
            prompt: framed_image_prompt(&prompt),
            size,
            style,
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Image generation failed");
            AppError::Generation(IMAGE_GENERATION_FAILED)
        })?;

    let Some(url) = output.url else {
        tracing::error!("Image provider returned no image URL");
        return Err(AppError::Generation(IMAGE_GENERATION_FAILED));
    };

    let record = NewMediaRecord::ai_image(
        url.clone(),
        &GenerationMetadata {
            prompt,
            size,
            style,
        },
    );

    let media = MediaRepo::create(&state.pool, &record).await.map_err(|e| {
        tracing::error!(
            error = %e,
            url = %url,
            "Failed to persist generated image; provider image left unreferenced",
        );
        AppError::Generation(IMAGE_GENERATION_FAILED)
    })?;

    tracing::info!(media_id = media.id, size = size.as_str(), "Image generated");

    Ok(Json(DataResponse {
        data: GeneratedImage { url, media },
    }))
}
