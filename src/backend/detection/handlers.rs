/**
 * Detection Handler
 *
 * `POST /api/detect` accepts a multipart body with an `image` field,
 * validates it as an image upload and hands it to the configured
 * `DefectDetector`. The route sits behind the API guard.
 */

use axum::{
    extract::{Multipart, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::detection::{DetectionResult, ImageUpload};
use crate::shared::session::SessionUser;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

/// Detect handler
///
/// # Errors
///
/// * `400 Bad Request` - no `image` field, not an image, or an empty file
/// * `401 Unauthorized` - no valid session (from the guard)
/// * `413 Payload Too Large` - body above the configured upload limit
pub async fn detect(
    State(state): State<AppState>,
    user: SessionUser,
    mut multipart: Multipart,
) -> Result<Json<DetectionResult>, BackendError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Malformed multipart body: {}", e);
        BackendError::handler(e.status(), e.body_text())
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            tracing::warn!("Failed to read image field: {}", e);
            BackendError::handler(e.status(), e.body_text())
        })?;

        upload = Some(ImageUpload::new(file_name, content_type, bytes.to_vec())?);
        break;
    }

    let upload = upload.ok_or_else(|| BackendError::bad_request("Please select an image file first."))?;

    tracing::info!(
        user_id = %user.id,
        file = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        bytes = upload.bytes.len(),
        "Detection requested by {}",
        user.username
    );

    let result = state.detector.detect(&upload).await?;
    Ok(Json(result))
}
