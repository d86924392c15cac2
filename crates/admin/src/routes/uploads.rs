//! Image upload handler: multipart in, public URL out.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;

use osteria_core::ApiResponse;

use crate::error::{AppError, Result};
use crate::middleware::RequireWriteAccess;
use crate::services::storage;
use crate::state::AppState;

/// Upload response payload.
#[derive(Debug, Serialize)]
pub struct UploadPayload {
    /// Public URL of the stored object, ready to put into an `image_url`
    /// field.
    pub url: String,
}

/// Accept a multipart image upload and proxy it to object storage.
///
/// `kind` picks the storage folder (products, wines, banners, events).
/// The body must contain a `file` field with an `image/*` content type.
pub async fn upload(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UploadPayload>>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .ok_or_else(|| AppError::BadRequest("file content type is required".to_string()))?
            .to_string();

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(format!(
                "only image uploads are accepted, got {content_type}"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;

        if bytes.is_empty() {
            return Err(AppError::BadRequest("uploaded file is empty".to_string()));
        }

        let object_path = storage::object_path(&kind, &file_name)?;
        let url = state
            .storage()
            .upload(&object_path, bytes.to_vec(), &content_type)
            .await?;

        tracing::info!(admin = %admin.email, kind = %kind, path = %object_path, "Image uploaded");

        return Ok((
            StatusCode::CREATED,
            Json(ApiResponse::ok(UploadPayload { url })),
        ));
    }

    Err(AppError::BadRequest(
        "multipart body must contain a 'file' field".to_string(),
    ))
}

/// Best-effort removal of a stored object referenced by a public URL.
///
/// URLs pointing outside our bucket (externally hosted images) are left
/// alone; storage failures are logged and swallowed.
pub async fn delete_stored_object(state: &AppState, url: &str) {
    let Some(object_path) = state.storage().object_path_from_url(url) else {
        return;
    };

    if let Err(e) = state.storage().delete(&object_path).await {
        tracing::warn!(url = %url, error = %e, "Failed to delete stored object");
    }
}
