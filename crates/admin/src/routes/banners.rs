//! Banner management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use osteria_core::{ApiResponse, BannerId};
use osteria_core::models::Banner;

use crate::db::BannerRepository;
use crate::db::banners::BannerInput;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::routes::uploads::delete_stored_object;
use crate::state::AppState;

/// List all banners.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Banner>>>> {
    let banners = BannerRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(banners)))
}

/// Create a banner.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<BannerInput>,
) -> Result<(StatusCode, Json<ApiResponse<Banner>>)> {
    if input.title.trim().is_empty() || input.image_url.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and image_url are required".to_string(),
        ));
    }

    let banner = BannerRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, banner = %banner.title, "Banner created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(banner))))
}

/// Replace a banner.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
    Json(input): Json<BannerInput>,
) -> Result<Json<ApiResponse<Banner>>> {
    if input.title.trim().is_empty() || input.image_url.trim().is_empty() {
        return Err(AppError::BadRequest(
            "title and image_url are required".to_string(),
        ));
    }

    let banner = BannerRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, banner = %banner.title, "Banner updated");

    Ok(Json(ApiResponse::ok(banner)))
}

/// Delete a banner, cleaning up its stored image best-effort.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<BannerId>,
) -> Result<Json<ApiResponse<()>>> {
    let image_url = BannerRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, banner_id = %id, "Banner deleted");

    delete_stored_object(&state, &image_url).await;

    Ok(Json(ApiResponse::ok(())))
}
