//! Wine management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use osteria_core::{ApiResponse, WineId};
use osteria_core::models::Wine;

use crate::db::WineRepository;
use crate::db::wines::WineInput;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::routes::uploads::delete_stored_object;
use crate::state::AppState;

/// List all wines.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Wine>>>> {
    let wines = WineRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(wines)))
}

/// Create a wine.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<WineInput>,
) -> Result<(StatusCode, Json<ApiResponse<Wine>>)> {
    validate(&input)?;

    let wine = WineRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, wine = %wine.name, "Wine created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(wine))))
}

/// Replace a wine.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<WineId>,
    Json(input): Json<WineInput>,
) -> Result<Json<ApiResponse<Wine>>> {
    validate(&input)?;

    let wine = WineRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, wine = %wine.name, "Wine updated");

    Ok(Json(ApiResponse::ok(wine)))
}

/// Delete a wine, cleaning up its stored image best-effort.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<WineId>,
) -> Result<Json<ApiResponse<()>>> {
    let image_url = WineRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, wine_id = %id, "Wine deleted");

    if let Some(url) = image_url {
        delete_stored_object(&state, &url).await;
    }

    Ok(Json(ApiResponse::ok(())))
}

fn validate(input: &WineInput) -> Result<()> {
    if input.name.trim().is_empty() || input.winery.trim().is_empty() {
        return Err(AppError::BadRequest("name and winery are required".to_string()));
    }
    if input.price < rust_decimal::Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    Ok(())
}
