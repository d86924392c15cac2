//! Category management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use osteria_core::{ApiResponse, CategoryId};
use osteria_core::models::Category;

use crate::db::CategoryRepository;
use crate::db::categories::CategoryInput;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::state::AppState;

/// List all categories.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let categories = CategoryRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// Create a category.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>)> {
    if input.name.trim().is_empty() || input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("name and slug are required".to_string()));
    }

    let category = CategoryRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, category = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// Replace a category.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
    Json(input): Json<CategoryInput>,
) -> Result<Json<ApiResponse<Category>>> {
    if input.name.trim().is_empty() || input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("name and slug are required".to_string()));
    }

    let category = CategoryRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, category = %category.slug, "Category updated");

    Ok(Json(ApiResponse::ok(category)))
}

/// Delete a category. Conflicts while it still has products.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<ApiResponse<()>>> {
    CategoryRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, category_id = %id, "Category deleted");

    Ok(Json(ApiResponse::ok(())))
}
