//! Product management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use osteria_core::{ApiResponse, ProductId};
use osteria_core::models::Product;

use crate::db::ProductRepository;
use crate::db::products::ProductInput;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::routes::uploads::delete_stored_object;
use crate::state::AppState;

/// List all products, including unavailable ones.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Show one product.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<Product>>> {
    let product = ProductRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ApiResponse::ok(product)))
}

/// Create a product.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>)> {
    validate(&input)?;

    let product = ProductRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, product = %product.slug, "Product created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(product))))
}

/// Replace a product.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ApiResponse<Product>>> {
    validate(&input)?;

    let product = ProductRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, product = %product.slug, "Product updated");

    Ok(Json(ApiResponse::ok(product)))
}

/// Delete a product (and its order items), cleaning up its stored image
/// best-effort.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ApiResponse<()>>> {
    let image_url = ProductRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, product_id = %id, "Product deleted");

    if let Some(url) = image_url {
        delete_stored_object(&state, &url).await;
    }

    Ok(Json(ApiResponse::ok(())))
}

fn validate(input: &ProductInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if input.slug.trim().is_empty() {
        return Err(AppError::BadRequest("slug is required".to_string()));
    }
    if input.price < rust_decimal::Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    Ok(())
}
