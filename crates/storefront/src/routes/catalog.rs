//! Catalog route handlers: categories and products.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osteria_core::ApiResponse;
use osteria_core::models::{Category, Product};

use crate::cache::{CacheKey, CacheValue};
use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product as served to the storefront, with the effective price applied.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    #[serde(flatten)]
    pub product: Product,
    /// Price after discount; equals `price` when no discount is active.
    pub final_price: Decimal,
}

impl From<Product> for ProductPayload {
    fn from(product: Product) -> Self {
        let final_price = product.current_price();
        Self {
            product,
            final_price,
        }
    }
}

/// List all menu categories.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>> {
    let key = CacheKey::Categories;
    if let Some(CacheValue::Categories(categories)) = state.cache().get(&key).await {
        return Ok(Json(ApiResponse::ok(categories)));
    }

    let categories = CatalogRepository::new(state.pool()).list_categories().await?;
    state
        .cache()
        .insert(key, CacheValue::Categories(categories.clone()))
        .await;

    Ok(Json(ApiResponse::ok(categories)))
}

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Category slug filter.
    pub category: Option<String>,
}

/// List available products, optionally filtered by category slug.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ApiResponse<Vec<ProductPayload>>>> {
    let key = CacheKey::Products {
        category_slug: query.category.clone(),
    };

    let products = if let Some(CacheValue::Products(products)) = state.cache().get(&key).await {
        products
    } else {
        let products = CatalogRepository::new(state.pool())
            .list_available_products(query.category.as_deref())
            .await?;
        state
            .cache()
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        products
    };

    let payload = products.into_iter().map(ProductPayload::from).collect();
    Ok(Json(ApiResponse::ok(payload)))
}

/// Show a single available product by slug.
pub async fn show_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ProductPayload>>> {
    let product = CatalogRepository::new(state.pool())
        .get_available_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product '{slug}'")))?;

    Ok(Json(ApiResponse::ok(product.into())))
}
