//! Wine list route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use osteria_core::ApiResponse;
use osteria_core::models::{Wine, WineType};

use crate::cache::{CacheKey, CacheValue};
use crate::db::WineRepository;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the wine list.
#[derive(Debug, Deserialize)]
pub struct WinesQuery {
    /// Wine type filter: red, white, rose, sparkling.
    #[serde(rename = "type")]
    pub wine_type: Option<String>,
}

/// List available wines, optionally filtered by type.
pub async fn list_wines(
    State(state): State<AppState>,
    Query(query): Query<WinesQuery>,
) -> Result<Json<ApiResponse<Vec<Wine>>>> {
    let wine_type = query
        .wine_type
        .as_deref()
        .map(str::parse::<WineType>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let key = CacheKey::Wines { wine_type };
    if let Some(CacheValue::Wines(wines)) = state.cache().get(&key).await {
        return Ok(Json(ApiResponse::ok(wines)));
    }

    let wines = WineRepository::new(state.pool())
        .list_available(wine_type)
        .await?;
    state
        .cache()
        .insert(key, CacheValue::Wines(wines.clone()))
        .await;

    Ok(Json(ApiResponse::ok(wines)))
}
