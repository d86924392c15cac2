//! Content route handlers: banners, event gallery, delivery zones.

use axum::{Json, extract::State};

use osteria_core::ApiResponse;
use osteria_core::models::{Banner, DeliveryZone};

use crate::cache::{CacheKey, CacheValue};
use crate::db::ContentRepository;
use crate::db::content::EventWithPhotos;
use crate::error::Result;
use crate::state::AppState;

/// List active banners in display order.
pub async fn list_banners(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Banner>>>> {
    let key = CacheKey::Banners;
    if let Some(CacheValue::Banners(banners)) = state.cache().get(&key).await {
        return Ok(Json(ApiResponse::ok(banners)));
    }

    let banners = ContentRepository::new(state.pool())
        .list_active_banners()
        .await?;
    state
        .cache()
        .insert(key, CacheValue::Banners(banners.clone()))
        .await;

    Ok(Json(ApiResponse::ok(banners)))
}

/// List published events with their photo galleries.
pub async fn event_gallery(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EventWithPhotos>>>> {
    let key = CacheKey::EventGallery;
    if let Some(CacheValue::EventGallery(events)) = state.cache().get(&key).await {
        return Ok(Json(ApiResponse::ok(events)));
    }

    let events = ContentRepository::new(state.pool())
        .list_published_events()
        .await?;
    state
        .cache()
        .insert(key, CacheValue::EventGallery(events.clone()))
        .await;

    Ok(Json(ApiResponse::ok(events)))
}

/// List active delivery zones.
pub async fn list_delivery_zones(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DeliveryZone>>>> {
    let key = CacheKey::DeliveryZones;
    if let Some(CacheValue::DeliveryZones(zones)) = state.cache().get(&key).await {
        return Ok(Json(ApiResponse::ok(zones)));
    }

    let zones = ContentRepository::new(state.pool())
        .list_active_zones()
        .await?;
    state
        .cache()
        .insert(key, CacheValue::DeliveryZones(zones.clone()))
        .await;

    Ok(Json(ApiResponse::ok(zones)))
}
