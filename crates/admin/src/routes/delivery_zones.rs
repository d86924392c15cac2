//! Delivery zone management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use osteria_core::{ApiResponse, DeliveryZoneId};
use osteria_core::models::DeliveryZone;

use crate::db::DeliveryZoneRepository;
use crate::db::delivery_zones::DeliveryZoneInput;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::state::AppState;

/// List all delivery zones.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<DeliveryZone>>>> {
    let zones = DeliveryZoneRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(zones)))
}

/// Create a delivery zone.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<DeliveryZoneInput>,
) -> Result<(StatusCode, Json<ApiResponse<DeliveryZone>>)> {
    validate(&input)?;

    let zone = DeliveryZoneRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, zone = %zone.postal_code, "Delivery zone created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(zone))))
}

/// Replace a delivery zone.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<DeliveryZoneId>,
    Json(input): Json<DeliveryZoneInput>,
) -> Result<Json<ApiResponse<DeliveryZone>>> {
    validate(&input)?;

    let zone = DeliveryZoneRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, zone = %zone.postal_code, "Delivery zone updated");

    Ok(Json(ApiResponse::ok(zone)))
}

/// Delete a delivery zone.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<DeliveryZoneId>,
) -> Result<Json<ApiResponse<()>>> {
    DeliveryZoneRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, zone_id = %id, "Delivery zone deleted");

    Ok(Json(ApiResponse::ok(())))
}

fn validate(input: &DeliveryZoneInput) -> Result<()> {
    if input.name.trim().is_empty() || input.postal_code.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and postal_code are required".to_string(),
        ));
    }
    if input.delivery_fee < rust_decimal::Decimal::ZERO
        || input.minimum_order < rust_decimal::Decimal::ZERO
    {
        return Err(AppError::BadRequest(
            "fees must not be negative".to_string(),
        ));
    }
    Ok(())
}
