//! Event and gallery management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use osteria_core::models::{Event, EventPhoto};
use osteria_core::{ApiResponse, EventId, EventPhotoId};

use crate::db::EventRepository;
use crate::db::events::{EventInput, EventPhotoInput};
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::routes::uploads::delete_stored_object;
use crate::state::AppState;

/// Event detail payload with photos.
#[derive(Debug, Serialize)]
pub struct EventPayload {
    #[serde(flatten)]
    pub event: Event,
    pub photos: Vec<EventPhoto>,
}

/// List all events.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Event>>>> {
    let events = EventRepository::new(state.pool()).list().await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// Show one event with its photos.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<EventPayload>>> {
    let (event, photos) = EventRepository::new(state.pool())
        .get_with_photos(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("event {id}")))?;

    Ok(Json(ApiResponse::ok(EventPayload { event, photos })))
}

/// Create an event.
pub async fn create(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let event = EventRepository::new(state.pool()).create(&input).await?;
    tracing::info!(admin = %admin.email, event = %event.title, "Event created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// Replace an event.
pub async fn update(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(input): Json<EventInput>,
) -> Result<Json<ApiResponse<Event>>> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }

    let event = EventRepository::new(state.pool()).update(id, &input).await?;
    tracing::info!(admin = %admin.email, event = %event.title, "Event updated");

    Ok(Json(ApiResponse::ok(event)))
}

/// Delete an event and its photos; stored images are cleaned up
/// best-effort.
pub async fn delete(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<()>>> {
    let photo_urls = EventRepository::new(state.pool()).delete(id).await?;
    tracing::info!(admin = %admin.email, event_id = %id, "Event deleted");

    for url in &photo_urls {
        delete_stored_object(&state, url).await;
    }

    Ok(Json(ApiResponse::ok(())))
}

/// Attach a photo to an event.
pub async fn add_photo(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(input): Json<EventPhotoInput>,
) -> Result<(StatusCode, Json<ApiResponse<EventPhoto>>)> {
    if input.image_url.trim().is_empty() {
        return Err(AppError::BadRequest("image_url is required".to_string()));
    }

    let photo = EventRepository::new(state.pool()).add_photo(id, &input).await?;
    tracing::info!(admin = %admin.email, event_id = %id, "Event photo added");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(photo))))
}

/// Remove a photo from an event.
pub async fn delete_photo(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path((id, photo_id)): Path<(EventId, EventPhotoId)>,
) -> Result<Json<ApiResponse<()>>> {
    let image_url = EventRepository::new(state.pool())
        .delete_photo(id, photo_id)
        .await?;
    tracing::info!(admin = %admin.email, event_id = %id, photo_id = %photo_id, "Event photo deleted");

    delete_stored_object(&state, &image_url).await;

    Ok(Json(ApiResponse::ok(())))
}
