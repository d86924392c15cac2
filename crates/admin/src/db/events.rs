//! Event and event photo repository for the dashboard.

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::models::{Event, EventPhoto};
use osteria_core::{EventId, EventPhotoId};

use super::RepositoryError;

const EVENT_COLUMNS: &str = "id, title, description, event_date, is_published, created_at";
const PHOTO_COLUMNS: &str = "id, event_id, image_url, caption, display_order";

/// Payload for creating or replacing an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub is_published: bool,
}

/// Payload for attaching a photo to an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPhotoInput {
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Repository for dashboard event management.
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    /// Create a new event repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All events, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM osteria.events ORDER BY event_date DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// One event with its photos.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_with_photos(
        &self,
        id: EventId,
    ) -> Result<Option<(Event, Vec<EventPhoto>)>, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM osteria.events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(event) = event else {
            return Ok(None);
        };

        let photos = sqlx::query_as::<_, EventPhoto>(&format!(
            "SELECT {PHOTO_COLUMNS} FROM osteria.event_photos \
             WHERE event_id = $1 ORDER BY display_order, id"
        ))
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some((event, photos)))
    }

    /// Create an event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &EventInput) -> Result<Event, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r"
            INSERT INTO osteria.events (title, description, event_date, is_published)
            VALUES ($1, $2, $3, $4)
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(input.is_published)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Replace an event's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn update(&self, id: EventId, input: &EventInput) -> Result<Event, RepositoryError> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r"
            UPDATE osteria.events
            SET title = $2, description = $3, event_date = $4, is_published = $5
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(input.is_published)
        .fetch_optional(self.pool)
        .await?;

        event.ok_or(RepositoryError::NotFound)
    }

    /// Delete an event. Photos go with it via `ON DELETE CASCADE`; their
    /// image URLs are returned for storage cleanup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: EventId) -> Result<Vec<String>, RepositoryError> {
        let photo_urls: Vec<String> =
            sqlx::query_scalar("SELECT image_url FROM osteria.event_photos WHERE event_id = $1")
                .bind(id)
                .fetch_all(self.pool)
                .await?;

        let result = sqlx::query("DELETE FROM osteria.events WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(photo_urls)
    }

    /// Attach a photo to an event.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when the event does not exist.
    pub async fn add_photo(
        &self,
        event_id: EventId,
        input: &EventPhotoInput,
    ) -> Result<EventPhoto, RepositoryError> {
        let photo = sqlx::query_as::<_, EventPhoto>(&format!(
            r"
            INSERT INTO osteria.event_photos (event_id, image_url, caption, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {PHOTO_COLUMNS}
            "
        ))
        .bind(event_id)
        .bind(&input.image_url)
        .bind(&input.caption)
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db_err) = &err {
                if db_err.is_foreign_key_violation() {
                    return RepositoryError::NotFound;
                }
            }
            RepositoryError::Database(err)
        })?;

        Ok(photo)
    }

    /// Remove one photo, returning its image URL for storage cleanup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when the photo does not belong
    /// to the event or does not exist.
    pub async fn delete_photo(
        &self,
        event_id: EventId,
        photo_id: EventPhotoId,
    ) -> Result<String, RepositoryError> {
        let image_url: Option<String> = sqlx::query_scalar(
            "DELETE FROM osteria.event_photos WHERE id = $1 AND event_id = $2 \
             RETURNING image_url",
        )
        .bind(photo_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?;

        image_url.ok_or(RepositoryError::NotFound)
    }
}
