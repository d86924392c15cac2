//! Content repository: banners, event gallery, delivery zones.

use sqlx::PgPool;

use osteria_core::models::{Banner, DeliveryZone, Event, EventPhoto};

use super::RepositoryError;

/// An event together with its gallery photos.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventWithPhotos {
    #[serde(flatten)]
    pub event: Event,
    pub photos: Vec<EventPhoto>,
}

/// Read-only repository for storefront content.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Active banners in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active_banners(&self) -> Result<Vec<Banner>, RepositoryError> {
        let banners = sqlx::query_as::<_, Banner>(
            r"
            SELECT id, title, subtitle, image_url, link_url,
                   display_order, is_active, created_at
            FROM osteria.banners
            WHERE is_active
            ORDER BY display_order, id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(banners)
    }

    /// Published events with their photos, newest event first.
    ///
    /// Two queries, stitched in memory; the gallery is small enough that
    /// this beats a join-and-regroup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_published_events(&self) -> Result<Vec<EventWithPhotos>, RepositoryError> {
        let events = sqlx::query_as::<_, Event>(
            r"
            SELECT id, title, description, event_date, is_published, created_at
            FROM osteria.events
            WHERE is_published
            ORDER BY event_date DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id.as_i32()).collect();
        let photos = sqlx::query_as::<_, EventPhoto>(
            r"
            SELECT id, event_id, image_url, caption, display_order
            FROM osteria.event_photos
            WHERE event_id = ANY($1)
            ORDER BY display_order, id
            ",
        )
        .bind(&event_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: Vec<EventWithPhotos> = events
            .into_iter()
            .map(|event| EventWithPhotos {
                event,
                photos: Vec::new(),
            })
            .collect();

        for photo in photos {
            if let Some(entry) = grouped.iter_mut().find(|g| g.event.id == photo.event_id) {
                entry.photos.push(photo);
            }
        }

        Ok(grouped)
    }

    /// Active delivery zones, ordered by postal code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active_zones(&self) -> Result<Vec<DeliveryZone>, RepositoryError> {
        let zones = sqlx::query_as::<_, DeliveryZone>(
            r"
            SELECT id, name, postal_code, delivery_fee, minimum_order, is_active
            FROM osteria.delivery_zones
            WHERE is_active
            ORDER BY postal_code
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(zones)
    }

    /// Look up the active zone covering a postal code.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_zone_by_postal_code(
        &self,
        postal_code: &str,
    ) -> Result<Option<DeliveryZone>, RepositoryError> {
        let zone = sqlx::query_as::<_, DeliveryZone>(
            r"
            SELECT id, name, postal_code, delivery_fee, minimum_order, is_active
            FROM osteria.delivery_zones
            WHERE postal_code = $1 AND is_active
            ",
        )
        .bind(postal_code)
        .fetch_optional(self.pool)
        .await?;

        Ok(zone)
    }
}
