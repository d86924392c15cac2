//! Banner repository for the dashboard.

use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::BannerId;
use osteria_core::models::Banner;

use super::RepositoryError;

const COLUMNS: &str =
    "id, title, subtitle, image_url, link_url, display_order, is_active, created_at";

/// Payload for creating or replacing a banner.
#[derive(Debug, Clone, Deserialize)]
pub struct BannerInput {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

/// Repository for dashboard banner management.
pub struct BannerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BannerRepository<'a> {
    /// Create a new banner repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All banners (active and inactive) in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Banner>, RepositoryError> {
        let banners = sqlx::query_as::<_, Banner>(&format!(
            "SELECT {COLUMNS} FROM osteria.banners ORDER BY display_order, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(banners)
    }

    /// Create a banner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &BannerInput) -> Result<Banner, RepositoryError> {
        let banner = sqlx::query_as::<_, Banner>(&format!(
            r"
            INSERT INTO osteria.banners
                (title, subtitle, image_url, link_url, display_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "
        ))
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.image_url)
        .bind(&input.link_url)
        .bind(input.display_order)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await?;

        Ok(banner)
    }

    /// Replace a banner's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn update(
        &self,
        id: BannerId,
        input: &BannerInput,
    ) -> Result<Banner, RepositoryError> {
        let banner = sqlx::query_as::<_, Banner>(&format!(
            r"
            UPDATE osteria.banners
            SET title = $2, subtitle = $3, image_url = $4, link_url = $5,
                display_order = $6, is_active = $7
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.subtitle)
        .bind(&input.image_url)
        .bind(&input.link_url)
        .bind(input.display_order)
        .bind(input.is_active)
        .fetch_optional(self.pool)
        .await?;

        banner.ok_or(RepositoryError::NotFound)
    }

    /// Delete a banner, returning its image URL for storage cleanup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: BannerId) -> Result<String, RepositoryError> {
        let image_url: Option<String> =
            sqlx::query_scalar("DELETE FROM osteria.banners WHERE id = $1 RETURNING image_url")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        image_url.ok_or(RepositoryError::NotFound)
    }
}
