//! Wine repository for the dashboard (full CRUD).

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::WineId;
use osteria_core::models::{Wine, WineType};

use super::RepositoryError;

const COLUMNS: &str = "id, name, winery, wine_type, region, year, price, glass_price, \
                       description, image_url, is_available, created_at";

/// Payload for creating or replacing a wine.
#[derive(Debug, Clone, Deserialize)]
pub struct WineInput {
    pub name: String,
    pub winery: String,
    pub wine_type: WineType,
    pub region: String,
    pub year: Option<i32>,
    pub price: Decimal,
    pub glass_price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

const fn default_true() -> bool {
    true
}

/// Repository for dashboard wine management.
pub struct WineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WineRepository<'a> {
    /// Create a new wine repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All wines (including unavailable ones).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Wine>, RepositoryError> {
        let wines = sqlx::query_as::<_, Wine>(&format!(
            "SELECT {COLUMNS} FROM osteria.wines ORDER BY wine_type, winery, name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(wines)
    }

    /// Create a wine.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &WineInput) -> Result<Wine, RepositoryError> {
        let wine = sqlx::query_as::<_, Wine>(&format!(
            r"
            INSERT INTO osteria.wines
                (name, winery, wine_type, region, year, price, glass_price,
                 description, image_url, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "
        ))
        .bind(&input.name)
        .bind(&input.winery)
        .bind(input.wine_type)
        .bind(&input.region)
        .bind(input.year)
        .bind(input.price)
        .bind(input.glass_price)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.is_available)
        .fetch_one(self.pool)
        .await?;

        Ok(wine)
    }

    /// Replace a wine's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn update(&self, id: WineId, input: &WineInput) -> Result<Wine, RepositoryError> {
        let wine = sqlx::query_as::<_, Wine>(&format!(
            r"
            UPDATE osteria.wines
            SET name = $2, winery = $3, wine_type = $4, region = $5, year = $6,
                price = $7, glass_price = $8, description = $9, image_url = $10,
                is_available = $11
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.winery)
        .bind(input.wine_type)
        .bind(&input.region)
        .bind(input.year)
        .bind(input.price)
        .bind(input.glass_price)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.is_available)
        .fetch_optional(self.pool)
        .await?;

        wine.ok_or(RepositoryError::NotFound)
    }

    /// Delete a wine, returning its image URL (if any) for storage cleanup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: WineId) -> Result<Option<String>, RepositoryError> {
        let deleted: Option<Option<String>> =
            sqlx::query_scalar("DELETE FROM osteria.wines WHERE id = $1 RETURNING image_url")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        deleted.ok_or(RepositoryError::NotFound)
    }
}
