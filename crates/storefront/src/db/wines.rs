//! Wine list repository.

use sqlx::PgPool;

use osteria_core::models::{Wine, WineType};

use super::RepositoryError;

/// Read-only repository for the public wine list.
pub struct WineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WineRepository<'a> {
    /// Create a new wine repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Available wines, optionally filtered by type, grouped for the list
    /// page (type, then winery, then name).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available(
        &self,
        wine_type: Option<WineType>,
    ) -> Result<Vec<Wine>, RepositoryError> {
        let wines = match wine_type {
            Some(wine_type) => {
                sqlx::query_as::<_, Wine>(
                    r"
                    SELECT id, name, winery, wine_type, region, year,
                           price, glass_price, description, image_url,
                           is_available, created_at
                    FROM osteria.wines
                    WHERE is_available AND wine_type = $1
                    ORDER BY winery, name
                    ",
                )
                .bind(wine_type)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Wine>(
                    r"
                    SELECT id, name, winery, wine_type, region, year,
                           price, glass_price, description, image_url,
                           is_available, created_at
                    FROM osteria.wines
                    WHERE is_available
                    ORDER BY wine_type, winery, name
                    ",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(wines)
    }
}
