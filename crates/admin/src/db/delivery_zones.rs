//! Delivery zone repository for the dashboard.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::DeliveryZoneId;
use osteria_core::models::DeliveryZone;

use super::RepositoryError;

const COLUMNS: &str = "id, name, postal_code, delivery_fee, minimum_order, is_active";

/// Payload for creating or replacing a delivery zone.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryZoneInput {
    pub name: String,
    pub postal_code: String,
    pub delivery_fee: Decimal,
    pub minimum_order: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

/// Repository for dashboard delivery-zone management.
pub struct DeliveryZoneRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DeliveryZoneRepository<'a> {
    /// Create a new delivery zone repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All zones, active and inactive.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<DeliveryZone>, RepositoryError> {
        let zones = sqlx::query_as::<_, DeliveryZone>(&format!(
            "SELECT {COLUMNS} FROM osteria.delivery_zones ORDER BY postal_code"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(zones)
    }

    /// Create a zone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate postal code.
    pub async fn create(&self, input: &DeliveryZoneInput) -> Result<DeliveryZone, RepositoryError> {
        let zone = sqlx::query_as::<_, DeliveryZone>(&format!(
            r"
            INSERT INTO osteria.delivery_zones
                (name, postal_code, delivery_fee, minimum_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "
        ))
        .bind(&input.name)
        .bind(&input.postal_code)
        .bind(input.delivery_fee)
        .bind(input.minimum_order)
        .bind(input.is_active)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(zone)
    }

    /// Replace a zone's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID and
    /// `RepositoryError::Conflict` on a duplicate postal code.
    pub async fn update(
        &self,
        id: DeliveryZoneId,
        input: &DeliveryZoneInput,
    ) -> Result<DeliveryZone, RepositoryError> {
        let zone = sqlx::query_as::<_, DeliveryZone>(&format!(
            r"
            UPDATE osteria.delivery_zones
            SET name = $2, postal_code = $3, delivery_fee = $4,
                minimum_order = $5, is_active = $6
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.postal_code)
        .bind(input.delivery_fee)
        .bind(input.minimum_order)
        .bind(input.is_active)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        zone.ok_or(RepositoryError::NotFound)
    }

    /// Delete a zone.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: DeliveryZoneId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM osteria.delivery_zones WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
