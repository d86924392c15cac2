//! Product repository for the dashboard (full CRUD).

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::models::Product;
use osteria_core::{CategoryId, ProductId};

use super::RepositoryError;

const COLUMNS: &str = "id, category_id, name, slug, description, price, discount_percent, \
                       image_url, is_available, created_at, updated_at";

/// Payload for creating or replacing a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub discount_percent: Option<Decimal>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

const fn default_true() -> bool {
    true
}

/// Repository for dashboard product management.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products (including unavailable ones), newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM osteria.products ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// One product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM osteria.products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate slug.
    pub async fn create(&self, input: &ProductInput) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r"
            INSERT INTO osteria.products
                (category_id, name, slug, description, price, discount_percent,
                 image_url, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "
        ))
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.discount_percent)
        .bind(&input.image_url)
        .bind(input.is_available)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(product)
    }

    /// Replace a product's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID and
    /// `RepositoryError::Conflict` on a duplicate slug.
    pub async fn update(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r"
            UPDATE osteria.products
            SET category_id = $2, name = $3, slug = $4, description = $5,
                price = $6, discount_percent = $7, image_url = $8,
                is_available = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(input.category_id)
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.discount_percent)
        .bind(&input.image_url)
        .bind(input.is_available)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        product.ok_or(RepositoryError::NotFound)
    }

    /// Delete a product, removing its order items first so the foreign
    /// key never fires. Both deletes run in one transaction. Returns the
    /// image URL (if any) for storage cleanup.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: ProductId) -> Result<Option<String>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM osteria.order_items WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let deleted: Option<Option<String>> = sqlx::query_scalar(
            "DELETE FROM osteria.products WHERE id = $1 RETURNING image_url",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(image_url) = deleted else {
            // Nothing deleted; the rollback also restores the order items.
            return Err(RepositoryError::NotFound);
        };

        tx.commit().await?;
        Ok(image_url)
    }
}
