//! Catalog repository: categories and products.
//!
//! Storefront queries only surface available products; hidden items stay
//! visible to the dashboard but never leave this layer.

use sqlx::PgPool;

use osteria_core::models::{Category, Product};
use osteria_core::ProductId;

use super::RepositoryError;

/// Read-only repository for the public menu catalog.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories, ordered for display.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name, slug, description, display_order, created_at
            FROM osteria.categories
            ORDER BY display_order, name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Available products, optionally restricted to one category slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_available_products(
        &self,
        category_slug: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = match category_slug {
            Some(slug) => {
                sqlx::query_as::<_, Product>(
                    r"
                    SELECT p.id, p.category_id, p.name, p.slug, p.description,
                           p.price, p.discount_percent, p.image_url, p.is_available,
                           p.created_at, p.updated_at
                    FROM osteria.products p
                    JOIN osteria.categories c ON c.id = p.category_id
                    WHERE p.is_available AND c.slug = $1
                    ORDER BY p.name
                    ",
                )
                .bind(slug)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    r"
                    SELECT id, category_id, name, slug, description,
                           price, discount_percent, image_url, is_available,
                           created_at, updated_at
                    FROM osteria.products
                    WHERE is_available
                    ORDER BY name
                    ",
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(products)
    }

    /// A single available product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_available_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, slug, description,
                   price, discount_percent, image_url, is_available,
                   created_at, updated_at
            FROM osteria.products
            WHERE slug = $1 AND is_available
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Fetch products by ID for checkout pricing. Unavailable products are
    /// returned too; the checkout layer decides how to report them.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, RepositoryError> {
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.as_i32()).collect();

        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, category_id, name, slug, description,
                   price, discount_percent, image_url, is_available,
                   created_at, updated_at
            FROM osteria.products
            WHERE id = ANY($1)
            ",
        )
        .bind(&raw_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }
}
