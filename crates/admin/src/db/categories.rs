//! Category repository for the dashboard.

use serde::Deserialize;
use sqlx::PgPool;

use osteria_core::CategoryId;
use osteria_core::models::Category;

use super::RepositoryError;

const COLUMNS: &str = "id, name, slug, description, display_order, created_at";

/// Payload for creating or replacing a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

/// Repository for dashboard category management.
pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {COLUMNS} FROM osteria.categories ORDER BY display_order, name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on a duplicate slug.
    pub async fn create(&self, input: &CategoryInput) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            r"
            INSERT INTO osteria.categories (name, slug, description, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "
        ))
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.display_order)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(category)
    }

    /// Replace a category's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID and
    /// `RepositoryError::Conflict` on a duplicate slug.
    pub async fn update(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, RepositoryError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            r"
            UPDATE osteria.categories
            SET name = $2, slug = $3, description = $4, display_order = $5
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.description)
        .bind(input.display_order)
        .fetch_optional(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        category.ok_or(RepositoryError::NotFound)
    }

    /// Delete a category. A category that still has products is a
    /// conflict; reassign or delete the products first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` when products reference the
    /// category and `RepositoryError::NotFound` for an unknown ID.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let product_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM osteria.products WHERE category_id = $1")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        if product_count > 0 {
            return Err(RepositoryError::Conflict(format!(
                "category has {product_count} products"
            )));
        }

        let result = sqlx::query("DELETE FROM osteria.categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
