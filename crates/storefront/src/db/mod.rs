//! Database operations for the storefront.
//!
//! Both server binaries share one Postgres database. The storefront only
//! ever reads catalog/content tables and writes orders.
//!
//! ## Tables touched here
//!
//! - `osteria.categories` / `osteria.products` - menu catalog
//! - `osteria.wines` - wine list
//! - `osteria.banners` / `osteria.events` / `osteria.event_photos` - content
//! - `osteria.delivery_zones` - checkout zone lookup
//! - `osteria.orders` / `osteria.order_items` - order creation and lookup
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p osteria-cli -- migrate storefront
//! ```

pub mod catalog;
pub mod content;
pub mod orders;
pub mod wines;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use content::ContentRepository;
pub use orders::OrderRepository;
pub use wines::WineRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
