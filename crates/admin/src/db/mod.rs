//! Database operations for the admin dashboard.
//!
//! Shares the `osteria` schema with the storefront and owns the `admin`
//! schema on top of it.
//!
//! ## Tables touched here
//!
//! - `osteria.*` - full CRUD over catalog, wines, content, zones, orders
//! - `admin.admin_users` - dashboard accounts
//! - tower-sessions store tables (created by its own migration)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p osteria-cli -- migrate admin
//! ```

pub mod admin_users;
pub mod banners;
pub mod categories;
pub mod delivery_zones;
pub mod events;
pub mod orders;
pub mod products;
pub mod wines;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_users::AdminUserRepository;
pub use banners::BannerRepository;
pub use categories::CategoryRepository;
pub use delivery_zones::DeliveryZoneRepository;
pub use events::EventRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
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

    /// Constraint violation (e.g., duplicate slug, category in use).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Translate unique-constraint violations into `Conflict`, leaving
    /// other sqlx errors as `Database`.
    #[must_use]
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(db_err.message().to_string());
            }
        }
        Self::Database(err)
    }
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
