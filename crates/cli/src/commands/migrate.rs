//! Database migration commands.
//!
//! Both migration sets run against the same database: the storefront set
//! owns the `osteria` schema (catalog, content, orders), the admin set
//! owns the `admin` schema (accounts).
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` / `ADMIN_DATABASE_URL` - connection strings
//!   (both fall back to `DATABASE_URL`)

use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run core schema migrations from `crates/storefront/migrations/`.
///
/// # Errors
///
/// Returns `MigrationError` if the database is unreachable or a
/// migration fails.
pub async fn storefront() -> Result<(), MigrationError> {
    let pool = connect("STOREFRONT_DATABASE_URL").await?;

    tracing::info!("Running storefront migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    tracing::info!("Storefront migrations complete");
    Ok(())
}

/// Run admin schema migrations from `crates/admin/migrations/`.
///
/// # Errors
///
/// Returns `MigrationError` if the database is unreachable or a
/// migration fails.
pub async fn admin() -> Result<(), MigrationError> {
    let pool = connect("ADMIN_DATABASE_URL").await?;

    tracing::info!("Running admin migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Admin migrations complete");
    Ok(())
}

/// Connect using the named variable, falling back to `DATABASE_URL`.
async fn connect(primary_key: &'static str) -> Result<PgPool, MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| MigrationError::MissingEnvVar(primary_key))?;

    tracing::info!("Connecting to database...");
    Ok(PgPool::connect(&database_url).await?)
}
