//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! osteria-cli admin create -e admin@example.com -n "Admin Name" \
//!     -p 'a-long-password' -r super_admin
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use secrecy::SecretString;
use thiserror::Error;

use osteria_admin::db::{self, AdminUserRepository, RepositoryError};
use osteria_admin::services::auth::{self, AuthError};
use osteria_core::{AdminRole, Email};

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection or query error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: super_admin, admin, viewer")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password rejected.
    #[error("{0}")]
    Password(#[from] AuthError),

    /// User already exists.
    #[error("Admin user already exists with email: {0}")]
    UserExists(String),
}

/// Create a new admin user.
///
/// # Errors
///
/// Returns `AdminError` when the role, email, or password is invalid,
/// the email is taken, or the database is unreachable.
pub async fn create_user(
    email: &str,
    name: &str,
    password: &str,
    role: &str,
) -> Result<i32, AdminError> {
    dotenvy::dotenv().ok();

    let role: AdminRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|e| AdminError::InvalidEmail(e.to_string()))?;

    let password_hash = auth::hash_password(password)?;

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;
    let pool = db::create_pool(&database_url).await?;

    let repo = AdminUserRepository::new(&pool);
    if repo.get_by_email(&email).await?.is_some() {
        return Err(AdminError::UserExists(email.to_string()));
    }

    let user = repo.create(&email, name, &password_hash, role).await?;

    tracing::info!(email = %user.email, role = %user.role, "Created admin user");
    Ok(user.id.as_i32())
}
