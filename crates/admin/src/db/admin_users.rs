//! Admin user repository.

use sqlx::PgPool;

use osteria_core::{AdminRole, AdminUserId, Email};

use super::RepositoryError;
use crate::models::AdminUser;

const COLUMNS: &str =
    "id, email, name, password_hash, role, is_active, created_at, last_login_at";

/// Repository for dashboard accounts.
pub struct AdminUserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new admin user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up an admin by email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin.admin_users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new admin with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn create(
        &self,
        email: &Email,
        name: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<AdminUser, RepositoryError> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            r"
            INSERT INTO admin.admin_users (email, name, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "
        ))
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(user)
    }

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn touch_last_login(&self, id: AdminUserId) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE admin.admin_users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
