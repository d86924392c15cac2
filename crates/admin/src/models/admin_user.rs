//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use osteria_core::{AdminUserId, Email};

// Re-export AdminRole from core for convenience
pub use osteria_core::AdminRole;

/// An admin user row.
///
/// The password hash never leaves this crate; it is skipped during
/// serialization so a repository result can be returned from a handler
/// without leaking it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: AdminRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// The slice of an admin user kept in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
}

impl From<&AdminUser> for CurrentAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
