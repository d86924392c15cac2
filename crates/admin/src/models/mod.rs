//! Domain models specific to the admin binary.

pub mod admin_user;

pub use admin_user::{AdminUser, CurrentAdmin};

/// Keys under which values are stored in the session.
pub mod session_keys {
    /// The logged-in admin, stored as [`super::CurrentAdmin`].
    pub const CURRENT_ADMIN: &str = "current_admin";
}
