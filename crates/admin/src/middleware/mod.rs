//! HTTP middleware for the admin binary.

pub mod auth;
pub mod rate_limit;
pub mod session;

pub use auth::{RequireAdminAuth, RequireWriteAccess};
pub use session::create_session_layer;
