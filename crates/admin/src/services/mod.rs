//! External service clients and auth helpers for the admin binary.

pub mod auth;
pub mod email;
pub mod storage;

pub use auth::AuthError;
pub use email::EmailService;
pub use storage::{StorageClient, StorageError};
