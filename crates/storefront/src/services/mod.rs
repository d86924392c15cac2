//! External service clients for the storefront.

pub mod email;

pub use email::EmailService;
