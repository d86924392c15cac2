//! Newtype wrappers and enums shared across the workspace.

pub mod email;
pub mod id;
pub mod price;
pub mod status;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, discounted_price};
pub use status::{AdminRole, OrderStatus};
