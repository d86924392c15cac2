//! Domain row models shared by the storefront and admin binaries.
//!
//! Both servers read the same Postgres database, so the row shapes live
//! here rather than being duplicated per crate. These are plain data
//! types; all queries live in each binary's `db` module.

pub mod catalog;
pub mod content;
pub mod order;
pub mod wine;

pub use catalog::{Category, Product};
pub use content::{Banner, DeliveryZone, Event, EventPhoto};
pub use order::{Order, OrderItem};
pub use wine::{Wine, WineType};
