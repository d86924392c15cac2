//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Email, OrderId, OrderItemId, OrderStatus, ProductId};

/// A customer order.
///
/// Monetary fields are denormalized at checkout time: `subtotal` is the
/// sum of line totals, `total = subtotal + delivery_fee`. A pickup order
/// has no delivery address and a zero fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    pub id: OrderId,
    /// Human-facing reference, e.g. `OS-20260806-K7Q2ZD`.
    pub order_number: String,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub delivery_address: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    /// Client IP recorded from proxy headers at checkout.
    pub client_ip: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Pickup orders carry no delivery address.
    #[must_use]
    pub const fn is_delivery(&self) -> bool {
        self.delivery_address.is_some()
    }
}

/// A single order line.
///
/// `product_name` and `unit_price` are copied from the product row at
/// checkout so later catalog edits do not rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub line_total: Decimal,
}
