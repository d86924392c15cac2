//! Product catalog models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::price::discounted_price;
use crate::types::{CategoryId, ProductId};

/// A menu category (antipasti, primi, pizza, dolci, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe identifier used by the storefront menu pages.
    pub slug: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// A sellable dish or product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Listed price before any discount.
    pub price: Decimal,
    /// Percentage discount in (0, 100); other values are ignored.
    pub discount_percent: Option<Decimal>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The price a customer actually pays, with any discount applied.
    #[must_use]
    pub fn current_price(&self) -> Decimal {
        discounted_price(self.price, self.discount_percent)
    }

    /// Whether a real discount is in effect.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.current_price() != self.price
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(price: &str, discount: Option<&str>) -> Product {
        Product {
            id: ProductId::new(1),
            category_id: CategoryId::new(1),
            name: "Margherita".to_string(),
            slug: "margherita".to_string(),
            description: None,
            price: price.parse().unwrap(),
            discount_percent: discount.map(|d| d.parse().unwrap()),
            image_url: None,
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_current_price_without_discount() {
        let p = product("8.50", None);
        assert_eq!(p.current_price(), p.price);
        assert!(!p.is_discounted());
    }

    #[test]
    fn test_current_price_with_discount() {
        let p = product("8.00", Some("25"));
        assert_eq!(p.current_price(), "6.00".parse().unwrap());
        assert!(p.is_discounted());
    }

    #[test]
    fn test_out_of_range_discount_is_not_a_discount() {
        let p = product("8.00", Some("120"));
        assert!(!p.is_discounted());
    }
}
