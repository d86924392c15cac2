//! Checkout pricing.
//!
//! Orders are priced entirely from database rows; quantities are the only
//! thing trusted from the client. There is no inventory: pricing never
//! reserves or decrements stock.

use rust_decimal::Decimal;
use thiserror::Error;

use osteria_core::models::{DeliveryZone, Product};
use osteria_core::ProductId;

use crate::db::orders::NewOrderLine;

/// Upper bound on distinct lines per order.
pub const MAX_LINES: usize = 50;

/// Upper bound on quantity per line.
pub const MAX_QUANTITY: i32 = 20;

/// One requested line from the client: product reference plus quantity.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct RequestedItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// A fully priced order, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedOrder {
    pub lines: Vec<NewOrderLine>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Reasons a checkout request cannot be priced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("order contains no items")]
    EmptyCart,

    #[error("order exceeds {MAX_LINES} distinct items")]
    TooManyLines,

    #[error("quantity for product {product_id} must be between 1 and {MAX_QUANTITY}")]
    InvalidQuantity { product_id: ProductId },

    #[error("product {product_id} does not exist")]
    UnknownProduct { product_id: ProductId },

    #[error("'{name}' is currently unavailable")]
    UnavailableProduct { name: String },

    #[error("no delivery to postal code {postal_code}")]
    OutsideDeliveryArea { postal_code: String },

    #[error("minimum order for {zone} is {minimum}")]
    BelowZoneMinimum { zone: String, minimum: Decimal },
}

/// Price the requested items against their catalog rows.
///
/// Every product must exist and be available; unit prices come from the
/// row with the discount arithmetic applied.
///
/// # Errors
///
/// Returns the first [`CheckoutError`] encountered, in request order.
pub fn price_items(
    requested: &[RequestedItem],
    products: &[Product],
) -> Result<Vec<NewOrderLine>, CheckoutError> {
    if requested.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    if requested.len() > MAX_LINES {
        return Err(CheckoutError::TooManyLines);
    }

    let mut lines = Vec::with_capacity(requested.len());
    for item in requested {
        if item.quantity < 1 || item.quantity > MAX_QUANTITY {
            return Err(CheckoutError::InvalidQuantity {
                product_id: item.product_id,
            });
        }

        let product = products
            .iter()
            .find(|p| p.id == item.product_id)
            .ok_or(CheckoutError::UnknownProduct {
                product_id: item.product_id,
            })?;

        if !product.is_available {
            return Err(CheckoutError::UnavailableProduct {
                name: product.name.clone(),
            });
        }

        let unit_price = product.current_price();
        lines.push(NewOrderLine {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price,
            quantity: item.quantity,
            line_total: (unit_price * Decimal::from(item.quantity)).round_dp(2),
        });
    }

    Ok(lines)
}

/// Combine priced lines with the delivery decision into final totals.
///
/// `zone` is the active zone matching the order's postal code, or `None`
/// when the address is outside every zone. Pickup orders pass
/// `postal_code = None` and skip the zone logic entirely.
///
/// # Errors
///
/// Returns `OutsideDeliveryArea` or `BelowZoneMinimum` for delivery
/// orders that fail the zone rules.
pub fn price_order(
    lines: Vec<NewOrderLine>,
    postal_code: Option<&str>,
    zone: Option<&DeliveryZone>,
) -> Result<PricedOrder, CheckoutError> {
    let subtotal: Decimal = lines.iter().map(|l| l.line_total).sum();

    let delivery_fee = match postal_code {
        None => Decimal::ZERO,
        Some(postal_code) => {
            let zone = zone.ok_or_else(|| CheckoutError::OutsideDeliveryArea {
                postal_code: postal_code.to_string(),
            })?;

            if subtotal < zone.minimum_order {
                return Err(CheckoutError::BelowZoneMinimum {
                    zone: zone.name.clone(),
                    minimum: zone.minimum_order,
                });
            }
            zone.delivery_fee
        }
    };

    let total = subtotal + delivery_fee;
    Ok(PricedOrder {
        lines,
        subtotal,
        delivery_fee,
        total,
    })
}

/// Generate a public order number: `OS-YYYYMMDD-XXXXXX`.
///
/// The suffix is drawn from an unambiguous uppercase alphabet (no `O`/`0`,
/// `I`/`1`), good for reading over the phone.
#[must_use]
pub fn generate_order_number(today: chrono::NaiveDate) -> String {
    use rand::Rng;

    const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    let mut rng = rand::rng();
    let suffix: String = (0..6)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            char::from(ALPHABET[idx])
        })
        .collect();

    format!("OS-{}-{}", today.format("%Y%m%d"), suffix)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use osteria_core::{CategoryId, DeliveryZoneId};

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(id: i32, price: &str, discount: Option<&str>, available: bool) -> Product {
        Product {
            id: ProductId::new(id),
            category_id: CategoryId::new(1),
            name: format!("Dish {id}"),
            slug: format!("dish-{id}"),
            description: None,
            price: dec(price),
            discount_percent: discount.map(dec),
            image_url: None,
            is_available: available,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn zone(minimum: &str, fee: &str) -> DeliveryZone {
        DeliveryZone {
            id: DeliveryZoneId::new(1),
            name: "Centro".to_string(),
            postal_code: "00186".to_string(),
            delivery_fee: dec(fee),
            minimum_order: dec(minimum),
            is_active: true,
        }
    }

    fn item(id: i32, quantity: i32) -> RequestedItem {
        RequestedItem {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert_eq!(price_items(&[], &[]), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_too_many_lines_rejected() {
        let requested: Vec<_> = (0..51).map(|i| item(i, 1)).collect();
        assert_eq!(
            price_items(&requested, &[]),
            Err(CheckoutError::TooManyLines)
        );
    }

    #[test]
    fn test_quantity_bounds() {
        let products = [product(1, "10.00", None, true)];
        assert!(matches!(
            price_items(&[item(1, 0)], &products),
            Err(CheckoutError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            price_items(&[item(1, 21)], &products),
            Err(CheckoutError::InvalidQuantity { .. })
        ));
        assert!(price_items(&[item(1, 20)], &products).is_ok());
    }

    #[test]
    fn test_unknown_product_rejected() {
        let products = [product(1, "10.00", None, true)];
        assert!(matches!(
            price_items(&[item(2, 1)], &products),
            Err(CheckoutError::UnknownProduct { .. })
        ));
    }

    #[test]
    fn test_unavailable_product_rejected() {
        let products = [product(1, "10.00", None, false)];
        assert_eq!(
            price_items(&[item(1, 1)], &products),
            Err(CheckoutError::UnavailableProduct {
                name: "Dish 1".to_string()
            })
        );
    }

    #[test]
    fn test_prices_come_from_catalog_with_discount() {
        let products = [product(1, "8.00", Some("25"), true)];
        let lines = price_items(&[item(1, 3)], &products).unwrap();
        assert_eq!(lines.len(), 1);
        let line = lines.first().unwrap();
        assert_eq!(line.unit_price, dec("6.00"));
        assert_eq!(line.line_total, dec("18.00"));
    }

    #[test]
    fn test_pickup_order_has_no_fee() {
        let products = [product(1, "10.00", None, true)];
        let lines = price_items(&[item(1, 2)], &products).unwrap();
        let priced = price_order(lines, None, None).unwrap();
        assert_eq!(priced.subtotal, dec("20.00"));
        assert_eq!(priced.delivery_fee, Decimal::ZERO);
        assert_eq!(priced.total, dec("20.00"));
    }

    #[test]
    fn test_delivery_outside_zone_rejected() {
        let products = [product(1, "30.00", None, true)];
        let lines = price_items(&[item(1, 1)], &products).unwrap();
        assert_eq!(
            price_order(lines, Some("99999"), None),
            Err(CheckoutError::OutsideDeliveryArea {
                postal_code: "99999".to_string()
            })
        );
    }

    #[test]
    fn test_delivery_below_minimum_rejected() {
        let products = [product(1, "10.00", None, true)];
        let lines = price_items(&[item(1, 1)], &products).unwrap();
        let z = zone("15.00", "2.50");
        assert_eq!(
            price_order(lines, Some("00186"), Some(&z)),
            Err(CheckoutError::BelowZoneMinimum {
                zone: "Centro".to_string(),
                minimum: dec("15.00")
            })
        );
    }

    #[test]
    fn test_delivery_meets_minimum_adds_fee() {
        let products = [product(1, "10.00", None, true)];
        let lines = price_items(&[item(1, 2)], &products).unwrap();
        let z = zone("15.00", "2.50");
        let priced = price_order(lines, Some("00186"), Some(&z)).unwrap();
        assert_eq!(priced.subtotal, dec("20.00"));
        assert_eq!(priced.delivery_fee, dec("2.50"));
        assert_eq!(priced.total, dec("22.50"));
    }

    #[test]
    fn test_minimum_is_checked_against_subtotal_not_total() {
        // Subtotal exactly at the minimum passes.
        let products = [product(1, "15.00", None, true)];
        let lines = price_items(&[item(1, 1)], &products).unwrap();
        let z = zone("15.00", "2.50");
        assert!(price_order(lines, Some("00186"), Some(&z)).is_ok());
    }

    #[test]
    fn test_order_number_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let number = generate_order_number(date);
        assert!(number.starts_with("OS-20260806-"));
        assert_eq!(number.len(), "OS-20260806-".len() + 6);
        let suffix = number.rsplit('-').next().unwrap();
        assert!(suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert!(!suffix.contains('O') && !suffix.contains('0'));
    }
}
