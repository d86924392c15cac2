//! Money helpers.
//!
//! All money in Osteria is handled as `rust_decimal::Decimal` with two
//! fractional digits. Floating point never touches a price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
        }
    }
}

/// Apply an optional percentage discount to a listed price.
///
/// A discount only applies when it is strictly between 0 and 100; `None`,
/// zero, negative, and out-of-range values all leave the listed price
/// unchanged. The result is rounded to two decimal places (banker's
/// rounding, the `rust_decimal` default).
#[must_use]
pub fn discounted_price(amount: Decimal, discount_percent: Option<Decimal>) -> Decimal {
    let Some(percent) = discount_percent else {
        return amount;
    };

    if percent <= Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
        return amount;
    }

    (amount * (Decimal::ONE_HUNDRED - percent) / Decimal::ONE_HUNDRED).round_dp(2)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_discount() {
        assert_eq!(discounted_price(dec("12.50"), None), dec("12.50"));
    }

    #[test]
    fn test_zero_discount_ignored() {
        assert_eq!(discounted_price(dec("12.50"), Some(Decimal::ZERO)), dec("12.50"));
    }

    #[test]
    fn test_negative_discount_ignored() {
        assert_eq!(discounted_price(dec("12.50"), Some(dec("-10"))), dec("12.50"));
    }

    #[test]
    fn test_full_discount_ignored() {
        assert_eq!(discounted_price(dec("12.50"), Some(dec("100"))), dec("12.50"));
        assert_eq!(discounted_price(dec("12.50"), Some(dec("150"))), dec("12.50"));
    }

    #[test]
    fn test_valid_discount() {
        assert_eq!(discounted_price(dec("20.00"), Some(dec("25"))), dec("15.00"));
        assert_eq!(discounted_price(dec("9.90"), Some(dec("10"))), dec("8.91"));
    }

    #[test]
    fn test_rounding_to_two_places() {
        // 10.99 * 0.85 = 9.3415 -> 9.34
        assert_eq!(discounted_price(dec("10.99"), Some(dec("15"))), dec("9.34"));
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::default(), CurrencyCode::EUR);
    }
}
