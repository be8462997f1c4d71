//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::ops::Mul;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in the store currency's standard unit (e.g., dollars, not cents).
///
/// Arithmetic is exact decimal arithmetic; rounding to 2 decimal places
/// happens only at display time via [`Price::display`]. Deserializes from
/// either a JSON number (`19.99`) or a string (`"19.99"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The fallback price (19.99) used when the catalog source omits one.
    #[must_use]
    pub fn fallback() -> Self {
        Self(Decimal::new(19_99, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with exactly 2 decimal places (e.g., "19.99").
    #[must_use]
    pub fn display(&self) -> String {
        display_2dp(self.0)
    }
}

/// Render a decimal amount with exactly 2 decimal places, rounding halves
/// away from zero.
#[must_use]
pub fn display_2dp(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Mul<u32> for Price {
    type Output = Decimal;

    fn mul(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_19_99() {
        assert_eq!(Price::fallback().amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::new(Decimal::new(5, 0)).display(), "5.00");
        assert_eq!(Price::new(Decimal::new(1999, 2)).display(), "19.99");
        assert_eq!(Price::new(Decimal::new(125, 1)).display(), "12.50");
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: Price = serde_json::from_str("19.99").unwrap();
        assert_eq!(price, Price::fallback());
    }

    #[test]
    fn test_deserialize_from_string() {
        let price: Price = serde_json::from_str("\"19.99\"").unwrap();
        assert_eq!(price, Price::fallback());
    }

    #[test]
    fn test_display_2dp_rounds_half_away_from_zero() {
        assert_eq!(display_2dp(Decimal::new(9999, 3)), "10.00");
        assert_eq!(display_2dp(Decimal::new(125, 3)), "0.13");
        assert_eq!(display_2dp(Decimal::new(7, 0)), "7.00");
    }

    #[test]
    fn test_mul_by_quantity_is_exact() {
        // 0.10 * 3 must be exactly 0.30, not a float approximation
        let price = Price::new(Decimal::new(10, 2));
        assert_eq!(price * 3, Decimal::new(30, 2));
    }
}
