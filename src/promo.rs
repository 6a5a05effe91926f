//! Promotional Display Data
//!
//! Strike-through prices and discount badges shown on catalog cards. Purely
//! presentational: nothing here feeds back into the price a buyer pays.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso::Currency};

/// Promotional display data for a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Promo<'a> {
    /// Pre-discount price, rendered struck through next to the real price.
    original_price: Money<'a, Currency>,

    /// Advertised discount as a fraction (e.g. 0.25 for a "-25%" badge).
    discount: Percentage,
}

impl<'a> Promo<'a> {
    /// Create promo display data from the original price and discount fraction.
    #[must_use]
    pub fn new(original_price: Money<'a, Currency>, discount: Percentage) -> Self {
        Self {
            original_price,
            discount,
        }
    }

    /// Pre-discount price for strike-through display.
    #[must_use]
    pub fn original_price(&self) -> Money<'a, Currency> {
        self.original_price
    }

    /// Advertised discount fraction.
    #[must_use]
    pub fn discount(&self) -> Percentage {
        self.discount
    }

    /// Discount badge text, e.g. "-25%".
    #[must_use]
    pub fn badge(&self) -> String {
        format!("-{}%", percent_points(self.discount).normalize())
    }
}

/// Converts a fractional percentage to percent points for display.
#[must_use]
pub fn percent_points(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::from_i64(100).unwrap_or(Decimal::ZERO)).round_dp(2)
}
