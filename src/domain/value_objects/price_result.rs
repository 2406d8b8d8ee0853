//! # Price Result
//!
//! The pair of totals produced by the price calculator.

use crate::domain::value_objects::amount::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base and final price of a selection for one pricing year.
///
/// `final_price` is not floored: if discounts exceed the base price it is
/// negative.
///
/// # Examples
///
/// ```
/// use package_pricing::domain::value_objects::{Amount, PriceResult};
///
/// let result = PriceResult::new(Amount::new(3600), Amount::new(2300));
/// assert_eq!(result.total_discount(), Amount::new(1300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceResult {
    /// Sum of the undiscounted per-service prices.
    base_price: Amount,
    /// Base price after all applicable discounts.
    final_price: Amount,
}

impl PriceResult {
    /// Creates a new price result.
    #[inline]
    #[must_use]
    pub const fn new(base_price: Amount, final_price: Amount) -> Self {
        Self {
            base_price,
            final_price,
        }
    }

    /// Returns the base price.
    #[inline]
    #[must_use]
    pub const fn base_price(&self) -> Amount {
        self.base_price
    }

    /// Returns the final price.
    #[inline]
    #[must_use]
    pub const fn final_price(&self) -> Amount {
        self.final_price
    }

    /// Returns the total discount granted, clamped at the `i64` bounds.
    #[inline]
    #[must_use]
    pub const fn total_discount(&self) -> Amount {
        self.base_price.saturating_sub(self.final_price)
    }
}

impl fmt::Display for PriceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {} / final {}", self.base_price, self.final_price)
    }
}
