//! # Amount
//!
//! Whole-currency-unit money amount.
//!
//! Package prices carry no minor units, so [`Amount`] wraps a signed integer.
//! It is signed because a final price is allowed to go below zero when the
//! discounts exceed the base price.
//!
//! [`Amount::checked_add`] and [`Amount::checked_sub`] report overflow as an
//! [`ArithmeticError`]. The `+`, `-` and [`Sum`] operators saturate at the
//! `i64` bounds instead of panicking.
//!
//! # Examples
//!
//! ```
//! use package_pricing::domain::value_objects::Amount;
//!
//! let base = Amount::new(3600);
//! let discount = Amount::new(1300);
//! assert_eq!(base - discount, Amount::new(2300));
//! assert_eq!(Amount::new(300).to_string(), "300");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use thiserror::Error;

/// Error type for checked amount arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The result is above `i64::MAX` units.
    #[error("arithmetic overflow")]
    Overflow,

    /// The result is below `i64::MIN` units.
    #[error("arithmetic underflow")]
    Underflow,
}

/// Result type for checked amount arithmetic.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// A currency amount in whole units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole currency units.
    #[inline]
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    #[must_use]
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` or `ArithmeticError::Underflow`
    /// if the sum leaves the `i64` range.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> ArithmeticResult<Self> {
        match self.0.checked_add(rhs.0) {
            Some(units) => Ok(Self(units)),
            None if rhs.0 < 0 => Err(ArithmeticError::Underflow),
            None => Err(ArithmeticError::Overflow),
        }
    }

    /// Subtracts `rhs` from this amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` or `ArithmeticError::Overflow`
    /// if the difference leaves the `i64` range.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(units) => Ok(Self(units)),
            None if rhs.0 < 0 => Err(ArithmeticError::Overflow),
            None => Err(ArithmeticError::Underflow),
        }
    }

    /// Adds two amounts, clamping at the `i64` bounds.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtracts `rhs`, clamping at the `i64` bounds.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

/// Saturating addition.
impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

/// Saturating subtraction.
impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.saturating_sub(rhs);
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
