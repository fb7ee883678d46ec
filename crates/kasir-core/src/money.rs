//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                  │
//! │                                                              │
//! │  In floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                │
//! │                                                              │
//! │  OUR SOLUTION: integers in the smallest currency unit        │
//! │    3500 * 2 + 10800 = 17800, exactly                         │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every price, subtotal and total in the system flows through this type.
//! Only a presentation layer converts it to a display string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: leaves room for adjustments and corrections
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let price = Money::from_cents(3500);
    /// assert_eq!(price.cents(), 3500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

/// Multiplication by a quantity: `unit_price * quantity = line subtotal`.
impl Mul<i64> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, quantity: i64) -> Money {
        Money(self.0 * quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    /// Raw amount in the smallest unit; currency presentation is a
    /// surface-layer concern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(3500);
        assert_eq!(m.cents(), 3500);
        assert!(!m.is_zero());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::zero().cents(), 0);
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(3500);
        let b = Money::from_cents(10800);

        assert_eq!((a + b).cents(), 14300);
        assert_eq!((b - a).cents(), 7300);
        assert_eq!((a * 2).cents(), 7000);

        let mut total = Money::zero();
        total += a * 2;
        total += b;
        assert_eq!(total.cents(), 17800);
    }

    #[test]
    fn test_sum() {
        let total: Money = [3500, 3500, 10800]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 17800);
    }

    #[test]
    fn test_display_is_raw_units() {
        assert_eq!(Money::from_cents(17800).to_string(), "17800");
    }
}
