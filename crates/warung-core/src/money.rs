//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                        │
//! │                                                                    │
//! │  In floating point:                                                │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                      │
//! │                                                                    │
//! │  OUR SOLUTION: integer amounts in the smallest currency unit.      │
//! │  Indonesian rupiah has no minor unit in practice, so Money is a    │
//! │  whole-rupiah i64: Rp 15.000 is stored as 15000.                   │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use warung_core::money::Money;
//!
//! let seblak = Money::new(15000);
//! let kerupuk = Money::new(3000);
//! let line = (seblak + kerupuk) * 2;
//! assert_eq!(line.amount(), 36000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate arithmetic (corrections, deltas) may
///   briefly be negative even though stored prices and totals never are
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, total ordering for report sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole-rupiah amount.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn amount(&self) -> i64 {
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

    /// Checks if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a unit count, saturating instead of wrapping.
    ///
    /// Unit counts are capped well below any overflow point, but a
    /// saturating multiply keeps the arithmetic total even for hostile
    /// inputs.
    #[inline]
    pub const fn multiply_units(&self, units: i64) -> Self {
        Money(self.0.saturating_mul(units))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the conventional Indonesian grouping, e.g. `Rp 15.000`.
///
/// For debugging and receipts in tests; real UI formatting happens outside
/// this crate.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        write!(f, "{}Rp {}", sign, grouped)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// All operators saturate, like `multiply_units`: monetary arithmetic must
// never panic or wrap on hostile input.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: i64) -> Self {
        Money(self.0.saturating_mul(units))
    }
}

/// Summation over topping price lists.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::new(15000);
        let b = Money::new(3000);
        assert_eq!((a + b).amount(), 18000);
        assert_eq!((a - b).amount(), 12000);
        assert_eq!((b * 3).amount(), 9000);
    }

    #[test]
    fn test_sum_of_topping_prices() {
        let toppings = [Money::new(3000), Money::new(3000), Money::new(4000)];
        let total: Money = toppings.iter().copied().sum();
        assert_eq!(total.amount(), 10000);
    }

    #[test]
    fn test_multiply_units_saturates() {
        let price = Money::new(i64::MAX / 2);
        assert_eq!(price.multiply_units(4).amount(), i64::MAX);
    }

    #[test]
    fn test_operators_saturate_instead_of_wrapping() {
        let max = Money::new(i64::MAX);
        assert_eq!(max + Money::new(1), max);

        let mut acc = Money::new(i64::MAX - 100);
        acc += Money::new(15000);
        assert_eq!(acc, max);

        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
        assert_eq!((max * 2).amount(), i64::MAX);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::new(15000).to_string(), "Rp 15.000");
        assert_eq!(Money::new(1234567).to_string(), "Rp 1.234.567");
        assert_eq!(Money::new(500).to_string(), "Rp 500");
        assert_eq!(Money::new(-3000).to_string(), "-Rp 3.000");
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::zero().is_positive());
        assert!(Money::new(1).is_positive());
    }
}
