//! # Money Module
//!
//! Provides the `Money` type for catalog prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Catalog prices are whole roubles (15000, 12000, ...)                   │
//! │  There are no kopecks anywhere in the storefront.                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer whole units                                      │
//! │    15000 + 12000 = 27000, exactly, every time                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bizideas_core::money::Money;
//!
//! let coffee = Money::from_units(15000);
//! let school = Money::from_units(12000);
//!
//! let total = coffee + school;
//! assert_eq!(total.units(), 27000);
//! assert_eq!(total.to_string(), "27\u{a0}000 ₽");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

/// Group separator used by the Russian locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Currency sign shown after the amount.
pub const CURRENCY_SIGN: &str = "₽";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units (roubles).
///
/// ## Design Decisions
/// - **i64 (signed)**: Differences between totals may be negative
/// - **Single field tuple struct**: Serializes as a plain JSON number
/// - **No minor units**: Every catalog price is a whole amount
///
/// ## Where Money is Used
/// ```text
/// Item.price ──┬──► CartEntry.price ──► Cart.total_price() ──► "27 000 ₽"
///              │
///              └──► "Купить за 15 000 ₽" button in the detail view
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use bizideas_core::money::Money;
    ///
    /// let price = Money::from_units(8000);
    /// assert_eq!(price.units(), 8000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
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

    /// Formats the amount with thousands grouping, without the currency sign.
    ///
    /// ## Example
    /// ```rust
    /// use bizideas_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(1500000).format_grouped(' '), "1 500 000");
    /// assert_eq!(Money::from_units(-8000).format_grouped(','), "-8,000");
    /// assert_eq!(Money::from_units(999).format_grouped(' '), "999");
    /// ```
    pub fn format_grouped(&self, separator: char) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(ch);
        }

        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the storefront prints prices: `15 000 ₽`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_grouped(GROUP_SEPARATOR), CURRENCY_SIGN)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summing an iterator of prices (cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(15000);
        assert_eq!(money.units(), 15000);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(15000).to_string(), "15\u{a0}000 ₽");
        assert_eq!(Money::from_units(8000).to_string(), "8\u{a0}000 ₽");
        assert_eq!(Money::from_units(0).to_string(), "0 ₽");
        assert_eq!(Money::from_units(-550).to_string(), "-550 ₽");
    }

    #[test]
    fn test_format_grouped_boundaries() {
        assert_eq!(Money::from_units(100).format_grouped(' '), "100");
        assert_eq!(Money::from_units(1000).format_grouped(' '), "1 000");
        assert_eq!(Money::from_units(100000).format_grouped(' '), "100 000");
        assert_eq!(Money::from_units(-1000).format_grouped(' '), "-1 000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(15000);
        let b = Money::from_units(12000);

        assert_eq!((a + b).units(), 27000);
        assert_eq!((a - b).units(), 3000);

        let mut c = Money::zero();
        c += a;
        assert_eq!(c, a);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_units(15000), Money::from_units(12000)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.units(), 27000);
        assert_eq!(by_value, by_ref);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(8000)).unwrap();
        assert_eq!(json, "8000");

        let back: Money = serde_json::from_str("12000").unwrap();
        assert_eq!(back.units(), 12000);
    }
}
