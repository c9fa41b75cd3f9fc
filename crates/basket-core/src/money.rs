//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing shelf prices as floats:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    10 + 20 = 30 minor units, always                                     │
//! │                                                                         │
//! │  Text typed into a price field is parsed straight into minor units     │
//! │  by `Money::parse_decimal`, never through f64.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let milk = Money::from_major_minor(30, 0);
//! let tomatoes = Money::from_cents(2000).multiply_quantity(2);
//! assert_eq!((milk + tomatoes).cents(), 7000);
//!
//! assert_eq!(Money::parse_decimal("12,5"), Some(Money::from_cents(1250)));
//! ```
//!
//! Currency symbols are deliberately absent here; `Display` prints the bare
//! amount and the presentation layer decorates it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: `real - estimated` differences can go negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a bare integer**: the presentation layer divides by 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Multiplies a unit price by an item quantity, saturating at the `i64`
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2000);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 4000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Parses decimal text such as `"12"`, `"12.5"`, `"12,50"` or `".75"`.
    ///
    /// Both `.` and `,` are accepted as the decimal separator. At most two
    /// fraction digits are allowed; anything else returns `None`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("18"), Some(Money::from_cents(1800)));
    /// assert_eq!(Money::parse_decimal("-2.05"), Some(Money::from_cents(-205)));
    /// assert_eq!(Money::parse_decimal("1.999"), None);
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Money> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (major_text, minor_text) = match digits.split_once(|c| c == '.' || c == ',') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_text.is_empty() && minor_text.is_empty() {
            return None;
        }
        if minor_text.len() > 2 {
            return None;
        }
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(major_text) || !all_digits(minor_text) {
            return None;
        }

        let major: i64 = if major_text.is_empty() {
            0
        } else {
            major_text.parse().ok()?
        };
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().ok()? * 10,
            _ => minor_text.parse().ok()?,
        };

        let cents = major.checked_mul(100)?.checked_add(minor)?;
        Some(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Prints the bare amount with two fraction digits, e.g. `70.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Totals saturate instead of wrapping or panicking.
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

/// Multiplication by an item quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(30, 0).cents(), 3000);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(7000).to_string(), "70.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert!((b - a).is_negative());
        assert_eq!((a * 3).cents(), 3000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_huge_prices_saturate() {
        let huge = Money::from_cents(9_000_000_000_000_000_000);

        assert_eq!(huge.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((huge * 3).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((Money::zero() - huge - huge).cents(), i64::MIN);

        let total: Money = [huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let mut running = huge;
        running += huge;
        assert_eq!(running.cents(), i64::MAX);
    }

    #[test]
    fn test_parse_decimal_accepts_common_inputs() {
        assert_eq!(Money::parse_decimal("30"), Some(Money::from_cents(3000)));
        assert_eq!(Money::parse_decimal(" 12.5 "), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal("12,05"), Some(Money::from_cents(1205)));
        assert_eq!(Money::parse_decimal(".75"), Some(Money::from_cents(75)));
        assert_eq!(Money::parse_decimal("7."), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_decimal("0"), Some(Money::zero()));
        assert_eq!(Money::parse_decimal("-3"), Some(Money::from_cents(-300)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("   "), None);
        assert_eq!(Money::parse_decimal("."), None);
        assert_eq!(Money::parse_decimal("abc"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
        assert_eq!(Money::parse_decimal("1.234"), None);
        assert_eq!(Money::parse_decimal("+5"), None);
        assert_eq!(Money::parse_decimal("1e3"), None);
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
    }
}
