//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    49.99 × 3 = 149.96999999999997  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    4999 cents × 3 = 14997 cents = $149.97                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let per_day = Money::from_major_minor(49, 99);       // $49.99
//! let total = per_day.checked_multiply_days(3);        // $149.97
//! assert_eq!(total, Some(Money::from_cents(14997)));
//!
//! // Operator-typed amounts are parsed exactly
//! assert_eq!(Money::parse_decimal("10.5"), Some(Money::from_cents(1050)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Car.price_per_day ──┬──► PriceQuote.base_price ──┐
///                     │                            ├──► PriceQuote.total
/// insurance fee ──────┴──► PriceQuote.insurance ───┘         │
///                                                            ▼
///                                                  Rental.total_price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(5000); // Represents $50.00
    /// assert_eq!(price.cents(), 5000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal amount such as `"50"`, `"49.9"` or `"49.99"`.
    ///
    /// ## Rules
    /// - Optional leading `-`
    /// - At most two fractional digits
    /// - No exponent, no thousands separators, no currency symbol
    ///
    /// Returns `None` for anything else, including values outside `i64` cents.
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let input = input.trim();
        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_str.is_empty() || minor_str.len() > 2 {
            return None;
        }
        if !major_str.chars().all(|c| c.is_ascii_digit())
            || !minor_str.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        if digits.ends_with('.') {
            return None;
        }

        let major: i64 = major_str.parse().ok()?;
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().ok()? * 10,
            _ => minor_str.parse().ok()?,
        };

        let cents = major.checked_mul(100)?.checked_add(minor)?;
        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a daily rate by a number of billable days, `None` on
    /// overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let per_day = Money::from_cents(5000); // $50.00
    /// assert_eq!(per_day.checked_multiply_days(4), Some(Money::from_cents(20000)));
    /// ```
    #[inline]
    pub const fn checked_multiply_days(&self, days: i64) -> Option<Self> {
        match self.0.checked_mul(days) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The desk formats with the configured
/// currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(49, 99).cents(), 4999);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(24000)), "$240.00");
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("50"), Some(Money::from_cents(5000)));
        assert_eq!(Money::parse_decimal("49.99"), Some(Money::from_cents(4999)));
        assert_eq!(Money::parse_decimal("10.5"), Some(Money::from_cents(1050)));
        assert_eq!(Money::parse_decimal(" 7.05 "), Some(Money::from_cents(705)));
        assert_eq!(Money::parse_decimal("-2.50"), Some(Money::from_cents(-250)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("abc"), None);
        assert_eq!(Money::parse_decimal("1.234"), None);
        assert_eq!(Money::parse_decimal("1."), None);
        assert_eq!(Money::parse_decimal(".50"), None);
        assert_eq!(Money::parse_decimal("$5"), None);
        assert_eq!(Money::parse_decimal("1e3"), None);
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Money::from_cents(i64::MAX).checked_multiply_days(2), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(100).checked_add(Money::from_cents(50)),
            Some(Money::from_cents(150))
        );
    }
}
