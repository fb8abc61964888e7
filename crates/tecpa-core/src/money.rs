//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    19.99 × 3 = 59.96999999999999    ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1999 cents × 3 = 5997 cents = "59.97"                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tecpa_core::money::Money;
//!
//! // Create from cents, or parse what the user typed
//! let price = Money::from_cents(1099);
//! let typed = Money::parse("10.99").unwrap();
//! assert_eq!(price, typed);
//!
//! // Line totals
//! assert_eq!(price.multiply_quantity(2).to_plain_string(), "21.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.purchase_price_cents ──► unit price ──► × quantity ──► Sale.total_cents
///                                                                   │
///        Sales screen total field "30.00" ◄─────────────────────────┤
///        Exported history column "$30.00" ◄─────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tecpa_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tecpa_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Like [`Money::multiply_quantity`] but returns `None` on overflow.
    ///
    /// The quantity field accepts any run of digits, so a pasted
    /// twenty-digit number must not panic.
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Parses a decimal amount typed by the user.
    ///
    /// ## Accepted Input
    /// - `"10"`, `"10.5"`, `"10.50"`, `"0.99"`, `".5"`
    /// - surrounding whitespace is ignored
    /// - a leading `-` is accepted here; callers reject negatives where needed
    ///
    /// ## Rejected Input
    /// - empty input
    /// - anything other than digits and a single `.`
    /// - more than two fraction digits
    ///
    /// ## Example
    /// ```rust
    /// use tecpa_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
    /// assert!(Money::parse("10.999").is_err());
    /// assert!(Money::parse("ten").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        Money::parse_named("amount", input)
    }

    /// Same as [`Money::parse`], reporting errors against `field`.
    pub fn parse_named(field: &str, input: &str) -> Result<Money, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::required(field));
        }

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(ValidationError::invalid_format(field, "must be a number"));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(ValidationError::invalid_format(field, "must be a number"));
        }

        if frac.len() > 2 {
            return Err(ValidationError::invalid_format(
                field,
                "at most two decimal places",
            ));
        }

        let too_large = || ValidationError::invalid_format(field, "amount is too large");

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };

        // "5" means 50 cents, "05" means 5 cents
        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => frac.parse::<i64>().map_err(|_| too_large())?,
        };

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_value))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Formats the amount with exactly two decimals and no currency symbol.
    ///
    /// This is what the Sales screen shows in the read-only total field.
    ///
    /// ## Example
    /// ```rust
    /// use tecpa_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3000).to_plain_string(), "30.00");
    /// assert_eq!(Money::from_cents(-50).to_plain_string(), "-0.50");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with the currency prefix, e.g. `$10.99`.
///
/// Used for the Total column of the exported sales history.
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

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_plain_string_has_two_decimals() {
        assert_eq!(Money::from_cents(3000).to_plain_string(), "30.00");
        assert_eq!(Money::from_cents(5).to_plain_string(), "0.05");
        assert_eq!(Money::from_cents(-50).to_plain_string(), "-0.50");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.05").unwrap().cents(), 1005);
        assert_eq!(Money::parse(" 0.99 ").unwrap().cents(), 99);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse("-2.25").unwrap().cents(), -225);
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert_eq!(
            Money::parse("").unwrap_err(),
            ValidationError::required("amount")
        );
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1,50").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("10.999").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_named_reports_field() {
        let err = Money::parse_named("purchase price", "x").unwrap_err();
        assert!(err.to_string().starts_with("purchase price"));
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(1000);
        assert_eq!(unit_price.multiply_quantity(3).to_plain_string(), "30.00");
    }

    #[test]
    fn test_checked_multiply_overflow() {
        let unit_price = Money::from_cents(1000);
        assert!(unit_price.checked_multiply_quantity(i64::MAX).is_none());
        assert_eq!(
            unit_price.checked_multiply_quantity(4),
            Some(Money::from_cents(4000))
        );
    }

    #[test]
    fn test_float_trap_avoided() {
        // 19.99 × 3 in f64 is 59.96999999999999
        let price = Money::parse("19.99").unwrap();
        assert_eq!(price.multiply_quantity(3).to_plain_string(), "59.97");
    }
}
