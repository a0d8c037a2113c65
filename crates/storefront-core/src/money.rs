//! # Money Module
//!
//! Provides the `Money` type and the currency display used by the product
//! list.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product prices arrive as JSON numbers (f64).                           │
//! │                                                                         │
//! │  They are converted ONCE, at the boundary, to integer minor units:      │
//! │    35000     → Money(3_500_000)                                         │
//! │    1199.995  → Money(120_000)   (rounded half away from zero)           │
//! │                                                                         │
//! │  Everything after that (grouping, rounding to whole units for           │
//! │  display) is integer math.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_minor(3_500_000);
//! assert_eq!(CurrencyFormat::default().format(price), "NT$ 35,000");
//! ```

use serde::{Deserialize, Serialize};

/// Minor units per major unit (cents per dollar).
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units (1/100 of the major unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Converts a decimal price as received on the wire.
    ///
    /// Rounds half away from zero to the nearest minor unit. Returns `None`
    /// for NaN, infinities and values beyond the i64 minor-unit range.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(10.99), Some(Money::from_minor(1099)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let minor = (value * MINOR_PER_MAJOR as f64).round();
        if minor >= i64::MAX as f64 || minor <= i64::MIN as f64 {
            return None;
        }

        Some(Money(minor as i64))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Currency Display
// =============================================================================

/// How a [`Money`] value is rendered for people.
///
/// The default matches the product list: `NT$ ` prefix, no decimals,
/// `,` every three digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Prefix placed before the number (including any spacing).
    pub symbol: String,

    /// Decimal places shown, 0..=2.
    pub decimals: u8,

    /// Thousands separator, if any.
    pub grouping: Option<char>,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "NT$ ".to_string(),
            decimals: 0,
            grouping: Some(','),
        }
    }
}

impl CurrencyFormat {
    /// Formats a money value.
    ///
    /// Values are rounded half away from zero to `decimals` places.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::{CurrencyFormat, Money};
    ///
    /// let usd = CurrencyFormat { symbol: "$".into(), decimals: 2, grouping: Some(',') };
    /// assert_eq!(usd.format(Money::from_minor(123_456_789)), "$1,234,567.89");
    /// assert_eq!(usd.format(Money::from_minor(-1234)), "-$12.34");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let decimals = u32::from(self.decimals.min(2));
        let step = 10_u64.pow(2 - decimals);

        let abs = amount.minor().unsigned_abs();
        let rounded = (abs + step / 2) / step;
        let scale = 10_u64.pow(decimals);
        let whole = rounded / scale;
        let frac = rounded % scale;

        let mut out = String::new();
        if amount.is_negative() && rounded != 0 {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&self.group_digits(whole));
        if decimals > 0 {
            out.push_str(&format!(".{:0width$}", frac, width = decimals as usize));
        }

        out
    }

    fn group_digits(&self, whole: u64) -> String {
        let digits = whole.to_string();
        let Some(separator) = self.grouping else {
            return digits;
        };

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
