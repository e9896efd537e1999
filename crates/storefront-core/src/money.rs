//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    24.99 × 2 = 49.98 ... but 0.1 + 0.2 = 0.30000000000000004            │
//! │                                                                         │
//! │  Cart subtotals summed in floats drift at the cent level.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2499 cents × 2 = 4998 cents, exactly                                 │
//! │    Fractional cents (tax) are carried as a scaled integer and only      │
//! │    rounded when a value is presented                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(2499); // $24.99
//!
//! let doubled = price.multiply_quantity(2); // $49.98
//! let total = doubled + Money::from_cents(1000);
//! assert_eq!(total.to_string(), "$59.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::types::TaxRate;

/// Denominator for basis-point arithmetic (10000 bps = 100%).
pub(crate) const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as "amount to free shipping" may
///   pass through zero while being computed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare integer** so the UI receives `4998`, not `{..}`
///
/// ## Where Money is Used
/// ```text
/// Product.price_cents ──► CartLineItem.line_total ──► subtotal
///                                                        │
///                    shipping ◄── PricingPolicy ─────────┤
///                    tax      ◄── PricingPolicy ─────────┤
///                                                        ▼
///                                                      total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(2499); // Represents $24.99
    /// assert_eq!(price.cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtracts `other`, clamping the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let threshold = Money::from_cents(10_000);
    /// assert_eq!(threshold.saturating_sub(Money::from_cents(4998)).cents(), 5002);
    /// assert!(threshold.saturating_sub(Money::from_cents(12_000)).is_zero());
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2499); // $24.99
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 4998); // $49.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns the unrounded tax on this amount, in ten-thousandths of a cent.
    ///
    /// `4998` cents at 800 bps is `3_998_400`, i.e. 399.84 cents. Callers keep
    /// this scaled value while summing and round once with
    /// [`Money::round_half_up_scaled`].
    #[inline]
    pub fn tax_scaled(&self, rate: TaxRate) -> i128 {
        // i128 so large carts cannot overflow the intermediate product
        self.0 as i128 * rate.bps() as i128
    }

    /// Rounds a value expressed in ten-thousandths of a cent to whole cents,
    /// half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::round_half_up_scaled(3_998_400).cents(), 400);
    /// assert_eq!(Money::round_half_up_scaled(5_000).cents(), 1);
    /// assert_eq!(Money::round_half_up_scaled(4_999).cents(), 0);
    /// ```
    pub fn round_half_up_scaled(scaled: i128) -> Money {
        let half = BPS_SCALE / 2;
        let rounded = if scaled < 0 {
            (scaled - half) / BPS_SCALE
        } else {
            (scaled + half) / BPS_SCALE
        };
        Money::from_cents(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Calculates tax rounded half-up to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(4998); // $49.98
    /// let rate = TaxRate::from_bps(800);      // 8%
    ///
    /// // $49.98 × 8% = $3.9984 → $4.00
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 400);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        Money::round_half_up_scaled(self.tax_scaled(rate))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as dollars with two decimals (`$63.98`).
///
/// ## Note
/// The configured currency symbol is applied by the session layer; this
/// impl is the plain USD rendering used in logs and tests.
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

/// Addition saturates at the `i64` bounds, so summing huge lines never panics.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
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
