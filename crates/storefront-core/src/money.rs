//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    10.50 × (1 - 0.20) = 8.400000000000000355  ❌                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1050 cents - (1050 × 2000 bps + 5000) / 10000 = 840 cents  ✅       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! assert_eq!(price.to_string(), "$10.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::{DiscountRate, ExchangeRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► calculate_discount ──► Order.total_amount ──► charge()
///       │
///       └──► get_price_in_currency (× ExchangeRate)
///
/// ShippingQuote.cost ──► "Shipping Cost: $10.00 (2 Days)"
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
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount in major units (e.g. `10.5` dollars) coming
    /// from an untyped payload.
    ///
    /// Only for boundary parsing (JSON bodies). Returns `None` for NaN,
    /// infinities, and values that do not fit in i64 cents. Rounds half away
    /// from zero to the nearest cent.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_units(10.5), Some(Money::from_cents(1050)));
    /// assert_eq!(Money::from_major_units(f64::NAN), None);
    /// ```
    pub fn from_major_units(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        // i64::MAX rounds up to 2^63 as f64, which no longer fits
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Implementation
    /// Integer math on basis points: `amount - (amount * bps + 5000) / 10000`.
    /// The +5000 rounds the discount amount half-up to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(1050); // $10.50
    /// let discounted = price.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted.cents(), 945); // $9.45
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large amounts from overflowing during the multiply
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// Converts this amount with an exchange rate.
    ///
    /// ## Implementation
    /// `ExchangeRate` is parts-per-million, so the result is
    /// `(amount * ppm + 500_000) / 1_000_000`, rounded half-up.
    ///
    /// Returns `None` when the converted amount does not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::ExchangeRate;
    ///
    /// let amount = Money::from_cents(1000); // 10.00
    /// let converted = amount.convert(ExchangeRate::from_ppm(1_500_000)); // × 1.5
    /// assert_eq!(converted, Some(Money::from_cents(1500)));
    ///
    /// let huge = Money::from_cents(i64::MAX);
    /// assert_eq!(huge.convert(ExchangeRate::from_ppm(3_000_000)), None);
    /// ```
    pub fn convert(&self, rate: ExchangeRate) -> Option<Money> {
        let converted = (self.0 as i128 * rate.ppm() as i128 + 500_000) / 1_000_000;
        i64::try_from(converted).ok().map(Money::from_cents)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$10.99` / `-$5.50`.
///
/// ## Note
/// This is the format used in user-facing workflow messages (shipping
/// quotes). It is not localized.
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

// =============================================================================
// Unit Tests
// =============================================================================
