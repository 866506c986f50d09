//! # Domain Types
//!
//! Core domain types used throughout Storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Coupon       │   │    Product      │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  name           │   │  total_amount   │       │
//! │  │  discount (bps) │   │  price (Money)  │   │  → OrderOutcome │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │  ExchangeRate   │   │  CountryCode    │       │
//! │  │  1000 = 10%     │   │  ppm            │   │  US (16)        │       │
//! │  │                 │   │  1_500_000=1.5  │   │  UK (17)        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ShippingQuote  │   │  ChargeResult   │   │   CreditCard    │       │
//! │  │  cost, days     │   │  success/failed │   │  masked Debug   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10%.
/// A coupon discount is always within `[0, 10000]` bps, i.e. `[0, 1]`.
/// Deserialization rejects anything above 100% instead of clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100% off, in basis points.
    pub const MAX_BPS: u32 = 10000;

    /// Creates a discount rate from basis points, clamped to 100%.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > Self::MAX_BPS {
            DiscountRate(Self::MAX_BPS)
        } else {
            DiscountRate(bps)
        }
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        if bps > Self::MAX_BPS {
            return Err(ValidationError::InvalidArgument {
                reason: format!(
                    "discount rate must be at most {} bps, got {}",
                    Self::MAX_BPS,
                    bps
                ),
            });
        }
        Ok(DiscountRate(bps))
    }
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// Currency exchange rate in parts-per-million.
///
/// `1_000_000` is parity, `1_500_000` means one unit buys 1.5 target units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(u64);

impl ExchangeRate {
    /// Creates a rate from parts-per-million.
    #[inline]
    pub const fn from_ppm(ppm: u64) -> Self {
        ExchangeRate(ppm)
    }

    /// Returns the rate in parts-per-million.
    #[inline]
    pub const fn ppm(&self) -> u64 {
        self.0
    }

    /// Returns the rate as a decimal multiplier (for display only).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A code/discount pair usable to reduce a price.
///
/// Coupons live in a static table (see [`crate::discount::get_coupons`]) for
/// the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    /// Case-sensitive, non-empty, unique code.
    pub code: &'static str,
    /// Discount applied to the full price.
    pub discount: DiscountRate,
}

// =============================================================================
// Product
// =============================================================================

/// A product that passed the product factory's checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name, never blank.
    pub name: String,
    /// Unit price, always positive.
    pub price: Money,
}

/// Successful result of the product factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProductPublished {
    pub product: Product,
    /// Confirmation text; always mentions "published".
    pub message: String,
}

// =============================================================================
// Country Code
// =============================================================================

/// Countries we know a minimum driving age for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    /// United States, minimum driving age 16.
    Us,
    /// United Kingdom, minimum driving age 17.
    Uk,
}

impl CountryCode {
    /// Minimum age (inclusive) at which driving is allowed.
    pub const fn min_driving_age(&self) -> u32 {
        match self {
            CountryCode::Us => 16,
            CountryCode::Uk => 17,
        }
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "US" => Ok(CountryCode::Us),
            "UK" => Ok(CountryCode::Uk),
            _ => Err(ValidationError::InvalidCountry {
                code: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A shipping quote for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingQuote {
    pub cost: Money,
    pub estimated_days: u32,
}

// =============================================================================
// Orders & Payments
// =============================================================================

/// An order ready to be paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub total_amount: Money,
}

/// A payment card as handed to the payment gateway.
///
/// `Debug` masks everything except the last four digits so cards never end
/// up in logs verbatim.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreditCard {
    pub number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        CreditCard {
            number: number.into(),
        }
    }

    /// Returns `**** 1234` style rendering.
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {}", tail)
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("number", &self.masked())
            .finish()
    }
}

/// Status reported by the payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    Success,
    Failed,
}

/// What the payment gateway answered for one charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChargeResult {
    pub status: ChargeStatus,
}

impl ChargeResult {
    pub const fn success() -> Self {
        ChargeResult {
            status: ChargeStatus::Success,
        }
    }

    pub const fn failed() -> Self {
        ChargeResult {
            status: ChargeStatus::Failed,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == ChargeStatus::Success
    }
}

/// Why an order was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFailure {
    /// The payment gateway did not report a successful charge.
    PaymentError,
}

impl OrderFailure {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderFailure::PaymentError => "payment_error",
        }
    }
}

impl fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of submitting an order.
///
/// ## Wire Format
/// ```text
/// Accepted                     → {"success":true}
/// Rejected(PaymentError)       → {"success":false,"error":"payment_error"}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Accepted,
    Rejected(OrderFailure),
}

impl OrderOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, OrderOutcome::Accepted)
    }

    /// The failure, if the order was rejected.
    pub fn error(&self) -> Option<OrderFailure> {
        match self {
            OrderOutcome::Accepted => None,
            OrderOutcome::Rejected(failure) => Some(*failure),
        }
    }
}

impl Serialize for OrderOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OrderOutcome::Accepted => {
                let mut state = serializer.serialize_struct("OrderOutcome", 1)?;
                state.serialize_field("success", &true)?;
                state.end()
            }
            OrderOutcome::Rejected(failure) => {
                let mut state = serializer.serialize_struct("OrderOutcome", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", failure.as_str())?;
                state.end()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_clamps() {
        assert_eq!(DiscountRate::from_bps(20000).bps(), DiscountRate::MAX_BPS);
        assert_eq!(DiscountRate::from_bps(1000).bps(), 1000);
    }

    #[test]
    fn test_discount_rate_deserialize_rejects_over_full() {
        let rate: DiscountRate = serde_json::from_str("1000").unwrap();
        assert_eq!(rate, DiscountRate::from_bps(1000));
        assert_eq!(serde_json::to_string(&rate).unwrap(), "1000");

        let full: DiscountRate = serde_json::from_str("10000").unwrap();
        let price = Money::from_cents(1050);
        assert_eq!(price.apply_discount(full), Money::from_cents(0));

        let err = serde_json::from_str::<DiscountRate>("20000").unwrap_err();
        assert!(err.to_string().contains("at most 10000 bps"), "{err}");
    }

    #[test]
    fn test_country_code_parsing() {
        assert_eq!("US".parse::<CountryCode>().unwrap(), CountryCode::Us);
        assert_eq!(" uk ".parse::<CountryCode>().unwrap(), CountryCode::Uk);
        let err = "FR".parse::<CountryCode>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCountry { .. }));
    }

    #[test]
    fn test_country_min_driving_age() {
        assert_eq!(CountryCode::Us.min_driving_age(), 16);
        assert_eq!(CountryCode::Uk.min_driving_age(), 17);
    }

    #[test]
    fn test_credit_card_debug_is_masked() {
        let card = CreditCard::new("4242 4242 4242 1234");
        let debug = format!("{:?}", card);
        assert!(debug.contains("**** 1234"));
        assert!(!debug.contains("4242"));

        assert_eq!(CreditCard::new("12").masked(), "**** 12");
    }

    #[test]
    fn test_order_outcome_wire_format() {
        let accepted = serde_json::to_value(OrderOutcome::Accepted).unwrap();
        assert_eq!(accepted, serde_json::json!({ "success": true }));

        let rejected =
            serde_json::to_value(OrderOutcome::Rejected(OrderFailure::PaymentError)).unwrap();
        assert_eq!(
            rejected,
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }

    #[test]
    fn test_charge_status_wire_format() {
        let json = serde_json::to_string(&ChargeResult::success()).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
        let parsed: ChargeResult = serde_json::from_str(r#"{"status":"failed"}"#).unwrap();
        assert!(!parsed.is_success());
    }
}
