//! # Discount Engine
//!
//! The static coupon table and the price calculation that applies it.
//!
//! ## Lookup Flow
//! ```text
//! calculate_discount(price, code)
//!      │
//!      ├── price <= 0? ─────────► Err(InvalidPrice)
//!      ├── code blank? ─────────► Err(InvalidCouponCode)
//!      │
//!      ├── find_coupon(code) ──► Some(coupon) ──► price × (1 - discount)
//!      └──────────────────────► None ──────────► price (unchanged)
//! ```
//!
//! Unknown codes are a no-op, not an error: a shopper typing a stale code
//! simply pays full price.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Coupon, DiscountRate};
use crate::validation::{validate_price, ValidationResult};

// =============================================================================
// Coupon Table
// =============================================================================

static COUPONS: [Coupon; 3] = [
    Coupon {
        code: "SAVE10",
        discount: DiscountRate::from_bps(1000),
    },
    Coupon {
        code: "SAVE20",
        discount: DiscountRate::from_bps(2000),
    },
    Coupon {
        code: "DISCOUNT50OFF",
        discount: DiscountRate::from_bps(5000),
    },
];

/// Returns the coupon table.
///
/// Never empty. Every code is non-empty and unique; every discount is
/// within `[0, 1]`.
pub fn get_coupons() -> &'static [Coupon] {
    &COUPONS
}

/// Looks up a coupon by exact, case-sensitive code.
pub fn find_coupon(code: &str) -> Option<&'static Coupon> {
    COUPONS.iter().find(|coupon| coupon.code == code)
}

// =============================================================================
// Discount Calculation
// =============================================================================

/// Applies the coupon named by `code` to `price`.
///
/// ## Rules
/// - `price` must be positive, otherwise `Err(InvalidPrice)`
/// - `code` must not be blank, otherwise `Err(InvalidCouponCode)`
/// - Known code: `price × (1 - discount)`, rounded to the cent
/// - Unknown code: `price` unchanged
///
/// ## Example
/// ```rust
/// use storefront_core::discount::calculate_discount;
/// use storefront_core::money::Money;
///
/// let price = Money::from_cents(1050);
/// assert_eq!(calculate_discount(price, "SAVE10").unwrap().cents(), 945);
/// assert_eq!(calculate_discount(price, "SAVE20").unwrap().cents(), 840);
/// assert_eq!(calculate_discount(price, "SAVE100").unwrap(), price);
/// ```
pub fn calculate_discount(price: Money, code: &str) -> ValidationResult<Money> {
    validate_price(price)?;

    if code.trim().is_empty() {
        return Err(ValidationError::InvalidCouponCode {
            reason: "coupon code is required".to_string(),
        });
    }

    Ok(match find_coupon(code) {
        Some(coupon) => price.apply_discount(coupon.discount),
        None => price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_get_coupons_not_empty() {
        assert!(!get_coupons().is_empty());
    }

    #[test]
    fn test_get_coupons_valid_entries() {
        for coupon in get_coupons() {
            assert!(!coupon.code.is_empty());
            assert!(coupon.discount.bps() <= DiscountRate::MAX_BPS, "{}", coupon.code);
        }
    }

    #[test]
    fn test_get_coupons_unique_codes() {
        let codes: HashSet<_> = get_coupons().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), get_coupons().len());
    }

    #[test]
    fn test_calculate_discount_known_codes() {
        let price = Money::from_cents(1050);
        assert_eq!(calculate_discount(price, "SAVE10").unwrap(), Money::from_cents(945));
        assert_eq!(calculate_discount(price, "SAVE20").unwrap(), Money::from_cents(840));
        assert_eq!(
            calculate_discount(price, "DISCOUNT50OFF").unwrap(),
            Money::from_cents(525)
        );
    }

    #[test]
    fn test_calculate_discount_unknown_code_is_noop() {
        let price = Money::from_cents(1050);
        assert_eq!(calculate_discount(price, "SAVE100").unwrap(), price);
        // Lookup is case-sensitive
        assert_eq!(calculate_discount(price, "save10").unwrap(), price);
    }

    #[test]
    fn test_calculate_discount_rejects_non_positive_price() {
        for cents in [0, -1050] {
            let err = calculate_discount(Money::from_cents(cents), "SAVE10").unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidPrice);
            assert!(err.to_string().to_lowercase().contains("invalid"));
        }
    }

    #[test]
    fn test_calculate_discount_rejects_blank_code() {
        let err = calculate_discount(Money::from_cents(1050), "  ").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCouponCode);
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    proptest! {
        /// Property: known codes take `price × discount` off, the discount
        /// rounded half-up to the cent
        #[test]
        fn prop_known_code_applies_discount(cents in 1i64..100_000_000, idx in 0usize..3) {
            let coupon = &get_coupons()[idx];
            let bps = coupon.discount.bps() as i64;
            let expected = cents - (cents * bps + 5000) / 10000;

            let discounted = calculate_discount(Money::from_cents(cents), coupon.code).unwrap();
            prop_assert_eq!(discounted.cents(), expected);
            prop_assert!(discounted.cents() <= cents);
        }

        /// Property: the three published coupons take 10%, 20% and 50% off
        #[test]
        fn prop_published_rates(dollars in 1i64..1_000_000) {
            let cents = dollars * 100;
            let price = Money::from_cents(cents);
            prop_assert_eq!(calculate_discount(price, "SAVE10").unwrap().cents(), cents * 9 / 10);
            prop_assert_eq!(calculate_discount(price, "SAVE20").unwrap().cents(), cents * 8 / 10);
            prop_assert_eq!(calculate_discount(price, "DISCOUNT50OFF").unwrap().cents(), cents / 2);
        }

        /// Property: unknown codes leave the price untouched
        #[test]
        fn prop_unknown_code_is_identity(cents in 1i64..100_000_000, code in "[a-z]{1,12}") {
            let price = Money::from_cents(cents);
            prop_assert_eq!(calculate_discount(price, &code).unwrap(), price);
        }
    }
}
