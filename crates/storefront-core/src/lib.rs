//! # storefront-core: Pure Business Rules for Storefront
//!
//! This crate holds every storefront rule that can be decided without
//! talking to the outside world: input validators, the coupon table and
//! discount math, the product factory, and a small LIFO [`Stack`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               storefront-workflows (async edge)                 │   │
//! │  │  currency · shipping · orders · sign-up · login · page views    │   │
//! │  │        talks to collaborators through injected traits           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │validation │  │ discount  │  │  product  │  │   stack   │  │   │
//! │  │   │ username  │  │  coupons  │  │  factory  │  │  Stack<T> │  │   │
//! │  │   │ password  │  │  SAVE10   │  │  publish  │  │  push/pop │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Coupon, Product, Order, ShippingQuote, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types and stable error codes
//! - [`validation`] - Primitive validators (price range, username, password, ...)
//! - [`discount`] - Static coupon table and discount calculation
//! - [`product`] - Product factory for untyped payloads
//! - [`stack`] - Generic last-in-first-out container
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output
//! 2. **Integer Money**: all monetary values are cents (i64)
//! 3. **Errors as Values**: business rule failures are `Err(ValidationError)`
//!    carrying a stable [`ErrorCode`], never a magic string
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::discount::calculate_discount;
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1050); // $10.50
//! let discounted = calculate_discount(price, "SAVE10").unwrap();
//! assert_eq!(discounted.cents(), 945);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod product;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorCode, StackError, UserInputRule, UserInputViolations, ValidationError};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest username accepted by [`validation::is_valid_username`].
pub const USERNAME_MIN_LEN: usize = 5;

/// Longest username accepted by [`validation::is_valid_username`].
pub const USERNAME_MAX_LEN: usize = 15;

/// Password length bounds for [`validation::is_strong_password`].
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 32;

/// Symbols that count towards the "at least one symbol" password rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?/";

/// Username length bounds for the sign-up form check
/// ([`validation::validate_user_input`]).
///
/// ## Business Reason
/// The sign-up form is looser than the profile username rule: it only
/// rejects obviously truncated or pasted-in values.
pub const SIGNUP_USERNAME_MIN_LEN: usize = 3;
pub const SIGNUP_USERNAME_MAX_LEN: usize = 20;

/// Age bounds for the sign-up form check.
pub const SIGNUP_MIN_AGE: i64 = 18;
pub const SIGNUP_MAX_AGE: i64 = 999;
