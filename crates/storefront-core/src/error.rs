//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── ValidationError      - One violated rule, with an ErrorCode       │
//! │  ├── UserInputViolations  - Every violated sign-up rule at once        │
//! │  └── StackError           - Pop/peek on an empty Stack                 │
//! │                                                                         │
//! │  storefront-workflows errors (separate crate)                          │
//! │  └── WorkflowError        - Validation + collaborator failures         │
//! │                                                                         │
//! │  Flow: ValidationError → WorkflowError → caller                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every validation failure maps to exactly one [`ErrorCode`] so callers
//!    branch on the code, never on message text
//! 3. Rendered messages of validation failures always contain "invalid"

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Error Codes
// =============================================================================

/// Stable, machine-readable identifier of a violated rule.
///
/// Serialized as snake_case (`"invalid_price"`), which is also what
/// [`ErrorCode::as_str`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The argument as a whole has the wrong shape (e.g. not an object).
    InvalidArgument,
    /// Product name missing or blank.
    InvalidName,
    /// Price missing, not a number, or not positive.
    InvalidPrice,
    /// Username missing or outside the allowed length.
    InvalidUsername,
    /// Age missing or outside the allowed range.
    InvalidAge,
    /// Country code not recognized.
    InvalidCountry,
    /// Coupon code missing or blank.
    InvalidCouponCode,
    /// Pop/peek on an empty stack.
    EmptyStack,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "invalid_argument",
            ErrorCode::InvalidName => "invalid_name",
            ErrorCode::InvalidPrice => "invalid_price",
            ErrorCode::InvalidUsername => "invalid_username",
            ErrorCode::InvalidAge => "invalid_age",
            ErrorCode::InvalidCountry => "invalid_country",
            ErrorCode::InvalidCouponCode => "invalid_coupon_code",
            ErrorCode::EmptyStack => "empty_stack",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated business rule.
///
/// Returned by validators, the discount engine and the product factory.
/// Checks that run in a fixed order stop at the first violation and report
/// it through one of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input does not have the expected overall shape.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Product name is missing or blank.
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Price is missing, not numeric, or not positive.
    #[error("Invalid price: {reason}")]
    InvalidPrice { reason: String },

    /// Username is missing or not a string.
    #[error("Invalid username: {reason}")]
    InvalidUsername { reason: String },

    /// Country code is not one we know a driving age for.
    #[error("Invalid country code '{code}'")]
    InvalidCountry { code: String },

    /// Coupon code is missing or blank.
    #[error("Invalid coupon code: {reason}")]
    InvalidCouponCode { reason: String },
}

impl ValidationError {
    /// Returns the stable code for this violation.
    pub const fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            ValidationError::InvalidName { .. } => ErrorCode::InvalidName,
            ValidationError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            ValidationError::InvalidUsername { .. } => ErrorCode::InvalidUsername,
            ValidationError::InvalidCountry { .. } => ErrorCode::InvalidCountry,
            ValidationError::InvalidCouponCode { .. } => ErrorCode::InvalidCouponCode,
        }
    }
}

// =============================================================================
// User Input Violations
// =============================================================================

/// One rule of the sign-up form check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserInputRule {
    /// Username missing or outside the form's length bounds.
    InvalidUsername,
    /// Age missing or outside the form's range.
    InvalidAge,
}

impl UserInputRule {
    /// The matching [`ErrorCode`].
    pub const fn code(&self) -> ErrorCode {
        match self {
            UserInputRule::InvalidUsername => ErrorCode::InvalidUsername,
            UserInputRule::InvalidAge => ErrorCode::InvalidAge,
        }
    }

    /// Human-readable rendering used at the boundary.
    pub const fn message(&self) -> &'static str {
        match self {
            UserInputRule::InvalidUsername => "invalid username",
            UserInputRule::InvalidAge => "invalid age",
        }
    }
}

/// Every rule violated by one sign-up form submission.
///
/// Never empty: construct through [`UserInputViolations::from_rules`], which
/// returns `None` when nothing was violated. Rules are kept as tags and only
/// turned into text by `Display`:
///
/// ```text
/// {InvalidUsername, InvalidAge}  ──Display──►  "invalid username, invalid age"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInputViolations {
    rules: BTreeSet<UserInputRule>,
}

impl UserInputViolations {
    /// Collects violated rules; `None` if there are none.
    pub fn from_rules(rules: impl IntoIterator<Item = UserInputRule>) -> Option<Self> {
        let rules: BTreeSet<_> = rules.into_iter().collect();
        if rules.is_empty() {
            None
        } else {
            Some(UserInputViolations { rules })
        }
    }

    /// Returns true if `rule` was violated.
    pub fn contains(&self, rule: UserInputRule) -> bool {
        self.rules.contains(&rule)
    }

    /// Violated rules in a stable order.
    pub fn rules(&self) -> impl Iterator<Item = UserInputRule> + '_ {
        self.rules.iter().copied()
    }

    /// Error codes of the violated rules.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.rules().map(|rule| rule.code()).collect()
    }
}

impl fmt::Display for UserInputViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.rules().map(|rule| rule.message()).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for UserInputViolations {}

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`crate::stack::Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called while the stack held no elements.
    #[error("Cannot {operation} an empty stack")]
    Empty { operation: &'static str },
}

impl StackError {
    /// Returns the stable code for this error.
    pub const fn code(&self) -> ErrorCode {
        match self {
            StackError::Empty { .. } => ErrorCode::EmptyStack,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
