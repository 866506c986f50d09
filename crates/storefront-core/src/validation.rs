//! # Validation Module
//!
//! Predicates and classifiers over primitive inputs.
//!
//! ## Validator Catalogue
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Function                Input              Outcome                     │
//! │  ──────────────────────  ─────────────────  ──────────────────────────  │
//! │  is_price_in_range       Money ×3           bool (inclusive bounds)     │
//! │  is_valid_username       Option<&str>       Ok(bool) / invalid_username │
//! │  is_strong_password      &str               bool                        │
//! │  can_drive               age, country       Ok(bool) / invalid_country  │
//! │  validate_user_input     Option ×2          Ok(msg) / every violation   │
//! │  validate_product_name   &str               Ok(trimmed) / invalid_name  │
//! │  validate_price          Money              Ok / invalid_price          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Option` parameters stand for inputs that arrive untyped: `None` means
//! the caller did not supply a value of the right type at all, which is a
//! validation failure rather than a `false`.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{is_valid_username, validate_user_input};
//!
//! assert!(is_valid_username(Some("mosh_h")).unwrap());
//! assert!(is_valid_username(None).is_err());
//!
//! let err = validate_user_input(Some("un"), Some(17)).unwrap_err();
//! assert_eq!(err.to_string(), "invalid username, invalid age");
//! ```

use crate::error::{UserInputRule, UserInputViolations, ValidationError};
use crate::money::Money;
use crate::types::CountryCode;
use crate::{
    PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_SYMBOLS, SIGNUP_MAX_AGE, SIGNUP_MIN_AGE,
    SIGNUP_USERNAME_MAX_LEN, SIGNUP_USERNAME_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Message returned when the sign-up form check passes.
pub const USER_INPUT_OK: &str = "Validation successful";

// =============================================================================
// Price Validators
// =============================================================================

/// Returns true iff `min <= price <= max`.
///
/// Both bounds are inclusive and the comparison is exact (integer cents).
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::is_price_in_range;
///
/// let (min, max) = (Money::from_cents(0), Money::from_cents(10000));
/// assert!(is_price_in_range(Money::from_cents(0), min, max));
/// assert!(is_price_in_range(Money::from_cents(10000), min, max));
/// assert!(!is_price_in_range(Money::from_cents(10001), min, max));
/// ```
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    price >= min && price <= max
}

/// Validates a product or order price.
///
/// ## Rules
/// - Must be positive (> 0). Free items are not sold through the factory.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::InvalidPrice {
            reason: format!("price must be a positive amount, got {}", price),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Checks a profile username against the fixed length bounds.
///
/// ## Rules
/// - `None` (no string supplied) → `Err(InvalidUsername)`
/// - Otherwise `Ok(true)` iff the character count is within
///   `USERNAME_MIN_LEN..=USERNAME_MAX_LEN` (5..=15)
pub fn is_valid_username(username: Option<&str>) -> ValidationResult<bool> {
    let username = username.ok_or_else(|| ValidationError::InvalidUsername {
        reason: "username must be a string".to_string(),
    })?;

    let len = username.chars().count();
    Ok((USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len))
}

/// Returns true iff the password is considered strong.
///
/// ## Rules
/// - Length (in characters) within `PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN` (8..=32)
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one ASCII digit
/// - At least one symbol from [`PASSWORD_SYMBOLS`]
///
/// ## Example
/// ```rust
/// use storefront_core::validation::is_strong_password;
///
/// assert!(is_strong_password("Sup3r-secret"));
/// assert!(!is_strong_password("password"));
/// ```
pub fn is_strong_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    has_upper && has_lower && has_digit && has_symbol
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            reason: "name is required".to_string(),
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Classifiers
// =============================================================================

/// Decides whether someone of `age` may drive in `country_code`.
///
/// ## Rules
/// - Unrecognized country → `Err(InvalidCountry)`
/// - Otherwise `Ok(age >= minimum driving age)`: US 16, UK 17
///
/// ## Example
/// ```rust
/// use storefront_core::validation::can_drive;
///
/// assert!(can_drive(16, "US").unwrap());
/// assert!(!can_drive(16, "UK").unwrap());
/// assert!(can_drive(20, "FR").is_err());
/// ```
pub fn can_drive(age: u32, country_code: &str) -> ValidationResult<bool> {
    let country: CountryCode = country_code.parse()?;
    Ok(age >= country.min_driving_age())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Checks a sign-up form submission and reports every violated rule.
///
/// ## Rules
/// - Username present with `SIGNUP_USERNAME_MIN_LEN..=SIGNUP_USERNAME_MAX_LEN`
///   (3..=20) characters
/// - Age present and within `SIGNUP_MIN_AGE..=SIGNUP_MAX_AGE` (18..=999)
///
/// ## Flow
/// ```text
/// validate_user_input(username, age)
///      │
///      ├── username rule ──► violated? push InvalidUsername
///      ├── age rule ───────► violated? push InvalidAge
///      │
///      ├── none violated ──► Ok("Validation successful")
///      └── otherwise ──────► Err(UserInputViolations{..})
/// ```
pub fn validate_user_input(
    username: Option<&str>,
    age: Option<i64>,
) -> Result<&'static str, UserInputViolations> {
    let mut violated = Vec::new();

    let username_ok = username
        .map(|name| name.chars().count())
        .is_some_and(|len| (SIGNUP_USERNAME_MIN_LEN..=SIGNUP_USERNAME_MAX_LEN).contains(&len));
    if !username_ok {
        violated.push(UserInputRule::InvalidUsername);
    }

    let age_ok = age.is_some_and(|age| (SIGNUP_MIN_AGE..=SIGNUP_MAX_AGE).contains(&age));
    if !age_ok {
        violated.push(UserInputRule::InvalidAge);
    }

    match UserInputViolations::from_rules(violated) {
        Some(violations) => Err(violations),
        None => Ok(USER_INPUT_OK),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
