//! # Product Factory
//!
//! Validates and constructs [`Product`] records from untyped payloads.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_product(payload)                                                │
//! │                                                                         │
//! │  1. payload is a JSON object?      no ──► invalid_argument             │
//! │  2. name is a non-blank string?    no ──► invalid_name                 │
//! │  3. price is a positive number?    no ──► invalid_price                │
//! │                                                                         │
//! │  Only the FIRST violated rule is reported.                              │
//! │  All pass ──► ProductPublished { message: "... published ..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ErrorCode, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductPublished};
use crate::validation::{validate_price, validate_product_name, ValidationResult};

// =============================================================================
// Typed Input
// =============================================================================

/// A product as typed callers submit it.
///
/// Fields are optional because "missing" is a reportable violation, not a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
}

// =============================================================================
// Factory
// =============================================================================

/// Builds a product from an untyped JSON payload.
///
/// `price` is read as a decimal amount in major units (`10.5` = $10.50)
/// and rounded to the nearest cent. A positive price that rounds to zero
/// cents is rejected as below the smallest unit.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use storefront_core::error::ErrorCode;
/// use storefront_core::product::create_product;
///
/// let published = create_product(&json!({ "name": "daisies", "price": 4.5 })).unwrap();
/// assert!(published.message.contains("published"));
///
/// let err = create_product(&json!({ "name": "daisies", "price": 0 })).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::InvalidPrice);
/// ```
pub fn create_product(payload: &Value) -> ValidationResult<ProductPublished> {
    let fields = payload
        .as_object()
        .ok_or_else(|| ValidationError::InvalidArgument {
            reason: format!("product must be an object, got {}", json_kind(payload)),
        })?;

    let name = match fields.get("name").and_then(Value::as_str) {
        Some(name) => validate_product_name(name)?,
        None => {
            return Err(ValidationError::InvalidName {
                reason: "name is required".to_string(),
            })
        }
    };

    let amount = fields
        .get("price")
        .and_then(Value::as_f64)
        .ok_or_else(|| ValidationError::InvalidPrice {
            reason: "price must be a number".to_string(),
        })?;
    let price = Money::from_major_units(amount).ok_or_else(|| ValidationError::InvalidPrice {
        reason: format!("price {} is out of range", amount),
    })?;
    if amount > 0.0 && !price.is_positive() {
        return Err(ValidationError::InvalidPrice {
            reason: format!("price {} is below the smallest unit of $0.01", amount),
        });
    }
    validate_price(price)?;

    Ok(publish(Product { name, price }))
}

/// Builds a product from an already-typed draft, applying the same name and
/// price rules as [`create_product`].
pub fn create_product_from_draft(draft: &ProductDraft) -> ValidationResult<ProductPublished> {
    let name = validate_product_name(draft.name.as_deref().unwrap_or_default())?;

    let price = draft.price.ok_or_else(|| ValidationError::InvalidPrice {
        reason: "price is required".to_string(),
    })?;
    validate_price(price)?;

    Ok(publish(Product { name, price }))
}

fn publish(product: Product) -> ProductPublished {
    let message = format!("Product {} published successfully", product.name);
    ProductPublished { product, message }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Boundary Rendering
// =============================================================================

/// Wire rendering of a factory result.
///
/// ```text
/// Ok   → {"success":true,"message":"Product daisies published successfully"}
/// Err  → {"success":false,"error":{"code":"invalid_price","message":"..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOutcome(pub ValidationResult<ProductPublished>);

impl ProductOutcome {
    /// The error code, if the factory rejected the payload.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.0.as_ref().err().map(ValidationError::code)
    }
}

impl From<ValidationResult<ProductPublished>> for ProductOutcome {
    fn from(result: ValidationResult<ProductPublished>) -> Self {
        ProductOutcome(result)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: ErrorCode,
    message: &'a str,
}

impl Serialize for ProductOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProductOutcome", 2)?;
        match &self.0 {
            Ok(published) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("message", &published.message)?;
            }
            Err(err) => {
                let message = err.to_string();
                state.serialize_field("success", &false)?;
                state.serialize_field(
                    "error",
                    &ErrorBody {
                        code: err.code(),
                        message: &message,
                    },
                )?;
            }
        }
        state.end()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code_of(payload: Value) -> ErrorCode {
        create_product(&payload).unwrap_err().code()
    }

    #[test]
    fn test_create_product_success() {
        let published = create_product(&json!({ "name": "daisies", "price": 10.5 })).unwrap();

        assert_eq!(published.product.name, "daisies");
        assert_eq!(published.product.price, Money::from_cents(1050));
        assert!(published.message.contains("published"));
    }

    #[test]
    fn test_create_product_not_an_object() {
        assert_eq!(code_of(json!(null)), ErrorCode::InvalidArgument);
        assert_eq!(code_of(json!("daisies")), ErrorCode::InvalidArgument);
        assert_eq!(code_of(json!([1, 2])), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_create_product_invalid_name() {
        assert_eq!(code_of(json!({ "price": 1 })), ErrorCode::InvalidName);
        assert_eq!(code_of(json!({ "name": "", "price": 1 })), ErrorCode::InvalidName);
        assert_eq!(code_of(json!({ "name": 42, "price": 1 })), ErrorCode::InvalidName);
    }

    #[test]
    fn test_create_product_invalid_price() {
        assert_eq!(code_of(json!({ "name": "daisies", "price": 0 })), ErrorCode::InvalidPrice);
        assert_eq!(code_of(json!({ "name": "daisies", "price": -1 })), ErrorCode::InvalidPrice);
        assert_eq!(code_of(json!({ "name": "daisies" })), ErrorCode::InvalidPrice);
        assert_eq!(
            code_of(json!({ "name": "daisies", "price": "1" })),
            ErrorCode::InvalidPrice
        );
    }

    #[test]
    fn test_create_product_sub_cent_price() {
        let err = create_product(&json!({ "name": "seeds", "price": 0.004 })).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidPrice);
        let message = err.to_string();
        assert!(message.contains("0.004"), "{message}");
        assert!(message.contains("smallest unit"), "{message}");

        // Half a cent rounds up to one cent and is accepted
        let published = create_product(&json!({ "name": "seeds", "price": 0.005 })).unwrap();
        assert_eq!(published.product.price, Money::from_cents(1));
    }

    #[test]
    fn test_create_product_reports_first_violation_only() {
        // Both name and price are wrong: name is checked first
        assert_eq!(code_of(json!({ "name": "", "price": 0 })), ErrorCode::InvalidName);
    }

    #[test]
    fn test_create_product_from_draft() {
        let draft = ProductDraft {
            name: Some("roses".into()),
            price: Some(Money::from_cents(1299)),
        };
        assert!(create_product_from_draft(&draft).is_ok());

        let draft = ProductDraft {
            name: Some("roses".into()),
            price: None,
        };
        assert_eq!(
            create_product_from_draft(&draft).unwrap_err().code(),
            ErrorCode::InvalidPrice
        );

        assert_eq!(
            create_product_from_draft(&ProductDraft::default()).unwrap_err().code(),
            ErrorCode::InvalidName
        );
    }

    #[test]
    fn test_product_outcome_wire_format() {
        let outcome: ProductOutcome = create_product(&json!({ "name": "daisies", "price": 0 })).into();
        assert_eq!(outcome.error_code(), Some(ErrorCode::InvalidPrice));

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"]["code"], json!("invalid_price"));

        let outcome: ProductOutcome = create_product(&json!({ "name": "daisies", "price": 2 })).into();
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["success"], json!(true));
        assert!(value["message"].as_str().unwrap().contains("published"));
    }
}
