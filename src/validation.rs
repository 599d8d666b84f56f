//! # Product Validation
//!
//! Decides whether an arbitrary JSON value is an acceptable product payload.
//!
//! Rules are evaluated in a fixed order and the *first* violation is reported, so the
//! same input always yields the same message:
//!
//! 1. the payload is an object
//! 2. `name` is present, is a string, is not empty, and has 3 to 20 characters
//! 3. `price` is present, is a JSON number, and lies within the safe-integer range
//! 4. no other keys are present (the first one in document order is reported)
//!
//! Lengths are counted in UTF-16 code units.
//!
//! Messages use the `"field" ...` wording clients of this API already parse.
//! Validation never mutates its input and never panics: a malformed payload is the
//! expected failure case, reported as a [`ValidationError`].

use crate::model::{ProductChanges, ProductCreate};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Inclusive bounds on the length of a product name, in UTF-16 code units.
pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 20;

/// Largest accepted price magnitude, `2^53 - 1`.
pub const MAX_SAFE_NUMBER: f64 = 9_007_199_254_740_991.0;

const KNOWN_FIELDS: [&str; 2] = ["name", "price"];

/// The first rule a candidate payload violated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"value\" must be of type object")]
    NotAnObject,

    #[error("\"{0}\" is required")]
    Required(&'static str),

    #[error("\"{0}\" must be a string")]
    NotAString(&'static str),

    #[error("\"{0}\" is not allowed to be empty")]
    Empty(&'static str),

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: &'static str, min: usize },

    #[error("\"{field}\" length must be less than or equal to {max} characters long")]
    TooLong { field: &'static str, max: usize },

    #[error("\"{0}\" must be a number")]
    NotANumber(&'static str),

    #[error("\"{0}\" must be a safe number")]
    UnsafeNumber(&'static str),

    #[error("\"{0}\" is not allowed")]
    UnknownField(String),
}

/// Validates a full product payload (create and full update).
pub fn validate_product(candidate: &Value) -> Result<ProductCreate, ValidationError> {
    let fields = as_object(candidate)?;

    let name = check_name(fields.get("name").ok_or(ValidationError::Required("name"))?)?;
    let price = check_price(fields.get("price").ok_or(ValidationError::Required("price"))?)?;
    reject_unknown(fields)?;

    Ok(ProductCreate { name, price })
}

/// Validates a partial update: only the fields present are checked, with the same rules
/// as [`validate_product`]. Unknown keys, `id` included, are rejected.
pub fn validate_patch(candidate: &Value) -> Result<ProductChanges, ValidationError> {
    let fields = as_object(candidate)?;

    let name = fields.get("name").map(check_name).transpose()?;
    let price = fields.get("price").map(check_price).transpose()?;
    reject_unknown(fields)?;

    Ok(ProductChanges { name, price })
}

fn as_object(candidate: &Value) -> Result<&Map<String, Value>, ValidationError> {
    candidate.as_object().ok_or(ValidationError::NotAnObject)
}

fn check_name(value: &Value) -> Result<String, ValidationError> {
    let name = value.as_str().ok_or(ValidationError::NotAString("name"))?;

    let len = name.encode_utf16().count();
    if len == 0 {
        return Err(ValidationError::Empty("name"));
    }
    if len < NAME_MIN_LEN {
        return Err(ValidationError::TooShort {
            field: "name",
            min: NAME_MIN_LEN,
        });
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: NAME_MAX_LEN,
        });
    }

    Ok(name.to_string())
}

fn check_price(value: &Value) -> Result<Number, ValidationError> {
    match value {
        Value::Number(price) => match price.as_f64() {
            Some(n) if n.abs() <= MAX_SAFE_NUMBER => Ok(price.clone()),
            _ => Err(ValidationError::UnsafeNumber("price")),
        },
        _ => Err(ValidationError::NotANumber("price")),
    }
}

fn reject_unknown(fields: &Map<String, Value>) -> Result<(), ValidationError> {
    match fields
        .keys()
        .find(|key| !KNOWN_FIELDS.contains(&key.as_str()))
    {
        Some(key) => Err(ValidationError::UnknownField(key.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(candidate: Value) -> String {
        validate_product(&candidate).unwrap_err().to_string()
    }

    #[test]
    fn test_accepts_well_formed_payload() {
        let payload = validate_product(&json!({ "name": "Apple", "price": 10 })).unwrap();
        assert_eq!(payload.name, "Apple");
        assert_eq!(payload.price, Number::from(10));
    }

    #[test]
    fn test_name_bounds_are_inclusive() {
        assert!(validate_product(&json!({ "name": "abc", "price": 1 })).is_ok());
        assert!(validate_product(&json!({ "name": "a".repeat(20), "price": 1 })).is_ok());
        assert_eq!(
            message(json!({ "name": "a".repeat(21), "price": 1 })),
            "\"name\" length must be less than or equal to 20 characters long"
        );
    }

    #[test]
    fn test_short_name_reported_before_price() {
        assert_eq!(
            message(json!({ "name": "ab", "price": 1 })),
            "\"name\" length must be at least 3 characters long"
        );
        // Name is checked first even when price is also broken.
        assert_eq!(
            message(json!({ "name": "ok", "price": "five" })),
            "\"name\" length must be at least 3 characters long"
        );
    }

    #[test]
    fn test_price_must_be_a_number() {
        assert_eq!(
            message(json!({ "name": "validname", "price": "x" })),
            "\"price\" must be a number"
        );
        assert_eq!(
            message(json!({ "name": "validname", "price": "10" })),
            "\"price\" must be a number"
        );
        assert_eq!(message(json!({ "name": "validname" })), "\"price\" is required");
    }

    #[test]
    fn test_name_presence_and_type() {
        assert_eq!(message(json!({ "price": 1 })), "\"name\" is required");
        assert_eq!(message(json!({ "name": 12, "price": 1 })), "\"name\" must be a string");
        assert_eq!(message(json!({ "name": null, "price": 1 })), "\"name\" must be a string");
        assert_eq!(
            message(json!({ "name": "", "price": 1 })),
            "\"name\" is not allowed to be empty"
        );
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 3 units, 6 bytes.
        assert!(validate_product(&json!({ "name": "äöü", "price": 1 })).is_ok());
        // One astral character is two units.
        assert!(validate_product(&json!({ "name": "😀a", "price": 1 })).is_ok());
        assert!(validate_product(&json!({ "name": "😀".repeat(10), "price": 1 })).is_ok());
        assert_eq!(
            message(json!({ "name": "😀".repeat(10) + "a", "price": 1 })),
            "\"name\" length must be less than or equal to 20 characters long"
        );
    }

    #[test]
    fn test_price_must_be_a_safe_number() {
        assert!(validate_product(&json!({ "name": "Apple", "price": 9_007_199_254_740_991u64 })).is_ok());
        assert!(validate_product(&json!({ "name": "Apple", "price": -9_007_199_254_740_991i64 })).is_ok());
        assert!(validate_product(&json!({ "name": "Apple", "price": 0.5 })).is_ok());
        assert_eq!(
            message(json!({ "name": "Apple", "price": u64::MAX })),
            "\"price\" must be a safe number"
        );
        assert_eq!(
            message(json!({ "name": "Apple", "price": 1e300 })),
            "\"price\" must be a safe number"
        );
        assert_eq!(
            validate_patch(&json!({ "price": 9_007_199_254_740_992u64 })).unwrap_err(),
            ValidationError::UnsafeNumber("price")
        );
    }

    #[test]
    fn test_rejects_non_objects_and_unknown_keys() {
        assert_eq!(message(json!([1, 2])), "\"value\" must be of type object");
        assert_eq!(message(Value::Null), "\"value\" must be of type object");
        assert_eq!(
            message(json!({ "name": "Apple", "price": 1, "color": "red" })),
            "\"color\" is not allowed"
        );
    }

    #[test]
    fn test_first_unknown_key_in_document_order_is_reported() {
        let candidate: Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":2,"name":"Apple","price":1}"#).unwrap();
        assert_eq!(message(candidate), "\"zeta\" is not allowed");
    }

    #[test]
    fn test_validation_does_not_touch_input() {
        let candidate = json!({ "name": "ab", "price": 1 });
        let before = candidate.clone();
        let _ = validate_product(&candidate);
        assert_eq!(candidate, before);
    }

    #[test]
    fn test_patch_checks_only_present_fields() {
        let changes = validate_patch(&json!({ "price": 20 })).unwrap();
        assert_eq!(
            changes,
            ProductChanges {
                name: None,
                price: Some(Number::from(20)),
            }
        );

        assert_eq!(validate_patch(&json!({})).unwrap(), ProductChanges::default());
        assert_eq!(
            validate_patch(&json!({ "price": "x" })).unwrap_err(),
            ValidationError::NotANumber("price")
        );
        assert_eq!(
            validate_patch(&json!({ "name": "ab" })).unwrap_err(),
            ValidationError::TooShort {
                field: "name",
                min: NAME_MIN_LEN
            }
        );
        assert_eq!(
            validate_patch(&json!({ "id": "99" })).unwrap_err(),
            ValidationError::UnknownField("id".to_string())
        );
    }
}
