//! Parameter validation performed before any request leaves the client.
//!
//! Every operation declares a [`Schema`]: the keys it requires and the value
//! kinds it accepts per key. Presence and type checks are separate: a key that
//! is missing is never type-checked, and type checking never implies presence.
//!
//! ```
//! use shipper::validator::{require_validation, ValueKind};
//! use shipper::{params, json};
//!
//! let p = params(json!({"l": 10.5, "w": 2}));
//! let checked = require_validation(&p, &["l", "w"])?
//!     .type_validation(&[("l", &[ValueKind::Integer, ValueKind::Double])])?;
//! assert_eq!(checked, &p);
//! # Ok::<(), shipper::ShipperError>(())
//! ```

use crate::error::{Result, ShipperError};
use crate::response::Param;
use serde_json::Value;
use std::fmt;

/// Dynamic type of a parameter value, as the platform distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Whole number
    Integer,
    /// Floating-point number; `10.0` counts as a double, not an integer
    Double,
    /// Text
    String,
    /// `true` or `false`
    Boolean,
    /// Sequence or mapping
    Array,
    /// Explicit `null`
    Null,
}

impl ValueKind {
    /// Classify a parameter value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_f64() => ValueKind::Double,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) | Value::Object(_) => ValueKind::Array,
        }
    }

    /// Type token used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Null => "NULL",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Allowed kinds for a single key
pub type Kinds = &'static [ValueKind];

/// Mapping from key name to the kinds it accepts
pub type TypeSchema = [(&'static str, Kinds)];

/// Whole numbers only
pub const INTEGER: Kinds = &[ValueKind::Integer];
/// Whole or floating-point numbers
pub const NUMERIC: Kinds = &[ValueKind::Integer, ValueKind::Double];
/// Text only
pub const STRING: Kinds = &[ValueKind::String];
/// Sequences or mappings
pub const ARRAY: Kinds = &[ValueKind::Array];
/// Text, sequences or mappings
pub const STRING_OR_ARRAY: Kinds = &[ValueKind::String, ValueKind::Array];

/// Declared parameter rules of one API operation
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Keys that must be present, checked in order
    pub required: &'static [&'static str],
    /// Accepted kinds per key, checked only for keys that are present
    pub types: &'static TypeSchema,
}

impl Schema {
    /// Declare a schema from its required keys and accepted kinds
    pub const fn new(required: &'static [&'static str], types: &'static TypeSchema) -> Self {
        Schema { required, types }
    }

    /// Run the presence check, then the type check
    pub fn validate<'a>(&self, params: &'a Param) -> Result<&'a Param> {
        require_validation(params, self.required)?.type_validation(self.types)
    }
}

/// Parameters that passed the presence check
#[derive(Debug, Clone, Copy)]
pub struct Required<'a> {
    params: &'a Param,
}

impl<'a> Required<'a> {
    /// The checked parameters, unchanged
    pub fn params(&self) -> &'a Param {
        self.params
    }

    /// Continue with the type check
    pub fn type_validation(self, types: &TypeSchema) -> Result<&'a Param> {
        type_validation(self.params, types)?;
        Ok(self.params)
    }
}

fn lookup<'a>(params: &'a Param, key: &str) -> Option<&'a Value> {
    params.get(key).filter(|v| !v.is_null())
}

/// Check that every required key is present.
///
/// A key holding `null` counts as absent; empty strings and zeros are present.
/// Stops at the first missing key.
pub fn require_validation<'a>(params: &'a Param, required: &[&str]) -> Result<Required<'a>> {
    if let Some(name) = required.iter().find(|name| lookup(params, name).is_none()) {
        return Err(ShipperError::missing(*name));
    }
    Ok(Required { params })
}

/// Check that every present key listed in `types` holds an accepted kind.
pub fn type_validation(params: &Param, types: &TypeSchema) -> Result<()> {
    for (name, kinds) in types {
        let Some(value) = lookup(params, name) else {
            continue;
        };

        let actual = ValueKind::of(value);
        if !kinds.contains(&actual) {
            return Err(ShipperError::TypeMismatch {
                name: (*name).to_string(),
                expected: kinds.iter().map(ValueKind::name).collect::<Vec<_>>().join("|"),
                actual: actual.name().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::params;
    use serde_json::json;

    const RATES: Schema = Schema::new(
        &["o", "d", "l"],
        &[("o", INTEGER), ("d", INTEGER), ("l", NUMERIC), ("originCoord", STRING)],
    );

    #[test]
    fn test_value_kind_classification() {
        assert_eq!(ValueKind::of(&json!(1)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(-7)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(u64::MAX)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&json!(1.5)), ValueKind::Double);
        assert_eq!(ValueKind::of(&json!(10.0)), ValueKind::Double);
        assert_eq!(ValueKind::of(&json!("1")), ValueKind::String);
        assert_eq!(ValueKind::of(&json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
        assert_eq!(ValueKind::of(&json!({"a": 1})), ValueKind::Array);
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let p = params(json!({"o": 1, "l": 2}));
        let err = require_validation(&p, &["o", "d", "l"]).unwrap_err();
        assert!(matches!(err, ShipperError::MissingParameter { ref name } if name == "d"));
    }

    #[test]
    fn test_require_reports_first_missing_key() {
        let p = params(json!({"l": 2}));
        let err = require_validation(&p, &["o", "d", "l"]).unwrap_err();
        assert!(matches!(err, ShipperError::MissingParameter { ref name } if name == "o"));
    }

    #[test]
    fn test_require_treats_null_as_missing() {
        let p = params(json!({"o": null}));
        assert!(require_validation(&p, &["o"]).is_err());
    }

    #[test]
    fn test_require_accepts_empty_and_zero() {
        let p = params(json!({"o": 0, "name": "", "ids": []}));
        let checked = require_validation(&p, &["o", "name", "ids"]).unwrap();
        assert_eq!(checked.params(), &p);
    }

    #[test]
    fn test_type_mismatch_names_key_and_types() {
        let p = params(json!({"o": 1, "d": 2, "l": "10"}));
        let err = type_validation(&p, RATES.types).unwrap_err();
        match err {
            ShipperError::TypeMismatch { name, expected, actual } => {
                assert_eq!(name, "l");
                assert_eq!(expected, "integer|double");
                assert_eq!(actual, "string");
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_rejects_double() {
        let p = params(json!({"o": 1.0}));
        let err = type_validation(&p, RATES.types).unwrap_err();
        assert!(matches!(err, ShipperError::TypeMismatch { ref actual, .. } if actual == "double"));
    }

    #[test]
    fn test_type_skips_absent_and_unknown_keys() {
        let p = params(json!({"o": 1, "somethingElse": [1, 2, 3], "originCoord": null}));
        assert!(type_validation(&p, RATES.types).is_ok());
    }

    #[test]
    fn test_string_or_array() {
        let types: &TypeSchema = &[("itemName", STRING_OR_ARRAY)];
        assert!(type_validation(&params(json!({"itemName": "Box"})), types).is_ok());
        assert!(type_validation(&params(json!({"itemName": ["Box", "Bag"]})), types).is_ok());
        assert!(type_validation(&params(json!({"itemName": {"a": "Box"}})), types).is_ok());
        assert!(type_validation(&params(json!({"itemName": 5})), types).is_err());
    }

    #[test]
    fn test_presence_checked_before_types() {
        // "l" has the wrong type, but "d" is missing and must be reported first
        let p = params(json!({"o": 1, "l": "long"}));
        let err = RATES.validate(&p).unwrap_err();
        assert!(matches!(err, ShipperError::MissingParameter { ref name } if name == "d"));
    }

    #[test]
    fn test_schema_validate_passes_through() {
        let p = params(json!({"o": 1, "d": 2, "l": 10.5, "extra": "kept"}));
        let checked = RATES.validate(&p).unwrap();
        assert_eq!(checked, &p);
    }
}
