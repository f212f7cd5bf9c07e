//! Coercion of untyped JSON request bodies into product fields.
//!
//! Clients do not reliably send numeric fields as JSON numbers, so request
//! bodies are first parsed into a generic object and then each recognized
//! field is converted according to [`PRODUCT_FIELDS`]. Values that cannot be
//! converted are dropped rather than rejected: the caller keeps the field's
//! zero value (on create) or leaves it untouched (on update).

use serde_json::{Map, Value};

use crate::error::CoreError;

/// How a JSON value is converted for a given product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// JSON strings only.
    Text,
    /// JSON numbers, or strings that parse as a finite `f64`.
    Decimal,
    /// JSON numbers (floats truncated toward zero), or strings that parse as `i32`.
    Integer,
}

/// A successfully coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Decimal(f64),
    Integer(i32),
}

/// Every client-settable product field and its coercion rule.
///
/// `id` is deliberately absent: ids are assigned by storage and never taken
/// from a request body.
pub const PRODUCT_FIELDS: &[(&str, Coercion)] = &[
    ("name", Coercion::Text),
    ("description", Coercion::Text),
    ("brand", Coercion::Text),
    ("category", Coercion::Text),
    ("price", Coercion::Decimal),
    ("currency", Coercion::Text),
    ("stock", Coercion::Integer),
    ("ean", Coercion::Text),
    ("color", Coercion::Text),
    ("size", Coercion::Text),
    ("availability", Coercion::Text),
    ("internal_id", Coercion::Text),
];

/// Parse a raw request body as a JSON object.
///
/// Returns [`CoreError::MalformedRequest`] if the body is not valid JSON or
/// is valid JSON of some other shape (array, string, ...).
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, CoreError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| CoreError::MalformedRequest(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::MalformedRequest(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Apply a single coercion rule. `None` means the value is not assignable.
pub fn coerce(rule: Coercion, value: &Value) -> Option<FieldValue> {
    match rule {
        Coercion::Text => match value {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            _ => None,
        },
        Coercion::Decimal => coerce_decimal(value).map(FieldValue::Decimal),
        Coercion::Integer => coerce_integer(value).map(FieldValue::Integer),
    }
}

/// Walk the field table against a parsed body, yielding every assignable
/// field. Unknown keys and non-assignable values are skipped.
pub fn coerced_fields(
    map: &Map<String, Value>,
) -> impl Iterator<Item = (&'static str, FieldValue)> + '_ {
    PRODUCT_FIELDS.iter().filter_map(move |&(name, rule)| {
        map.get(name)
            .and_then(|value| coerce(rule, value))
            .map(|coerced| (name, coerced))
    })
}

fn coerce_decimal(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    // NaN and infinities cannot round-trip through a JSON response.
    parsed.filter(|f| f.is_finite())
}

fn coerce_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n
                .as_f64()
                .map(f64::trunc)
                .filter(|f| *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                .map(|f| f as i32),
        },
        Value::String(s) => s.parse::<i32>().ok(),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
