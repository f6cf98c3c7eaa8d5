//! The closed set of scalars the encoder accepts.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{HashError, Result};

/// A scalar admitted by the canonical encoder, with borrowed text
/// (zero-copy).
///
/// The set is closed: every variant has exactly one encoding rule in
/// [`crate::encoding::encode`], and nothing outside it can reach the
/// encoder. Equal logical integers are interchangeable across widths:
/// `Int8(42)` and `Int64(42)` produce the same bytes and therefore the
/// same digest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalarValue<'a> {
    /// 64-bit IEEE-754 floating point number.
    Float64(f64),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit signed integer.
    Int32(i32),
    /// 16-bit signed integer.
    Int16(i16),
    /// 8-bit signed integer.
    Int8(i8),
    /// String slice reference, hashed as its raw UTF-8 bytes.
    Text(&'a str),
}

impl From<f64> for ScalarValue<'_> {
    fn from(v: f64) -> Self {
        ScalarValue::Float64(v)
    }
}

impl From<i64> for ScalarValue<'_> {
    fn from(v: i64) -> Self {
        ScalarValue::Int64(v)
    }
}

impl From<i32> for ScalarValue<'_> {
    fn from(v: i32) -> Self {
        ScalarValue::Int32(v)
    }
}

impl From<i16> for ScalarValue<'_> {
    fn from(v: i16) -> Self {
        ScalarValue::Int16(v)
    }
}

impl From<i8> for ScalarValue<'_> {
    fn from(v: i8) -> Self {
        ScalarValue::Int8(v)
    }
}

impl<'a> From<&'a str> for ScalarValue<'a> {
    fn from(v: &'a str) -> Self {
        ScalarValue::Text(v)
    }
}

impl<'a> TryFrom<&'a JsonValue> for ScalarValue<'a> {
    type Error = HashError;

    /// Admits a dynamic JSON scalar into the closed set.
    ///
    /// Strings map to `Text` (borrowed), integer numbers to `Int64`, and
    /// float numbers to `Float64`. Everything else is rejected: booleans,
    /// null, arrays, objects, and integers above `i64::MAX` (a lossy float
    /// coercion would change which values collide).
    fn try_from(value: &'a JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(s) => Ok(ScalarValue::Text(s)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ScalarValue::Int64(i))
                } else if n.is_u64() {
                    debug!(number = %n, "value.from_json.unsupported");
                    Err(HashError::UnsupportedType("out-of-range integer"))
                } else {
                    // serde_json numbers are i64, u64, or f64; the first
                    // two are handled above
                    Ok(ScalarValue::Float64(
                        n.as_f64().expect("float-classified JSON number"),
                    ))
                }
            }
            other => {
                let kind = json_kind(other);
                debug!(kind, "value.from_json.unsupported");
                Err(HashError::UnsupportedType(kind))
            }
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
