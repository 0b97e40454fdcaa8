//! Coercion helpers for `serde_json::Value`
//!
//! Rules never fail on an unexpected value shape. These helpers give every
//! variant a string form and an optional numeric form so predicates can
//! decide with a plain `match`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Runtime type tag of a value, used for type-dispatched rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Tags a value with its variant.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Type name for log and error output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes (matches byte-oriented rule sets).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

/// String form of a value.
///
/// Strings borrow, numbers and booleans render the way JSON does, null is
/// the empty string, and arrays/objects are compact JSON.
pub fn to_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Extract f64 from Number, trying both f64 and i64 representations
#[inline]
pub fn number_as_f64(num: &Number) -> Option<f64> {
    num.as_f64().or_else(|| num.as_i64().map(|i| i as f64))
}

/// Numeric form of a value: numbers, and strings that parse as a float.
///
/// Returns `None` for everything else, including non-finite parses such as
/// `"NaN"`.
pub fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => number_as_f64(n),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// True for the empty string; every other value, `null` included, counts
/// as content once it is present in the bag.
#[inline]
pub fn is_empty_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}
