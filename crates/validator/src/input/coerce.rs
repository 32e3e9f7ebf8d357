//! Loose conversions between JSON value kinds.
//!
//! Rules written against loosely typed input ("is this truthy", "is this
//! loosely equal to 5") need one agreed set of conversions. They live here.

use std::sync::LazyLock;

use serde_json::Value;

static NUMERIC_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").unwrap()
});

static INT_PREFIX_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\s*[+-]?\d+").unwrap());

/// Whether a string reads as a number, surrounding whitespace allowed.
pub(crate) fn is_numeric_str(s: &str) -> bool {
    NUMERIC_REGEX.is_match(s)
}

/// Numeric reading of a value: numbers and numeric strings.
pub(crate) fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_str(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Integer reading with the usual loose rules: numbers truncate, strings
/// use their leading integer (or 0), booleans are 0/1, collections are 0/1
/// by emptiness.
pub(crate) fn lenient_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(i64::MAX),
        Value::String(s) => INT_PREFIX_REGEX
            .find(s)
            .and_then(|m| m.as_str().trim().parse().ok())
            .unwrap_or(0),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

/// String reading of a scalar. `true` is `"1"`; `false` and null are empty.
pub(crate) fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => Some(String::new()),
        Value::Bool(true) => Some("1".to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Truthiness: null, false, zero, `""`, `"0"` and empty collections are
/// falsy.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Boolean filter: `"1"`, `"true"`, `"on"`, `"yes"` and their opposites
/// (plus `""`), case-insensitive. `None` when the value reads as neither.
pub(crate) fn boolean_filter(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Array(_) | Value::Object(_) => None,
        other => {
            let s = loose_string(other)?;
            match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => Some(true),
                "0" | "false" | "off" | "no" | "" => Some(false),
                _ => None,
            }
        }
    }
}

/// Loose equality across kinds.
///
/// - booleans (and null against non-strings) compare by truthiness
/// - null equals `""`
/// - numbers and numeric strings compare numerically
/// - other strings compare against the number's string form
/// - collections compare member by member with loose equality
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(_), _) | (_, Value::Bool(_)) => truthy(a) == truthy(b),
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !truthy(other),
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            if is_numeric_str(s) {
                s.trim().parse::<f64>().ok() == n.as_f64()
            } else {
                n.to_string() == *s
            }
        }
        (Value::String(x), Value::String(y)) => {
            if is_numeric_str(x) && is_numeric_str(y) {
                x.trim().parse::<f64>().ok() == y.trim().parse::<f64>().ok()
            } else {
                x == y
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| loose_eq(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, l)| y.get(k).is_some_and(|r| loose_eq(l, r)))
        }
        _ => false,
    }
}
