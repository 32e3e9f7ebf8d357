//! Type, presence and equality predicates.

use std::sync::LazyLock;

use serde_json::Value;

use super::Input;
use super::coerce::{boolean_filter, is_numeric_str, loose_eq, loose_string};

static INT_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?(0|[1-9]\d*)$").unwrap());

static FLOAT_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap()
});

/// Words accepted by `isBoolVal`.
const BOOL_WORDS: &[&str] = &["on", "yes", "1", "true", "off", "no", "0", "false"];

impl Input {
    // ========================================================================
    // TYPES
    // ========================================================================

    /// The value is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.raw.is_string()
    }

    /// The value reads as an integer: integral numbers, `true`, and strings
    /// like `"42"` or `" -7 "` (no leading zeros).
    #[must_use]
    pub fn is_int(&self) -> bool {
        match &self.raw {
            Value::Bool(b) => *b,
            Value::Number(n) => {
                n.is_i64()
                    || n.as_u64().is_some_and(|u| i64::try_from(u).is_ok())
                    || n.as_f64().is_some_and(|f| {
                        f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
                    })
            }
            Value::String(s) => {
                let s = s.trim();
                INT_REGEX.is_match(s) && s.parse::<i64>().is_ok()
            }
            _ => false,
        }
    }

    /// The value reads as a floating point number, integers included.
    #[must_use]
    pub fn is_float(&self) -> bool {
        match &self.raw {
            Value::Bool(b) => *b,
            Value::Number(_) => true,
            Value::String(s) => FLOAT_REGEX.is_match(s.trim()),
            _ => false,
        }
    }

    /// [`is_int`](Self::is_int) or [`is_float`](Self::is_float).
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.is_float() || self.is_int()
    }

    /// A number, or a string that reads as one.
    #[must_use]
    pub fn is_numbery(&self) -> bool {
        match &self.raw {
            Value::Number(_) => true,
            Value::String(s) => is_numeric_str(s),
            _ => false,
        }
    }

    /// The value is a JSON array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.raw.is_array()
    }

    /// The value is a JSON object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.raw.is_object()
    }

    /// The value is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.raw.is_boolean()
    }

    /// The value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.raw.is_null()
    }

    /// Always false: a JSON value never holds an open handle.
    #[must_use]
    pub fn is_resource(&self) -> bool {
        false
    }

    /// The value is exactly `true`.
    #[must_use]
    pub fn is_true(&self) -> bool {
        self.raw == Value::Bool(true)
    }

    /// The value is exactly `false`.
    #[must_use]
    pub fn is_false(&self) -> bool {
        self.raw == Value::Bool(false)
    }

    /// The value reads as a true boolean (`true`, `1`, `"yes"`, `"on"`).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        boolean_filter(&self.raw) == Some(true)
    }

    /// The value reads as a false boolean (`false`, `0`, `"no"`, `""`).
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        boolean_filter(&self.raw) == Some(false)
    }

    /// The value is one of the boolean words, either polarity.
    #[must_use]
    pub fn is_bool_val(&self) -> bool {
        loose_string(&self.raw)
            .is_some_and(|s| BOOL_WORDS.contains(&s.trim().to_ascii_lowercase().as_str()))
    }

    // ========================================================================
    // PRESENCE
    // ========================================================================

    /// Non-empty scalar: length of at least one and not an empty sentinel
    /// (null, `false`, zero, `""`, `"0"`).
    #[must_use]
    pub fn is_required(&self) -> bool {
        let empty = match &self.raw {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty() || s == "0",
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        };
        self.has_value() && !empty
    }

    /// Length of at least one.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.length >= 1
    }

    // ========================================================================
    // EQUALITY
    // ========================================================================

    /// Strict equality: same kind and same value (`1` differs from `1.0`
    /// and from `"1"`).
    #[must_use]
    pub fn is_equal_to(&self, other: &Value) -> bool {
        self.raw == *other
    }

    /// Negation of [`is_equal_to`](Self::is_equal_to).
    #[must_use]
    pub fn is_not_equal_to(&self, other: &Value) -> bool {
        self.raw != *other
    }

    /// Loose equality across kinds (`1 == "1"`, `null == false`).
    #[must_use]
    pub fn is_loosely_equal_to(&self, other: &Value) -> bool {
        loose_eq(&self.raw, other)
    }

    /// Negation of [`is_loosely_equal_to`](Self::is_loosely_equal_to).
    #[must_use]
    pub fn is_loosely_not_equal_to(&self, other: &Value) -> bool {
        !loose_eq(&self.raw, other)
    }

    /// The value is a member of `haystack`, strictly compared.
    #[must_use]
    pub fn is_in_array(&self, haystack: &[Value]) -> bool {
        haystack.contains(&self.raw)
    }

    /// The value is a member of `haystack`, loosely compared.
    #[must_use]
    pub fn is_loosely_in_array(&self, haystack: &[Value]) -> bool {
        haystack.iter().any(|item| loose_eq(&self.raw, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(42), true)]
    #[case(json!(22.0), true)]
    #[case(json!(22.12), false)]
    #[case(json!("42"), true)]
    #[case(json!(" -7 "), true)]
    #[case(json!("042"), false)]
    #[case(json!("4.0"), false)]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(null), false)]
    #[case(json!("99999999999999999999"), false)]
    fn int_reading(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Input::new(value).is_int(), expected);
    }

    #[rstest]
    #[case(json!(22.12), true)]
    #[case(json!(3), true)]
    #[case(json!("1e3"), true)]
    #[case(json!(".5"), true)]
    #[case(json!("1,5"), false)]
    #[case(json!("abc"), false)]
    #[case(json!([]), false)]
    fn float_reading(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Input::new(value).is_float(), expected);
    }

    #[test]
    fn kinds() {
        assert!(Input::new("x").is_string());
        assert!(!Input::new(1).is_string());
        assert!(Input::new(json!([1])).is_array());
        assert!(!Input::new(json!({})).is_array());
        assert!(Input::new(json!({})).is_object());
        assert!(Input::new(Value::Null).is_null());
        assert!(Input::new(false).is_bool());
        assert!(!Input::new("true").is_bool());
        assert!(Input::new("1.5").is_numbery());
        assert!(!Input::new("1.5.1").is_numbery());
        assert!(!Input::new(Value::Null).is_resource());
    }

    #[test]
    fn boolean_readings() {
        assert!(Input::new(true).is_true());
        assert!(!Input::new(1).is_true());
        assert!(Input::new("Yes").is_truthy());
        assert!(Input::new("off").is_falsy());
        assert!(!Input::new("maybe").is_truthy());
        assert!(!Input::new("maybe").is_falsy());
        assert!(Input::new(" NO ").is_bool_val());
        assert!(Input::new(1).is_bool_val());
        assert!(!Input::new(false).is_bool_val());
        assert!(!Input::new(json!(["yes"])).is_bool_val());
    }

    #[rstest]
    #[case(json!("a"), true)]
    #[case(json!("0"), false)]
    #[case(json!(5), true)]
    #[case(json!(""), false)]
    #[case(json!(0), false)]
    #[case(json!(0.0), false)]
    #[case(json!(null), false)]
    #[case(json!(false), false)]
    #[case(json!(true), false)]
    #[case(json!([1]), false)]
    fn required(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Input::new(value).is_required(), expected);
    }

    #[test]
    fn equality() {
        let input = Input::new(1);
        assert!(input.is_equal_to(&json!(1)));
        assert!(!input.is_equal_to(&json!("1")));
        assert!(input.is_not_equal_to(&json!("1")));
        assert!(input.is_loosely_equal_to(&json!("1")));
        assert!(!input.is_loosely_not_equal_to(&json!("1")));
        assert!(input.is_loosely_not_equal_to(&json!(2)));
    }

    #[test]
    fn membership() {
        let haystack = [json!("1"), json!(2), json!(null)];
        assert!(Input::new(2).is_in_array(&haystack));
        assert!(!Input::new(1).is_in_array(&haystack));
        assert!(Input::new(1).is_loosely_in_array(&haystack));
        assert!(!Input::new(3).is_loosely_in_array(&haystack));
    }
}
