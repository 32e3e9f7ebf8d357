//! Numeric comparisons and length bounds.
//!
//! Values that do not read as numbers fail every numeric comparison.

use super::Input;
use super::coerce::{lenient_int, to_number};
use crate::validators::LengthRange;

impl Input {
    fn number(&self) -> Option<f64> {
        to_number(&self.raw)
    }

    /// Strictly less than `limit`.
    #[must_use]
    pub fn is_less_than(&self, limit: f64) -> bool {
        self.number().is_some_and(|n| n < limit)
    }

    /// Strictly greater than `limit`.
    #[must_use]
    pub fn is_more_than(&self, limit: f64) -> bool {
        self.number().is_some_and(|n| n > limit)
    }

    /// At least `limit`.
    #[must_use]
    pub fn min(&self, limit: f64) -> bool {
        self.number().is_some_and(|n| n >= limit)
    }

    /// At most `limit`.
    #[must_use]
    pub fn max(&self, limit: f64) -> bool {
        self.number().is_some_and(|n| n <= limit)
    }

    /// Zero or greater.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.min(0.0)
    }

    /// Below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.is_less_than(0.0)
    }

    /// Integer reading of the value equals `expected` (`"12abc"` reads as
    /// 12, `9.9` as 9).
    #[must_use]
    pub fn to_int_equal(&self, expected: i64) -> bool {
        lenient_int(&self.raw) == expected
    }

    /// Length equals `expected`.
    #[must_use]
    pub fn is_length_equal_to(&self, expected: usize) -> bool {
        self.length == expected
    }

    /// Length within `min..=max`; no upper bound when `max` is `None`.
    #[must_use]
    pub fn length(&self, min: usize, max: Option<usize>) -> bool {
        LengthRange::new(min, max).contains(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!(5), true)]
    #[case(json!("5"), true)]
    #[case(json!(" 4.5 "), true)]
    #[case(json!(10), false)]
    #[case(json!("five"), false)]
    #[case(json!(null), false)]
    #[case(json!(true), false)]
    fn less_than_ten(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Input::new(value).is_less_than(10.0), expected);
    }

    #[test]
    fn bounds_are_inclusive() {
        let input = Input::new(10);
        assert!(input.min(10.0));
        assert!(input.max(10.0));
        assert!(!input.is_more_than(10.0));
        assert!(input.is_more_than(9.5));
    }

    #[test]
    fn sign() {
        assert!(Input::new(0).is_positive());
        assert!(!Input::new(0).is_negative());
        assert!(Input::new("-0.1").is_negative());
        assert!(!Input::new("abc").is_positive());
        assert!(!Input::new("abc").is_negative());
    }

    #[test]
    fn int_equality() {
        assert!(Input::new("12abc").to_int_equal(12));
        assert!(Input::new(9.9).to_int_equal(9));
        assert!(Input::new("abc").to_int_equal(0));
    }

    #[test]
    fn length_bounds() {
        let input = Input::new("john.doe@gmail.com");
        assert!(!input.length(1, Some(16)));
        assert!(input.length(1, None));
        assert!(input.length(18, Some(18)));
        assert!(input.is_length_equal_to(18));
        assert!(Input::new("åäö").length(3, Some(3)));
        assert!(Input::new(json!([1, 2])).length(0, Some(0)));
    }
}
