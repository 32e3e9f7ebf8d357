//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), never bytes:
//! `"é"` has length 1.

use crate::foundation::{Validate, ValidationError};

/// Counts a string the way every length rule does.
#[inline]
#[must_use]
pub fn char_length(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length lies in `min..=max`, or `min..` when no
/// upper bound is given.
///
/// # Examples
///
/// ```
/// use sieve_validator::validators::LengthRange;
/// use sieve_validator::foundation::Validate;
///
/// assert!(LengthRange::new(1, Some(16)).validate("ok").is_ok());
/// assert!(LengthRange::new(2, None).validate("é").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Inclusive lower bound.
    pub min: usize,
    /// Inclusive upper bound, open-ended when `None`.
    pub max: Option<usize>,
}

impl LengthRange {
    /// Creates a length range validator.
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Whether an already measured length satisfies the bounds.
    #[must_use]
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && self.max.is_none_or(|max| length <= max)
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let actual = char_length(input);
        if self.contains(actual) {
            return Ok(());
        }

        let mut error = ValidationError::new("length", "Length is out of bounds")
            .with_param("min", self.min.to_string())
            .with_param("actual", actual.to_string());
        if let Some(max) = self.max {
            error = error.with_param("max", max.to_string());
        }
        Err(error)
    }
}

/// Creates a [`LengthRange`] validator.
#[must_use]
pub const fn length_range(min: usize, max: Option<usize>) -> LengthRange {
    LengthRange::new(min, max)
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for str;
    rule(self, input) { char_length(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("String must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", char_length(input).to_string())
    }
    fn exact_length(length: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(char_length("é"), 1);
        assert_eq!(char_length("åäö"), 3);
        assert_eq!("åäö".len(), 6);
    }

    #[test]
    fn test_range_bounds() {
        let v = length_range(1, Some(16));
        assert!(v.validate("a").is_ok());
        assert!(v.validate("sixteen-chars-ok").is_ok());
        assert!(v.validate("").is_err());
        assert!(v.validate("john.doe@gmail.com").is_err());
    }

    #[test]
    fn test_open_ended() {
        let v = length_range(3, None);
        assert!(v.validate(&"x".repeat(500)).is_ok());
        assert!(v.validate("xy").is_err());
    }

    #[test]
    fn test_error_params() {
        let err = length_range(5, Some(6)).validate("abc").unwrap_err();
        assert_eq!(err.param("actual"), Some("3"));
        assert_eq!(err.param("max"), Some("6"));
    }

    #[test]
    fn test_exact() {
        assert!(exact_length(3).validate("åäö").is_ok());
        assert!(exact_length(3).validate("abcd").is_err());
    }
}
