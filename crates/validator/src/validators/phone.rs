//! Phone number validator.
//!
//! Formatting characters (spaces, hyphens, en/em dashes, parentheses) are
//! stripped before the digits are checked, so `+46 (0) 702-83 27 12` and
//! `+460702832712` are the same number.

use crate::foundation::{Validate, ValidationError};

/// Characters removed before a phone number is checked.
pub const PHONE_FORMATTING: &[char] = &[' ', '-', '\u{2014}', '\u{2013}', '(', ')'];

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers in national or international form.
///
/// - **National**: 7 to 14 digits
/// - **International**: `+`, then a 1-2 digit country code and 6-13 digits
///   (7 to 15 digits in total)
///
/// # Examples
///
/// ```
/// use sieve_validator::validators::Phone;
/// use sieve_validator::foundation::Validate;
///
/// let phone = Phone::any();
/// assert!(phone.validate("+46 (0) 702-83 27 12").is_ok());
/// assert!(phone.validate("070-283 27 12").is_ok());
/// assert!(phone.validate("12345").is_err());
///
/// assert!(Phone::international().validate("0702832712").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phone {
    mode: PhoneMode,
}

/// Phone validation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneMode {
    /// Digits only, no country code.
    National,
    /// Leading `+` with country code.
    International,
    /// Either of the above.
    #[default]
    Any,
}

impl Phone {
    /// Accepts national and international numbers.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            mode: PhoneMode::Any,
        }
    }

    /// Accepts national numbers only.
    #[must_use]
    pub const fn national() -> Self {
        Self {
            mode: PhoneMode::National,
        }
    }

    /// Accepts `+`-prefixed international numbers only.
    #[must_use]
    pub const fn international() -> Self {
        Self {
            mode: PhoneMode::International,
        }
    }

    /// Removes formatting characters, leaving digits and any `+`.
    #[must_use]
    pub fn strip_formatting(input: &str) -> String {
        input
            .chars()
            .filter(|c| !PHONE_FORMATTING.contains(c))
            .collect()
    }

    fn is_national(stripped: &str) -> bool {
        (7..=14).contains(&stripped.len()) && stripped.bytes().all(|b| b.is_ascii_digit())
    }

    fn is_international(stripped: &str) -> bool {
        stripped.strip_prefix('+').is_some_and(|digits| {
            (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        })
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::any()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_phone",
                "Phone number cannot be empty",
            ));
        }

        let stripped = Self::strip_formatting(input);
        let ok = match self.mode {
            PhoneMode::National => Self::is_national(&stripped),
            PhoneMode::International => Self::is_international(&stripped),
            PhoneMode::Any => Self::is_national(&stripped) || Self::is_international(&stripped),
        };

        if ok {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_phone",
                format!("'{input}' is not a valid phone number"),
            )
            .with_param("mode", format!("{:?}", self.mode)))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
