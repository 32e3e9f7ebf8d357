//! Password validators.
//!
//! Both policies restrict input to `[a-zA-Z0-9$@!%*?&]`. The strict policy
//! also requires one lowercase letter, one uppercase letter, one digit and
//! one special character.

use crate::foundation::{Validate, ValidationError};

/// Special characters a password may contain.
pub const PASSWORD_SPECIALS: &[char] = &['$', '@', '!', '%', '*', '?', '&'];

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(&c)
}

/// Password strength policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordPolicy {
    /// Allowed characters only.
    Lossy,
    /// Allowed characters plus one of each character kind.
    Strict,
}

/// Validates a password against a [`PasswordPolicy`] and a minimum length.
///
/// # Examples
///
/// ```
/// use sieve_validator::validators::Password;
/// use sieve_validator::foundation::Validate;
///
/// assert!(Password::lossy(1).validate("MyStrongPass").is_ok());
/// assert!(Password::strict(1).validate("MyStrongPass").is_err());
/// assert!(Password::strict(1).validate("My@StrongPass12").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password {
    policy: PasswordPolicy,
    min_length: usize,
}

impl Password {
    /// Lossy policy with a minimum length.
    #[must_use]
    pub const fn lossy(min_length: usize) -> Self {
        Self {
            policy: PasswordPolicy::Lossy,
            min_length,
        }
    }

    /// Strict policy with a minimum length.
    #[must_use]
    pub const fn strict(min_length: usize) -> Self {
        Self {
            policy: PasswordPolicy::Strict,
            min_length,
        }
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let length = input.chars().count();
        if length == 0 || length < self.min_length {
            return Err(ValidationError::new("password_too_short", "Password is too short")
                .with_param("min", self.min_length.to_string()));
        }

        if let Some(c) = input.chars().find(|c| !is_allowed(*c)) {
            return Err(ValidationError::new(
                "password_invalid_character",
                format!("Password contains a disallowed character '{c}'"),
            ));
        }

        if self.policy == PasswordPolicy::Strict {
            let has_lower = input.chars().any(|c| c.is_ascii_lowercase());
            let has_upper = input.chars().any(|c| c.is_ascii_uppercase());
            let has_digit = input.chars().any(|c| c.is_ascii_digit());
            let has_special = input.chars().any(|c| PASSWORD_SPECIALS.contains(&c));

            if !(has_lower && has_upper && has_digit && has_special) {
                return Err(ValidationError::new(
                    "password_too_weak",
                    "Password needs a lowercase letter, an uppercase letter, a digit and a special character",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_accepts_allowed_characters() {
        assert!(Password::lossy(1).validate("MyStrongPass").is_ok());
        assert!(Password::lossy(1).validate("pass$@!%*?&").is_ok());
    }

    #[test]
    fn lossy_rejects_spaces_and_unicode() {
        assert!(Password::lossy(1).validate("my pass").is_err());
        assert!(Password::lossy(1).validate("lösenord").is_err());
    }

    #[test]
    fn min_length_applies_to_both() {
        assert!(Password::lossy(8).validate("short").is_err());
        assert!(Password::strict(20).validate("My@StrongPass12").is_err());
        assert!(Password::strict(15).validate("My@StrongPass12").is_ok());
    }

    #[test]
    fn strict_requires_every_kind() {
        assert!(Password::strict(1).validate("my@strongpass12").is_err());
        assert!(Password::strict(1).validate("MY@STRONGPASS12").is_err());
        assert!(Password::strict(1).validate("My@StrongPass").is_err());
        assert!(Password::strict(1).validate("MyStrongPass12").is_err());
    }

    #[test]
    fn empty_is_rejected() {
        let err = Password::lossy(0).validate("").unwrap_err();
        assert_eq!(err.code, "password_too_short");
    }
}
