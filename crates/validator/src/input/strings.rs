//! String predicates.
//!
//! These read the string view, so numbers are checked in their string form
//! and every other kind fails.

use serde_json::Value;
use tracing::warn;

use super::Input;
use crate::foundation::Validate;
use crate::validators::{
    Alpha, Email, HexColor, Hostname, LowerAlpha, MatchesPattern, Password, Phone, UpperAlpha, Url,
    Version, VersionCompare, VersionOperator, char_length,
};

/// Characters removed from a postal code before checking it.
const ZIP_FORMATTING: &[char] = &[' ', '-', '\u{2014}', '\u{2013}'];

impl Input {
    fn check_str<V>(&self, validator: &V) -> bool
    where
        V: Validate<Input = str>,
    {
        self.string_view().is_some_and(|s| validator.is_valid(s))
    }

    // ========================================================================
    // FORMATS
    // ========================================================================

    /// Syntactically valid email address.
    #[must_use]
    pub fn is_email(&self) -> bool {
        self.check_str(&Email::new())
    }

    /// Absolute URL.
    #[must_use]
    pub fn is_url(&self) -> bool {
        self.check_str(&Url)
    }

    /// Domain name; `strict` also enforces host name characters.
    #[must_use]
    pub fn is_domain(&self, strict: bool) -> bool {
        self.check_str(&Hostname::with_strict(strict))
    }

    /// National or international phone number; spaces, dashes and
    /// parentheses are ignored.
    #[must_use]
    pub fn is_phone(&self) -> bool {
        self.check_str(&Phone::any())
    }

    /// Postal code of `min..=max` digits.
    ///
    /// Spaces and dashes are stripped first and the holder keeps the
    /// stripped value: `"252 52"` becomes `"25252"`.
    pub fn is_zip(&mut self, min: usize, max: Option<usize>) -> bool {
        let Some(view) = self.string_view() else {
            return false;
        };
        let stripped = view.replace(ZIP_FORMATTING, "");
        self.replace_value(Value::String(stripped));

        let digits = self.string_view().unwrap_or_default();
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && self.length(min, max)
    }

    /// `#RGB` or `#RRGGBB` colour, any case.
    #[must_use]
    pub fn is_hex(&self) -> bool {
        self.check_str(&HexColor)
    }

    /// Consists only of characters from `class` (a regex character class
    /// body such as `a-zA-Z0-9_`). An unusable class never matches.
    #[must_use]
    pub fn is_matching_pattern(&self, class: &str) -> bool {
        match MatchesPattern::new(class) {
            Ok(pattern) => self.check_str(&pattern),
            Err(e) => {
                warn!(class, error = %e, "unusable character class");
                false
            }
        }
    }

    /// Only `a-z` and `A-Z`.
    #[must_use]
    pub fn is_alpha(&self) -> bool {
        self.check_str(&Alpha)
    }

    /// Only `a-z`.
    #[must_use]
    pub fn is_lower_alpha(&self) -> bool {
        self.check_str(&LowerAlpha)
    }

    /// Only `A-Z`.
    #[must_use]
    pub fn is_upper_alpha(&self) -> bool {
        self.check_str(&UpperAlpha)
    }

    // ========================================================================
    // SUBSTRINGS
    // ========================================================================

    /// Contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.string_view().is_some_and(|s| s.contains(needle))
    }

    /// Starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.string_view().is_some_and(|s| s.starts_with(prefix))
    }

    /// Ends with `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.string_view().is_some_and(|s| s.ends_with(suffix))
    }

    /// Contains `needle`, first occurring at character `position` when one
    /// is given.
    #[must_use]
    pub fn find_in_string(&self, needle: &str, position: Option<usize>) -> bool {
        let Some(s) = self.string_view() else {
            return false;
        };
        match (s.find(needle), position) {
            (Some(_), None) => true,
            (Some(byte), Some(expected)) => char_length(&s[..byte]) == expected,
            (None, _) => false,
        }
    }

    // ========================================================================
    // PASSWORDS AND VERSIONS
    // ========================================================================

    /// At least `min_length` characters from letters, digits and
    /// `$@!%*?&`.
    #[must_use]
    pub fn is_lossy_password(&self, min_length: usize) -> bool {
        self.check_str(&Password::lossy(min_length))
    }

    /// As [`is_lossy_password`](Self::is_lossy_password), with at least one
    /// lowercase letter, uppercase letter, digit and special character.
    #[must_use]
    pub fn is_strict_password(&self, min_length: usize) -> bool {
        self.check_str(&Password::strict(min_length))
    }

    /// A version of at least `0.0.1`; `strict` requires `N.N.N`.
    #[must_use]
    pub fn is_valid_version(&self, strict: bool) -> bool {
        self.check_str(&Version::new(strict))
    }

    /// Compares the value as a version against `other`.
    ///
    /// `operator` is one of `!=`, `<`, `<=`, `<>`, `=`, `==`, `>`, `>=`,
    /// `eq`, `ge`, `gt`, `le`, `lt`, `ne`; anything else is false.
    #[must_use]
    pub fn version_compare(&self, other: &str, operator: &str) -> bool {
        VersionOperator::parse(operator)
            .is_some_and(|op| self.check_str(&VersionCompare::new(other, op)))
    }
}
