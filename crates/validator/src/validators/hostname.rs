//! Domain and hostname validator.
//!
//! Two modes share the structural rules:
//! - Total length: 1..=253 characters (excluding optional trailing dot)
//! - Split by `.` into labels, each 1..=63 characters
//! - Trailing dot optional (FQDN)
//!
//! [`Hostname::strict`] additionally applies RFC 1123 label syntax:
//! `[a-zA-Z0-9-]` only, no leading or trailing hyphen.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// HOSTNAME VALIDATOR
// ============================================================================

/// Validates domain names, optionally as RFC 1123 hostnames.
///
/// # Examples
///
/// ```
/// use sieve_validator::validators::Hostname;
/// use sieve_validator::foundation::Validate;
///
/// let strict = Hostname::strict();
/// assert!(strict.validate("example.se").is_ok());
/// assert!(strict.validate("example.se.").is_ok()); // trailing dot FQDN
/// assert!(strict.validate("-bad.se").is_err());
///
/// // Lenient mode only checks lengths
/// assert!(Hostname::lenient().validate("_dmarc.example.se").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hostname {
    strict: bool,
}

impl Hostname {
    /// RFC 1123 hostname rules.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Length rules only; any label content is accepted.
    #[must_use]
    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    /// Picks the mode from a flag.
    #[must_use]
    pub const fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    fn check_label(&self, label: &str) -> Result<(), ValidationError> {
        if label.is_empty() {
            return Err(ValidationError::new(
                "empty_label",
                "Hostname labels must not be empty",
            ));
        }

        if label.len() > 63 {
            return Err(ValidationError::new(
                "label_too_long",
                format!(
                    "Label '{}' length {} exceeds maximum of 63 characters",
                    label,
                    label.len()
                ),
            ));
        }

        if !self.strict {
            return Ok(());
        }

        if label.starts_with('-') {
            return Err(ValidationError::new(
                "label_starts_with_hyphen",
                format!("Label '{label}' must not start with a hyphen"),
            ));
        }

        if label.ends_with('-') {
            return Err(ValidationError::new(
                "label_ends_with_hyphen",
                format!("Label '{label}' must not end with a hyphen"),
            ));
        }

        if let Some(ch) = label
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
        {
            return Err(ValidationError::new(
                "invalid_hostname_character",
                format!("Label '{label}' contains invalid character '{ch}'"),
            ));
        }

        Ok(())
    }
}

impl Default for Hostname {
    fn default() -> Self {
        Self::strict()
    }
}

impl Validate for Hostname {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "empty_hostname",
                "Hostname cannot be empty",
            ));
        }

        let hostname = input.strip_suffix('.').unwrap_or(input);

        if hostname.is_empty() {
            return Err(ValidationError::new(
                "invalid_hostname",
                "Hostname must contain at least one label",
            ));
        }

        if hostname.len() > 253 {
            return Err(ValidationError::new(
                "hostname_too_long",
                format!(
                    "Hostname length {} exceeds maximum of 253 characters",
                    hostname.len()
                ),
            ));
        }

        hostname
            .split('.')
            .try_for_each(|label| self.check_label(label))
    }
}

/// Creates a strict [`Hostname`] validator.
#[must_use]
pub const fn hostname() -> Hostname {
    Hostname::strict()
}

// ============================================================================
// TESTS
// ============================================================================
