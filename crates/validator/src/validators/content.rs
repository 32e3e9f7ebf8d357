//! String content validators
//!
//! Validators for email addresses, URLs and caller-supplied character classes.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

/// Schemes that are meaningful without a host component.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file", "urn", "data"];

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Syntax only; deliverability is a DNS question (`isDeliverableEmail`).
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { input.len() <= 254 && self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

impl Email {
    /// Domain part of an address, if the input has one.
    #[must_use]
    pub fn domain_of(input: &str) -> Option<&str> {
        input.rsplit_once('@').map(|(_, domain)| domain)
    }
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates absolute URLs.
///
/// A scheme is required. Hierarchical schemes (`http`, `https`, `ftp`, ...)
/// must also carry a host.
///
/// # Examples
///
/// ```
/// use sieve_validator::validators::Url;
/// use sieve_validator::foundation::Validate;
///
/// assert!(Url.validate("https://example.se").is_ok());
/// assert!(Url.validate("mailto:jane@example.se").is_ok());
/// assert!(Url.validate("example.se").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Url;

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = url::Url::parse(input)
            .map_err(|e| ValidationError::invalid_format("url").with_param("reason", e.to_string()))?;

        if HOSTLESS_SCHEMES.contains(&parsed.scheme()) {
            return Ok(());
        }

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(ValidationError::new("missing_host", "URL must contain a host")),
        }
    }
}

/// Creates a [`Url`] validator.
#[must_use]
pub const fn url() -> Url {
    Url
}

// ============================================================================
// CHARACTER CLASS VALIDATOR
// ============================================================================

/// Validates that a non-empty string consists only of characters from a
/// caller-supplied class (`a-z`, `A-Z0-9_`, ...).
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    class: String,
    pattern: regex::Regex,
}

impl MatchesPattern {
    /// Compiles `^[class]+$`.
    pub fn new(class: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            class: class.to_owned(),
            pattern: regex::Regex::new(&format!("^[{class}]+$"))?,
        })
    }

    /// The character class as supplied.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Validate for MatchesPattern {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("pattern").with_param("class", self.class.clone()))
        }
    }
}

/// Creates a [`MatchesPattern`] validator.
pub fn matches_pattern(class: &str) -> Result<MatchesPattern, regex::Error> {
    MatchesPattern::new(class)
}

// ============================================================================
// TESTS
// ============================================================================
