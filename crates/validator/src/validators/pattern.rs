//! String pattern validators
//!
//! Substring checks and the fixed ASCII character-class validators.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static HEX_COLOR_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"(?i)^#([0-9A-F]{3}){1,2}$").unwrap());

crate::validator! {
    /// Validates that a string contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for str;
    rule(self, input) { input.contains(&self.substring) }
    error(self, input) {
        ValidationError::new(
            "contains",
            format!("String must contain '{}'", self.substring),
        )
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a string starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for str;
    rule(self, input) { input.starts_with(&self.prefix) }
    error(self, input) {
        ValidationError::new(
            "starts_with",
            format!("String must start with '{}'", self.prefix),
        )
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a string ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for str;
    rule(self, input) { input.ends_with(&self.suffix) }
    error(self, input) {
        ValidationError::new(
            "ends_with",
            format!("String must end with '{}'", self.suffix),
        )
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

// ============================================================================
// ASCII CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Validates that a non-empty string contains only `a-z` and `A-Z`.
    pub Alpha for str;
    rule(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic()) }
    error(input) { ValidationError::invalid_format("a-zA-Z") }
    fn alpha();
}

crate::validator! {
    /// Validates that a non-empty string contains only `a-z`.
    pub LowerAlpha for str;
    rule(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_lowercase()) }
    error(input) { ValidationError::invalid_format("a-z") }
    fn lower_alpha();
}

crate::validator! {
    /// Validates that a non-empty string contains only `A-Z`.
    pub UpperAlpha for str;
    rule(input) { !input.is_empty() && input.chars().all(|c| c.is_ascii_uppercase()) }
    error(input) { ValidationError::invalid_format("A-Z") }
    fn upper_alpha();
}

crate::validator! {
    /// Validates a CSS hex colour: `#RGB` or `#RRGGBB`, any case.
    pub HexColor for str;
    rule(input) { HEX_COLOR_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("#RGB or #RRGGBB") }
    fn hex_color();
}

// ============================================================================
// TESTS
// ============================================================================
