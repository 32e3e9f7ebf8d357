//! Version string validators.
//!
//! Versions are compared loosely, the way release tags tend to be written
//! rather than strict SemVer: `1.0`, `1.0.0-beta2`, `5.3.0RC1` and `1.0pl1`
//! are all comparable.
//!
//! A version is canonicalised into dot-separated parts (`-`, `_`, `+` and
//! any other non-alphanumeric become `.`; a dot is inserted wherever digits
//! meet letters). Numeric parts compare numerically. Word parts rank
//! `dev < alpha = a < beta = b < RC = rc < # < pl = p`; unknown words rank
//! below all of them. A number always outranks a word.

use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static STRICT_VERSION_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^(\d?\d)\.(\d?\d)\.(\d?\d)$").unwrap());

/// The lowest version considered valid.
const MINIMUM_VERSION: &str = "0.0.1";

/// Word rank used when a number is compared with a word.
const NUMBER_RANK: i8 = 4;

// ============================================================================
// COMPARISON
// ============================================================================

fn canonicalize(version: &str) -> String {
    let mut out = String::with_capacity(version.len() * 2);
    let mut prev: Option<char> = None;

    for c in version.chars() {
        let Some(p) = prev else {
            out.push(c);
            prev = Some(c);
            continue;
        };

        let last_is_dot = out.ends_with('.');
        let digit_edge = p != '.' && c != '.' && (p.is_ascii_digit() != c.is_ascii_digit());

        if matches!(c, '-' | '_' | '+') || !c.is_ascii_alphanumeric() {
            if !last_is_dot {
                out.push('.');
            }
        } else if digit_edge {
            if !last_is_dot {
                out.push('.');
            }
            out.push(c);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

fn word_rank(part: &str) -> i8 {
    const FORMS: &[(&str, i8)] = &[
        ("dev", 0),
        ("alpha", 1),
        ("a", 1),
        ("beta", 2),
        ("b", 2),
        ("RC", 3),
        ("rc", 3),
        ("#", 4),
        ("pl", 5),
        ("p", 5),
    ];

    FORMS
        .iter()
        .find(|(form, _)| part.starts_with(form))
        .map_or(-6, |(_, rank)| *rank)
}

fn is_numeric_part(part: &str) -> bool {
    part.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let digits = |s: &str| -> String {
        let run: String = s.chars().take_while(char::is_ascii_digit).collect();
        let trimmed = run.trim_start_matches('0');
        trimmed.to_owned()
    };
    let (a, b) = (digits(a), digits(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(&b))
}

fn compare_parts(a: &str, b: &str) -> Ordering {
    match (is_numeric_part(a), is_numeric_part(b)) {
        (true, true) => compare_numbers(a, b),
        (false, false) => word_rank(a).cmp(&word_rank(b)),
        (true, false) => NUMBER_RANK.cmp(&word_rank(b)),
        (false, true) => word_rank(a).cmp(&NUMBER_RANK),
    }
}

/// Compares two version strings.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use sieve_validator::validators::compare_versions;
///
/// assert_eq!(compare_versions("1.2.0", "1.2.0"), Ordering::Equal);
/// assert_eq!(compare_versions("1.10", "1.9"), Ordering::Greater);
/// assert_eq!(compare_versions("1.0.0-beta", "1.0.0"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let (a, b) = (canonicalize(a), canonicalize(b));
    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                let ordering = compare_parts(l, r);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(rest), None) => {
                return if is_numeric_part(rest) {
                    Ordering::Greater
                } else {
                    word_rank(rest).cmp(&NUMBER_RANK)
                };
            }
            (None, Some(rest)) => {
                return if is_numeric_part(rest) {
                    Ordering::Less
                } else {
                    NUMBER_RANK.cmp(&word_rank(rest))
                };
            }
            (None, None) => return Ordering::Equal,
        }
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

/// Comparison operator accepted by `versionCompare`.
///
/// Only the whitelisted spellings parse: `!=`, `<`, `<=`, `<>`, `=`, `==`,
/// `>`, `>=`, `eq`, `ge`, `gt`, `le`, `lt`, `ne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionOperator {
    /// `<`, `lt`
    Less,
    /// `<=`, `le`
    LessOrEqual,
    /// `>`, `gt`
    Greater,
    /// `>=`, `ge`
    GreaterOrEqual,
    /// `==`, `=`, `eq`
    Equal,
    /// `!=`, `<>`, `ne`
    NotEqual,
}

impl VersionOperator {
    /// Parses a whitelisted operator; anything else is `None`.
    #[must_use]
    pub fn parse(op: &str) -> Option<Self> {
        Some(match op {
            "<" | "lt" => Self::Less,
            "<=" | "le" => Self::LessOrEqual,
            ">" | "gt" => Self::Greater,
            ">=" | "ge" => Self::GreaterOrEqual,
            "==" | "=" | "eq" => Self::Equal,
            "!=" | "<>" | "ne" => Self::NotEqual,
            _ => return None,
        })
    }

    /// Applies the operator to an ordering.
    #[must_use]
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Less => ordering.is_lt(),
            Self::LessOrEqual => ordering.is_le(),
            Self::Greater => ordering.is_gt(),
            Self::GreaterOrEqual => ordering.is_ge(),
            Self::Equal => ordering.is_eq(),
            Self::NotEqual => ordering.is_ne(),
        }
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Validates that a string is a usable version (at least `0.0.1`).
///
/// With `strict` the version must also be exactly three dot-separated
/// numbers of one or two digits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Version {
    /// Require the `N.N.N` shape.
    pub strict: bool,
}

impl Version {
    /// Creates a version validator.
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl Validate for Version {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.strict && !STRICT_VERSION_REGEX.is_match(input) {
            return Err(ValidationError::invalid_format("N.N.N"));
        }
        if compare_versions(input, MINIMUM_VERSION).is_lt() {
            return Err(ValidationError::new(
                "version_too_low",
                format!("Version must be at least {MINIMUM_VERSION}"),
            ));
        }
        Ok(())
    }
}

crate::validator! {
    /// Validates a version against another version with an operator.
    #[derive(PartialEq, Eq, Hash)]
    pub VersionCompare { other: String, operator: VersionOperator } for str;
    rule(self, input) { self.operator.holds(compare_versions(input, &self.other)) }
    error(self, input) {
        ValidationError::new(
            "version_compare",
            format!("Version '{input}' does not satisfy {:?} '{}'", self.operator, self.other),
        )
        .with_param("other", self.other.clone())
    }
    new(other: impl Into<String>, operator: VersionOperator) {
        Self { other: other.into(), operator }
    }
    fn version_compare(other: impl Into<String>, operator: VersionOperator);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.0", "1.2.0", Ordering::Equal)]
    #[case("1.2", "1.2.0", Ordering::Less)]
    #[case("1.10.0", "1.9.9", Ordering::Greater)]
    #[case("1.0.0-dev", "1.0.0-alpha", Ordering::Less)]
    #[case("1.0.0a1", "1.0.0b1", Ordering::Less)]
    #[case("5.3.0RC1", "5.3.0", Ordering::Less)]
    #[case("1.0pl1", "1.0", Ordering::Greater)]
    #[case("1.0.0-foo", "1.0.0-dev", Ordering::Less)]
    #[case("007", "7", Ordering::Equal)]
    #[case("", "0", Ordering::Less)]
    fn compares_like_release_tags(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_versions(a, b), expected);
        assert_eq!(compare_versions(b, a), expected.reverse());
    }

    #[test]
    fn canonical_form_inserts_dots() {
        assert_eq!(canonicalize("5.3.0RC1"), "5.3.0.RC.1");
        assert_eq!(canonicalize("1.0.0-beta_2"), "1.0.0.beta.2");
        assert_eq!(canonicalize("1..2"), "1.2");
    }

    #[test]
    fn operator_whitelist() {
        for op in ["!=", "<", "<=", "<>", "=", "==", ">", ">=", "eq", "ge", "gt", "le", "lt", "ne"] {
            assert!(VersionOperator::parse(op).is_some(), "{op}");
        }
        assert_eq!(VersionOperator::parse("not-an-operator"), None);
        assert_eq!(VersionOperator::parse("==="), None);
    }

    #[test]
    fn strict_version_shape() {
        assert!(Version::new(true).validate("1.2.3").is_ok());
        assert!(Version::new(true).validate("1.2").is_err());
        assert!(Version::new(true).validate("100.2.3").is_err());
        assert!(Version::new(true).validate("0.0.0").is_err());
        assert!(Version::new(false).validate("2.0").is_ok());
        assert!(Version::new(false).validate("abc").is_err());
    }

    #[test]
    fn compare_validator() {
        let v = version_compare("1.2.0", VersionOperator::Equal);
        assert!(v.validate("1.2.0").is_ok());
        assert!(v.validate("1.2.1").is_err());
        assert!(version_compare("2", VersionOperator::Less).validate("1.9").is_ok());
    }
}
