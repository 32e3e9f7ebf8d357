//! Built-in typed validators
//!
//! Reusable [`Validate`](crate::foundation::Validate) implementations. The
//! string predicates on [`Input`](crate::input::Input) delegate here, and
//! each validator can also be used on its own for a detailed
//! [`ValidationError`](crate::foundation::ValidationError).
//!
//! # Categories
//!
//! - **Content**: email, URL, host name, caller-supplied character classes
//! - **Pattern**: substrings, ASCII letter classes, hex colours
//! - **Length**: character-counted length bounds
//! - **Phone**, **Password**, **Version**
//! - **Temporal**: dates, times and date ranges in token formats
//!
//! # Examples
//!
//! ```
//! use sieve_validator::foundation::Validate;
//! use sieve_validator::validators::{Phone, email, length_range};
//!
//! assert!(email().validate("jane@example.se").is_ok());
//! assert!(length_range(1, Some(16)).validate("john.doe@gmail.com").is_err());
//! assert!(Phone::any().is_valid("+46 (0) 702-83 27 12"));
//! ```

pub mod content;
pub mod hostname;
pub mod length;
pub mod password;
pub mod pattern;
pub mod phone;
pub mod temporal;
pub mod version;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use content::{Email, MatchesPattern, Url, email, matches_pattern, url};
pub use hostname::{Hostname, hostname};
pub use length::{ExactLength, LengthRange, char_length, exact_length, length_range};
pub use password::{PASSWORD_SPECIALS, Password, PasswordPolicy};
pub use pattern::{
    Alpha, Contains, EndsWith, HexColor, LowerAlpha, StartsWith, UpperAlpha, alpha, contains,
    ends_with, hex_color, lower_alpha, starts_with, upper_alpha,
};
pub use phone::{PHONE_FORMATTING, Phone, PhoneMode};
pub use temporal::{Date, DateFormat, DateRange, Moment, RANGE_SEPARATOR, date};
pub use version::{Version, VersionCompare, VersionOperator, compare_versions, version_compare};
