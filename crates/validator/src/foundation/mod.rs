//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by the typed
//! validators and the named-rule engine:
//!
//! - **Traits**: `Validate`
//! - **Errors**: `ValidationError`, `ValidationErrors`
//!
//! # Examples
//!
//! ```
//! use sieve_validator::foundation::Validate;
//! use sieve_validator::validators::Hostname;
//!
//! assert!(Hostname::strict().validate("example.se").is_ok());
//! assert!(Hostname::strict().validate("-bad.se").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;
