//! # sieve-validator
//!
//! Named-rule input validation: a value holder with a catalog of
//! predicates, a validation chain that records failures per rule and key,
//! `oneOf` / `allOf` combinators and a Luhn checksum engine for Swedish
//! personal and organisation numbers, payment cards and VAT numbers.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let mut chain = ValidationChain::new("john.doe@gmail.com");
//! chain.map_error_to_key("email").check("isEmail", &[])?;
//! chain.map_error_to_key("email").check("length", &[json!(1), json!(16)])?;
//!
//! let errors = chain.errors();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors()[0].code, "length");
//! # Ok::<(), DispatchError>(())
//! ```
//!
//! ## Layers
//!
//! - [`input::Input`]: the value holder and its predicates (`is_email`,
//!   `is_zip`, `is_social_number`, ...)
//! - [`rules`]: the name registry, negation (`!isEmail`, `notIsEmail`) and
//!   argument decoding
//! - [`chain::ValidationChain`]: runs rules by name and keeps the failure map
//! - [`luhn`]: checksum engine, usable without the rest
//! - [`validators`]: typed [`Validate`](foundation::Validate)
//!   implementations behind the string predicates
//! - [`dns`]: the resolver collaborator behind the DNS predicates
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the error type of every typed validator; boxing it
// would add indirection to every call.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod config;
pub mod dns;
pub mod error;
pub mod foundation;
pub mod input;
pub mod luhn;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
