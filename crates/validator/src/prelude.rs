//! Prelude module for convenient imports.
//!
//! Provides a single `use sieve_validator::prelude::*;` import that brings
//! in the value holder, the chain, the rule registry and the typed
//! validators.
//!
//! # Examples
//!
//! ```
//! use sieve_validator::prelude::*;
//!
//! let input = Input::new("556016-0680");
//! assert!(input.is_org_number());
//! assert!(LuhnIdentifier::new("556016-0680").is_org_number());
//! ```

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// DISPATCH: Holder, chain, registry
// ============================================================================

pub use crate::chain::{FailureMap, GroupKey, RuleInvocation, RuleRecord, ValidationChain};
pub use crate::config::{Environment, ValidatorConfig};
pub use crate::error::DispatchError;
pub use crate::input::Input;
pub use crate::rules::{Outcome, Rule, RuleRef, RuleSet};

// ============================================================================
// DOMAIN: Checksums and DNS
// ============================================================================

pub use crate::dns::{RecordType, Resolver, StaticResolver, SystemResolver};
pub use crate::luhn::{CardIssuer, LuhnIdentifier, luhn_check};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
