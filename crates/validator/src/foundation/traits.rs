//! Core traits for the validation system
//!
//! This module defines the trait every typed validator implements. The
//! predicate catalog on [`Input`](crate::input::Input) delegates its format
//! checks to these validators and folds their result into a boolean.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A typed check over one kind of input.
///
/// `Input` may be unsized, so string validators take `&str` directly.
///
/// # Examples
///
/// ```
/// use sieve_validator::foundation::{Validate, ValidationError};
///
/// struct SwedishZip;
///
/// impl Validate for SwedishZip {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         let digits: String = input.chars().filter(|c| *c != ' ').collect();
///         if digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::invalid_format("NNN NN"))
///         }
///     }
/// }
///
/// assert!(SwedishZip.is_valid("252 52"));
/// assert!(!SwedishZip.is_valid("2525"));
/// ```
pub trait Validate {
    /// What the validator inspects.
    type Input: ?Sized;

    /// `Ok(())` when the input passes, otherwise the reason it does not.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Boolean form of [`validate`](Self::validate), used at the predicate
    /// boundary where failures are data rather than errors.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================
