//! Dispatch errors.
//!
//! A rule that evaluates to `false` is a validation failure and is recorded
//! as data. The errors here are programmer errors: the rule could not be
//! evaluated at all. They are never folded into a boolean.

/// Failure to resolve or invoke a named rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No rule, alias or negated form has this name.
    #[error("Validation rule '{name}' does not exist")]
    UnknownRule {
        /// Name as it was dispatched.
        name: String,
    },

    /// The rule yields a traversed value rather than a verdict.
    #[error("Rule '{rule}' is not supported in a validation chain, use 'validateInData' instead")]
    UnsupportedInChain {
        /// Canonical rule name.
        rule: &'static str,
    },

    /// A required argument was not supplied.
    #[error("Rule '{rule}' is missing argument {index}")]
    MissingArgument {
        /// Canonical rule name.
        rule: &'static str,
        /// Zero-based argument position.
        index: usize,
    },

    /// An argument has the wrong type or an unusable value.
    #[error("Rule '{rule}' argument {index} must be {expected}")]
    InvalidArgument {
        /// Canonical rule name.
        rule: &'static str,
        /// Zero-based argument position.
        index: usize,
        /// What the argument should have been.
        expected: &'static str,
    },

    /// More arguments than the rule accepts.
    #[error("Rule '{rule}' takes at most {max} argument(s), {given} given")]
    TooManyArguments {
        /// Canonical rule name.
        rule: &'static str,
        /// Accepted maximum.
        max: usize,
        /// Supplied count.
        given: usize,
    },
}

impl DispatchError {
    /// Unknown rule name.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }
}
