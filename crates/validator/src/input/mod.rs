//! The value holder.
//!
//! [`Input`] wraps one value under validation and keeps two derived facts
//! in step with it:
//!
//! - `length`: Unicode scalar count of the string form (strings and numbers
//!   only, 0 otherwise)
//! - the string view: the string form itself, absent for booleans, null,
//!   arrays and objects
//!
//! Every replacement of the value goes through one place that re-derives
//! both. Predicates are methods on [`Input`], grouped by topic in the
//! submodules; they return `bool` and never fail.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::input::Input;
//!
//! let input = Input::new("é");
//! assert_eq!(input.get_length(), 1);
//!
//! let user = Input::new(json!({ "user": { "name": "Jane" } }));
//! assert!(user.traverse("user.name").is_string());
//! assert_eq!(user.traverse("user.age").value(), &json!(false));
//! ```

pub(crate) mod coerce;
mod collections;
mod filesystem;
mod identity;
mod network;
mod numeric;
mod strings;
mod temporal;
mod types;

use serde_json::Value;
use tracing::trace;

use crate::config::Environment;
use crate::error::DispatchError;
use crate::rules::{Outcome, RuleRef, RuleSet};
use crate::validators::char_length;

/// A value under validation.
#[derive(Debug, Clone)]
pub struct Input {
    raw: Value,
    length: usize,
    string_view: Option<String>,
    env: Environment,
}

impl Input {
    /// Wraps a value using the default environment.
    ///
    /// The default environment captures "now" at construction.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_environment(value, Environment::default())
    }

    /// Wraps a value with an explicit environment.
    pub fn with_environment(value: impl Into<Value>, env: Environment) -> Self {
        let mut input = Self {
            raw: Value::Null,
            length: 0,
            string_view: None,
            env,
        };
        input.replace_value(value.into());
        input
    }

    /// A new holder for another value, sharing this holder's environment.
    ///
    /// `self` is left untouched.
    #[must_use]
    pub fn with_value(&self, value: impl Into<Value>) -> Self {
        Self::with_environment(value, self.env.clone())
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.raw
    }

    /// Consumes the holder, returning the current value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.raw
    }

    /// Unicode scalar count of the string form.
    #[must_use]
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// The string form, for strings and numbers.
    #[must_use]
    pub fn string_view(&self) -> Option<&str> {
        self.string_view.as_deref()
    }

    /// The environment this holder evaluates in.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Replaces the value and re-derives length and string view.
    pub(crate) fn replace_value(&mut self, value: Value) {
        self.string_view = match &value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };
        self.length = self.string_view.as_deref().map_or(0, char_length);
        self.raw = value;
        trace!(length = self.length, "value derived");
    }

    // ========================================================================
    // TRAVERSAL
    // ========================================================================

    /// Looks up a dot-separated path inside arrays and objects.
    ///
    /// Array segments are zero-based indexes. `None` when any segment is
    /// missing, which is distinct from finding `null` or `false`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.raw, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// A new holder for the value at `path`; `false` when the path is
    /// missing. `self` is left untouched.
    #[must_use]
    pub fn traverse(&self, path: &str) -> Self {
        match self.find(path) {
            Some(found) => {
                trace!(path, "traversal hit");
                self.with_value(found.clone())
            }
            None => {
                trace!(path, "traversal miss");
                self.with_value(Value::Bool(false))
            }
        }
    }

    /// Replaces this holder's value with the value at `path`.
    ///
    /// Returns `false`, leaving the value as it was, when the path is
    /// missing.
    pub fn traverse_mut(&mut self, path: &str) -> bool {
        match self.find(path).cloned() {
            Some(found) => {
                trace!(path, "traversal hit, replacing value");
                self.replace_value(found);
                true
            }
            None => {
                trace!(path, "traversal miss");
                false
            }
        }
    }

    /// Moves to `path` and evaluates a named rule there.
    ///
    /// On a hit the holder's value is replaced by the found value; on a miss
    /// the rule sees `false`.
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::input::Input;
    ///
    /// let mut input = Input::new(json!({ "user": { "name": "Jane" } }));
    /// assert!(input.validate_in_data("user.name", "length", &[json!(1), json!(200)]).unwrap());
    /// assert_eq!(input.value(), &json!("Jane"));
    /// ```
    pub fn validate_in_data(
        &mut self,
        path: &str,
        rule: &str,
        args: &[Value],
    ) -> Result<bool, DispatchError> {
        if self.traverse_mut(path) {
            self.check(rule, args)
        } else {
            self.with_value(Value::Bool(false)).check(rule, args)
        }
    }

    // ========================================================================
    // NAMED DISPATCH
    // ========================================================================

    /// Evaluates a named rule, negated form included, and returns the raw
    /// outcome.
    pub fn dispatch(&mut self, name: &str, args: &[Value]) -> Result<Outcome, DispatchError> {
        let rule = RuleRef::parse(name)?;
        let outcome = rule.rule.invoke(self, args)?;
        Ok(if rule.negated { outcome.negate() } else { outcome })
    }

    /// Evaluates a named rule to a verdict.
    ///
    /// Structured results count as a pass. Rules that produce a traversed
    /// value are rejected with [`DispatchError::UnsupportedInChain`].
    pub fn check(&mut self, name: &str, args: &[Value]) -> Result<bool, DispatchError> {
        let rule = RuleRef::parse(name)?;
        let outcome = rule.rule.invoke(self, args)?;
        let passed = outcome.passed().ok_or(DispatchError::UnsupportedInChain {
            rule: rule.rule.name(),
        })?;
        Ok(passed != rule.negated)
    }

    // ========================================================================
    // COMBINATORS
    // ========================================================================

    /// True when at least one rule passes.
    ///
    /// Every rule is evaluated, each against a fresh copy of the value, so
    /// an unknown rule name anywhere in the set is reported.
    ///
    /// ```
    /// use serde_json::json;
    /// use sieve_validator::input::Input;
    /// use sieve_validator::rules::RuleSet;
    ///
    /// let rules = RuleSet::new()
    ///     .rule("length", [json!(120), json!(200)])
    ///     .rule("isString", []);
    /// let input = Input::new("Lorem ipsum");
    /// assert!(input.one_of(&rules).unwrap());
    /// assert!(!input.all_of(&rules).unwrap());
    /// ```
    pub fn one_of(&self, rules: &RuleSet) -> Result<bool, DispatchError> {
        let mut any = false;
        for (name, args) in rules.iter() {
            let mut probe = self.with_value(self.raw.clone());
            any |= probe.check(name, args)?;
        }
        Ok(any)
    }

    /// True when every rule passes, stopping at the first failure.
    ///
    /// Each rule runs against a fresh copy of the value.
    pub fn all_of(&self, rules: &RuleSet) -> Result<bool, DispatchError> {
        for (name, args) in rules.iter() {
            let mut probe = self.with_value(self.raw.clone());
            if !probe.check(name, args)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// ============================================================================
// TESTS
// ============================================================================
