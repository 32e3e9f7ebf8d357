//! The validation chain.
//!
//! A [`ValidationChain`] holds one value and records the verdict of every
//! rule run against it. Records are grouped by key: a caller-chosen name
//! set with [`ValidationChain::map_error_to_key`], or an anonymous slot per
//! invocation. Inside a group each rule is stored under its display name,
//! so running the same rule twice in one named group keeps the last result.
//!
//! Every invocation validates a fresh [`Input`] built from the chain's
//! value. Rules that rewrite their holder (`isZip`) never change what the
//! next rule sees.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::chain::ValidationChain;
//!
//! let mut chain = ValidationChain::new("john.doe@gmail.com");
//! chain
//!     .check("isEmail", &[])?
//!     .check("length", &[json!(1), json!(16)])?
//!     .check("notIsPhone", &[])?
//!     .check("endsWith", &[json!(".net")])?;
//!
//! assert!(chain.has_error());
//! let failed: usize = chain.failed_validations().values().map(|rules| rules.len()).sum();
//! assert_eq!(failed, 2);
//! # Ok::<(), sieve_validator::error::DispatchError>(())
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::config::Environment;
use crate::error::DispatchError;
use crate::foundation::{ValidationError, ValidationErrors};
use crate::input::Input;
use crate::rules::{Rule, RuleRef};

// ============================================================================
// RECORD TYPES
// ============================================================================

/// Where a rule's record is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// A caller-chosen key.
    Named(String),
    /// An unnamed slot, one per invocation.
    Anonymous(usize),
}

impl GroupKey {
    /// The caller-chosen key, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Anonymous(_) => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Anonymous(index) => write!(f, "#{index}"),
        }
    }
}

/// The recorded result of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleRecord {
    /// The rule passed.
    Passed,
    /// The rule failed; the arguments it was invoked with.
    Failed(Vec<Value>),
}

impl RuleRecord {
    /// Arguments of a failed rule.
    #[must_use]
    pub fn failure(&self) -> Option<&[Value]> {
        match self {
            Self::Passed => None,
            Self::Failed(args) => Some(args),
        }
    }
}

/// Failed rules by group, each with the arguments it was invoked with.
pub type FailureMap = IndexMap<GroupKey, IndexMap<String, Vec<Value>>>;

/// One explicit rule invocation, with no pending chain state involved.
#[derive(Debug, Clone, Copy)]
pub struct RuleInvocation<'a> {
    /// Rule name; `!` and `not` prefixes negate.
    pub name: &'a str,
    /// Positional arguments.
    pub arguments: &'a [Value],
    /// Group to record under; an anonymous slot when `None`.
    pub group_key: Option<&'a str>,
    /// Name to record under; the rule's display name when `None`.
    pub display_name: Option<&'a str>,
}

impl<'a> RuleInvocation<'a> {
    /// An invocation recorded under an anonymous slot and the display name.
    #[must_use]
    pub fn new(name: &'a str, arguments: &'a [Value]) -> Self {
        Self {
            name,
            arguments,
            group_key: None,
            display_name: None,
        }
    }

    /// Records under `key`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_group_key(mut self, key: &'a str) -> Self {
        self.group_key = Some(key);
        self
    }

    /// Records under `name` instead of the display name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display_name(mut self, name: &'a str) -> Self {
        self.display_name = Some(name);
        self
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// Runs named rules against one value and keeps a failure map.
#[derive(Debug, Clone)]
pub struct ValidationChain {
    value: Value,
    env: Environment,
    records: IndexMap<GroupKey, IndexMap<String, RuleRecord>>,
    next_anonymous: usize,
    pending_key: Option<String>,
    pending_name: Option<String>,
}

impl ValidationChain {
    /// Creates a chain using the default environment.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_environment(value, Environment::default())
    }

    /// Creates a chain with an explicit environment.
    pub fn with_environment(value: impl Into<Value>, env: Environment) -> Self {
        Self {
            value: value.into(),
            env,
            records: IndexMap::new(),
            next_anonymous: 0,
            pending_key: None,
            pending_name: None,
        }
    }

    /// The value under validation.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Records the next invocation under `key`. Consumed by that invocation.
    pub fn map_error_to_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.pending_key = Some(key.into());
        self
    }

    /// Records the next invocation under `name` instead of the rule's
    /// display name. Consumed by that invocation.
    pub fn map_error_validation_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.pending_name = Some(name.into());
        self
    }

    /// Runs a named rule and returns its verdict.
    ///
    /// Pending key and name are consumed even when dispatch fails.
    pub fn validate_with(&mut self, name: &str, args: &[Value]) -> Result<bool, DispatchError> {
        let key = self.pending_key.take();
        let display = self.pending_name.take();
        let rule = RuleRef::parse(name)?;
        self.run(&rule, args, key, display)
    }

    /// Fluent form of [`validate_with`](Self::validate_with).
    pub fn check(&mut self, name: &str, args: &[Value]) -> Result<&mut Self, DispatchError> {
        self.validate_with(name, args)?;
        Ok(self)
    }

    /// Runs a typed rule.
    pub fn rule(&mut self, rule: Rule, args: &[Value]) -> Result<bool, DispatchError> {
        self.typed(rule, false, args)
    }

    /// Runs a typed rule, negated.
    pub fn not(&mut self, rule: Rule, args: &[Value]) -> Result<bool, DispatchError> {
        self.typed(rule, true, args)
    }

    fn typed(&mut self, rule: Rule, negated: bool, args: &[Value]) -> Result<bool, DispatchError> {
        let key = self.pending_key.take();
        let display = self.pending_name.take();
        self.run(&RuleRef::from_rule(rule, negated), args, key, display)
    }

    /// Runs an explicit invocation. Pending key and name are left alone.
    pub fn invoke(&mut self, invocation: RuleInvocation<'_>) -> Result<bool, DispatchError> {
        let rule = RuleRef::parse(invocation.name)?;
        self.run(
            &rule,
            invocation.arguments,
            invocation.group_key.map(str::to_owned),
            invocation.display_name.map(str::to_owned),
        )
    }

    fn run(
        &mut self,
        rule: &RuleRef,
        args: &[Value],
        key: Option<String>,
        display: Option<String>,
    ) -> Result<bool, DispatchError> {
        let mut input = Input::with_environment(self.value.clone(), self.env.clone());
        let outcome = rule.rule.invoke(&mut input, args)?;
        let passed = outcome.passed().ok_or(DispatchError::UnsupportedInChain {
            rule: rule.rule.name(),
        })? != rule.negated;

        let group = key.map_or_else(
            || {
                let slot = GroupKey::Anonymous(self.next_anonymous);
                self.next_anonymous += 1;
                slot
            },
            GroupKey::Named,
        );
        let name = display.unwrap_or_else(|| rule.display_name());

        debug!(
            rule = %rule.rule,
            negated = rule.negated,
            passed,
            group = %group,
            "rule dispatched"
        );

        let record = if passed {
            RuleRecord::Passed
        } else {
            RuleRecord::Failed(args.to_vec())
        };
        self.records.entry(group).or_default().insert(name, record);
        Ok(passed)
    }

    // ========================================================================
    // RESULTS
    // ========================================================================

    /// Every record, passed and failed, in invocation order.
    #[must_use]
    pub fn records(&self) -> &IndexMap<GroupKey, IndexMap<String, RuleRecord>> {
        &self.records
    }

    /// Failed rules only; groups without failures are left out.
    #[must_use]
    pub fn failed_validations(&self) -> FailureMap {
        self.records
            .iter()
            .filter_map(|(group, rules)| {
                let failed: IndexMap<String, Vec<Value>> = rules
                    .iter()
                    .filter_map(|(name, record)| {
                        record.failure().map(|args| (name.clone(), args.to_vec()))
                    })
                    .collect();
                (!failed.is_empty()).then(|| (group.clone(), failed))
            })
            .collect()
    }

    /// At least one recorded rule failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.records
            .values()
            .flat_map(IndexMap::values)
            .any(|record| record.failure().is_some())
    }

    /// No recorded rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_error()
    }

    /// The failures as a structured report: code is the recorded rule name,
    /// field the named group key, params the arguments.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.records
            .iter()
            .flat_map(|(group, rules)| {
                rules.iter().filter_map(move |(name, record)| {
                    let args = record.failure()?;
                    let error = ValidationError::rule_failed(name.clone(), args);
                    Some(match group.name() {
                        Some(field) => error.with_field(field.to_owned()),
                        None => error,
                    })
                })
            })
            .collect()
    }

    /// Consumes the chain: `Ok(value)` when nothing failed, otherwise the
    /// report.
    pub fn into_result(self) -> Result<Value, ValidationErrors> {
        let errors = self.errors();
        errors.into_result(self.value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
