//! The rule registry and dispatcher.
//!
//! Every catalog rule has a canonical camelCase name (`isEmail`) and a
//! [`Rule`] variant. Names resolve through one table that also holds the
//! alias names (`email`, `required`, ...). A name that is not in the table
//! may still be the negated form of one that is: `!isPhone` or
//! `notIsPhone`.
//!
//! [`Rule::invoke`] decodes JSON arguments and calls the matching
//! [`Input`] predicate. Bad arguments are [`DispatchError`]s, never a
//! `false` verdict.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::input::Input;
//! use sieve_validator::rules::{Outcome, Rule, RuleRef};
//!
//! let rule = RuleRef::parse("notIsPhone").unwrap();
//! assert_eq!(rule.rule, Rule::IsPhone);
//! assert!(rule.negated);
//! assert_eq!(rule.display_name(), "notIsPhone");
//!
//! let mut input = Input::new("1.2.0");
//! let outcome = Rule::VersionCompare.invoke(&mut input, &[json!("1.2.0"), json!("==")]).unwrap();
//! assert!(matches!(outcome, Outcome::Bool(true)));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::dns::RecordType;
use crate::error::DispatchError;
use crate::input::{Input, coerce};

// ============================================================================
// RULE TABLE
// ============================================================================

macro_rules! rule_table {
    ($( $variant:ident => $name:literal, )*) => {
        /// A catalog rule, named by its canonical name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl Rule {
            /// Every rule, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Canonical name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

rule_table! {
    IsString => "isString",
    IsInt => "isInt",
    IsFloat => "isFloat",
    IsNumber => "isNumber",
    IsNumbery => "isNumbery",
    IsArray => "isArray",
    IsObject => "isObject",
    IsBool => "isBool",
    IsNull => "isNull",
    IsResource => "isResource",
    IsTrue => "isTrue",
    IsFalse => "isFalse",
    IsTruthy => "isTruthy",
    IsFalsy => "isFalsy",
    IsBoolVal => "isBoolVal",
    IsRequired => "isRequired",
    HasValue => "hasValue",
    IsEqualTo => "isEqualTo",
    IsNotEqualTo => "isNotEqualTo",
    IsLooselyEqualTo => "isLooselyEqualTo",
    IsLooselyNotEqualTo => "isLooselyNotEqualTo",
    IsInArray => "isInArray",
    IsLooselyInArray => "isLooselyInArray",
    IsLessThan => "isLessThan",
    IsMoreThan => "isMoreThan",
    Min => "min",
    Max => "max",
    IsPositive => "isPositive",
    IsNegative => "isNegative",
    ToIntEqual => "toIntEqual",
    Length => "length",
    IsLengthEqualTo => "isLengthEqualTo",
    KeyExists => "keyExists",
    ItemsAreTruthy => "itemsAreTruthy",
    HasTruthyItem => "hasTruthyItem",
    IsArrayEmpty => "isArrayEmpty",
    IsCountEqualTo => "isCountEqualTo",
    IsCountMoreThan => "isCountMoreThan",
    IsCountLessThan => "isCountLessThan",
    IsEmail => "isEmail",
    IsUrl => "isUrl",
    IsDomain => "isDomain",
    IsPhone => "isPhone",
    IsZip => "isZip",
    IsHex => "isHex",
    IsMatchingPattern => "isMatchingPattern",
    IsAlpha => "isAlpha",
    IsLowerAlpha => "isLowerAlpha",
    IsUpperAlpha => "isUpperAlpha",
    Contains => "contains",
    StartsWith => "startsWith",
    EndsWith => "endsWith",
    FindInString => "findInString",
    IsLossyPassword => "isLossyPassword",
    IsStrictPassword => "isStrictPassword",
    IsValidVersion => "isValidVersion",
    VersionCompare => "versionCompare",
    IsDate => "isDate",
    IsDateWithTime => "isDateWithTime",
    IsTime => "isTime",
    IsAge => "isAge",
    DateRange => "dateRange",
    IsSocialNumber => "isSocialNumber",
    IsOrgNumber => "isOrgNumber",
    IsCreditCard => "isCreditCard",
    IsVatNumber => "isVatNumber",
    IsMale => "isMale",
    IsFemale => "isFemale",
    IsResolvableHost => "isResolvableHost",
    IsMxRecord => "isMxRecord",
    IsAddressRecord => "isAddressRecord",
    IsDnsRecord => "isDnsRecord",
    IsDeliverableEmail => "isDeliverableEmail",
    DnsRecords => "dnsRecords",
    IsHttpStatusCode => "isHttpStatusCode",
    IsHttp200 => "isHttp200",
    IsHttpSuccess => "isHttpSuccess",
    IsHttpClientError => "isHttpClientError",
    IsHttpServerError => "isHttpServerError",
    IsRequestMethod => "isRequestMethod",
    IsFile => "isFile",
    IsDir => "isDir",
    IsFileOrDirectory => "isFileOrDirectory",
    IsWritable => "isWritable",
    IsReadable => "isReadable",
    IsJson => "isJson",
    IsFullHtml => "isFullHtml",
    OneOf => "oneOf",
    AllOf => "allOf",
    Eq => "eq",
    ValidateInData => "validateInData",
}

/// Alternative names, resolved before negation.
const ALIASES: &[(&str, Rule)] = &[
    ("email", Rule::IsEmail),
    ("phone", Rule::IsPhone),
    ("zip", Rule::IsZip),
    ("url", Rule::IsUrl),
    ("domain", Rule::IsDomain),
    ("age", Rule::IsAge),
    ("date", Rule::IsDate),
    ("time", Rule::IsTime),
    ("dateTime", Rule::IsDateWithTime),
    ("hex", Rule::IsHex),
    ("isHexColor", Rule::IsHex),
    ("strictPassword", Rule::IsStrictPassword),
    ("lossyPassword", Rule::IsLossyPassword),
    ("validVersion", Rule::IsValidVersion),
    ("moreThan", Rule::IsMoreThan),
    ("lessThan", Rule::IsLessThan),
    ("equal", Rule::IsEqualTo),
    ("notEqual", Rule::IsNotEqualTo),
    ("equalLength", Rule::IsLengthEqualTo),
    ("positive", Rule::IsPositive),
    ("negative", Rule::IsNegative),
    ("number", Rule::IsNumber),
    ("minimum", Rule::Min),
    ("maximum", Rule::Max),
    ("pregMatch", Rule::IsMatchingPattern),
    ("atoZ", Rule::IsAlpha),
    ("lowerAtoZ", Rule::IsLowerAlpha),
    ("upperAtoZ", Rule::IsUpperAlpha),
    ("isStr", Rule::IsString),
    ("required", Rule::IsRequired),
    ("socialNumber", Rule::IsSocialNumber),
    ("personalNumber", Rule::IsSocialNumber),
    ("orgNumber", Rule::IsOrgNumber),
    ("creditCard", Rule::IsCreditCard),
    ("vatNumber", Rule::IsVatNumber),
    ("isDns", Rule::IsResolvableHost),
];

static REGISTRY: LazyLock<HashMap<&'static str, Rule>> = LazyLock::new(|| {
    Rule::ALL
        .iter()
        .map(|rule| (rule.name(), *rule))
        .chain(ALIASES.iter().copied())
        .collect()
});

impl Rule {
    /// Looks up a canonical or alias name. Negated forms are not resolved
    /// here; see [`RuleRef::parse`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTRY.get(name).copied()
    }

    /// Most arguments the rule accepts.
    #[must_use]
    pub const fn max_args(self) -> usize {
        match self {
            Self::ValidateInData => 3,
            Self::Length
            | Self::IsZip
            | Self::FindInString
            | Self::VersionCompare => 2,
            Self::IsEqualTo
            | Self::IsNotEqualTo
            | Self::IsLooselyEqualTo
            | Self::IsLooselyNotEqualTo
            | Self::IsInArray
            | Self::IsLooselyInArray
            | Self::IsLessThan
            | Self::IsMoreThan
            | Self::Min
            | Self::Max
            | Self::ToIntEqual
            | Self::IsLengthEqualTo
            | Self::KeyExists
            | Self::ItemsAreTruthy
            | Self::HasTruthyItem
            | Self::IsCountEqualTo
            | Self::IsCountMoreThan
            | Self::IsCountLessThan
            | Self::IsDomain
            | Self::IsMatchingPattern
            | Self::Contains
            | Self::StartsWith
            | Self::EndsWith
            | Self::IsLossyPassword
            | Self::IsStrictPassword
            | Self::IsValidVersion
            | Self::IsDate
            | Self::IsTime
            | Self::IsAge
            | Self::DateRange
            | Self::IsDnsRecord
            | Self::DnsRecords
            | Self::OneOf
            | Self::AllOf
            | Self::Eq => 1,
            _ => 0,
        }
    }

    /// Decodes `args` and evaluates the rule against `input`.
    ///
    /// `isZip` and `validateInData` replace the holder's value; every other
    /// rule only reads it.
    pub fn invoke(self, input: &mut Input, args: &[Value]) -> Result<Outcome, DispatchError> {
        let args = Args::new(self, args)?;

        let passed = match self {
            Self::IsString => input.is_string(),
            Self::IsInt => input.is_int(),
            Self::IsFloat => input.is_float(),
            Self::IsNumber => input.is_number(),
            Self::IsNumbery => input.is_numbery(),
            Self::IsArray => input.is_array(),
            Self::IsObject => input.is_object(),
            Self::IsBool => input.is_bool(),
            Self::IsNull => input.is_null(),
            Self::IsResource => input.is_resource(),
            Self::IsTrue => input.is_true(),
            Self::IsFalse => input.is_false(),
            Self::IsTruthy => input.is_truthy(),
            Self::IsFalsy => input.is_falsy(),
            Self::IsBoolVal => input.is_bool_val(),
            Self::IsRequired => input.is_required(),
            Self::HasValue => input.has_value(),
            Self::IsEqualTo => input.is_equal_to(args.value(0)?),
            Self::IsNotEqualTo => input.is_not_equal_to(args.value(0)?),
            Self::IsLooselyEqualTo => input.is_loosely_equal_to(args.value(0)?),
            Self::IsLooselyNotEqualTo => input.is_loosely_not_equal_to(args.value(0)?),
            Self::IsInArray => input.is_in_array(args.array(0)?),
            Self::IsLooselyInArray => input.is_loosely_in_array(args.array(0)?),
            Self::IsLessThan => input.is_less_than(args.number(0)?),
            Self::IsMoreThan => input.is_more_than(args.number(0)?),
            Self::Min => input.min(args.number(0)?),
            Self::Max => input.max(args.number(0)?),
            Self::IsPositive => input.is_positive(),
            Self::IsNegative => input.is_negative(),
            Self::ToIntEqual => input.to_int_equal(args.integer(0)?),
            Self::Length => input.length(args.count(0)?, args.opt_count(1)?),
            Self::IsLengthEqualTo => input.is_length_equal_to(args.count(0)?),
            Self::KeyExists => input.key_exists(args.key(0)?),
            Self::ItemsAreTruthy => input.items_are_truthy(args.key(0)?),
            Self::HasTruthyItem => input.has_truthy_item(args.key(0)?),
            Self::IsArrayEmpty => input.is_array_empty(),
            Self::IsCountEqualTo => input.is_count_equal_to(args.count(0)?),
            Self::IsCountMoreThan => input.is_count_more_than(args.count(0)?),
            Self::IsCountLessThan => input.is_count_less_than(args.count(0)?),
            Self::IsEmail => input.is_email(),
            Self::IsUrl => input.is_url(),
            Self::IsDomain => input.is_domain(args.opt_bool(0)?.unwrap_or(true)),
            Self::IsPhone => input.is_phone(),
            Self::IsZip => input.is_zip(args.count(0)?, args.opt_count(1)?),
            Self::IsHex => input.is_hex(),
            Self::IsMatchingPattern => input.is_matching_pattern(args.string(0)?),
            Self::IsAlpha => input.is_alpha(),
            Self::IsLowerAlpha => input.is_lower_alpha(),
            Self::IsUpperAlpha => input.is_upper_alpha(),
            Self::Contains => input.contains(args.string(0)?),
            Self::StartsWith => input.starts_with(args.string(0)?),
            Self::EndsWith => input.ends_with(args.string(0)?),
            Self::FindInString => input.find_in_string(args.string(0)?, args.opt_count(1)?),
            Self::IsLossyPassword => input.is_lossy_password(args.opt_count(0)?.unwrap_or(1)),
            Self::IsStrictPassword => input.is_strict_password(args.opt_count(0)?.unwrap_or(1)),
            Self::IsValidVersion => input.is_valid_version(args.opt_bool(0)?.unwrap_or(false)),
            Self::VersionCompare => input.version_compare(
                args.string(0)?,
                args.opt_string(1)?.unwrap_or("=="),
            ),
            Self::IsDate => input.is_date(args.opt_string(0)?),
            Self::IsDateWithTime => input.is_date_with_time(),
            Self::IsTime => input.is_time(args.opt_bool(0)?.unwrap_or(false)),
            Self::IsAge => input.is_age(args.year_count(0)?),
            Self::DateRange => {
                return Ok(input
                    .date_range(args.opt_string(0)?)
                    .map_or(Outcome::Bool(false), Outcome::Structured));
            }
            Self::IsSocialNumber => input.is_social_number(),
            Self::IsOrgNumber => input.is_org_number(),
            Self::IsCreditCard => input.is_credit_card(),
            Self::IsVatNumber => input.is_vat_number(),
            Self::IsMale => input.is_male(),
            Self::IsFemale => input.is_female(),
            Self::IsResolvableHost => input.is_resolvable_host(),
            Self::IsMxRecord => input.is_mx_record(),
            Self::IsAddressRecord => input.is_address_record(),
            Self::IsDnsRecord => input.is_dns_record(args.record_type(0)?),
            Self::IsDeliverableEmail => input.is_deliverable_email(),
            Self::DnsRecords => {
                return Ok(input
                    .dns_records(args.record_type(0)?)
                    .map_or(Outcome::NotFound, Outcome::Structured));
            }
            Self::IsHttpStatusCode => input.is_http_status_code(),
            Self::IsHttp200 => input.is_http_200(),
            Self::IsHttpSuccess => input.is_http_success(),
            Self::IsHttpClientError => input.is_http_client_error(),
            Self::IsHttpServerError => input.is_http_server_error(),
            Self::IsRequestMethod => input.is_request_method(),
            Self::IsFile => input.is_file(),
            Self::IsDir => input.is_dir(),
            Self::IsFileOrDirectory => input.is_file_or_directory(),
            Self::IsWritable => input.is_writable(),
            Self::IsReadable => input.is_readable(),
            Self::IsJson => input.is_json(),
            Self::IsFullHtml => input.is_full_html(),
            Self::OneOf => input.one_of(&args.rule_set(0)?)?,
            Self::AllOf => input.all_of(&args.rule_set(0)?)?,
            Self::Eq => {
                return Ok(Outcome::Traversal(Box::new(input.traverse(args.string(0)?))));
            }
            Self::ValidateInData => {
                let nested = args.opt_array(2)?.unwrap_or_default();
                input.validate_in_data(args.string(0)?, args.string(1)?, nested)?
            }
        };

        Ok(Outcome::Bool(passed))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// NAME RESOLUTION
// ============================================================================

/// A rule name as dispatched: the rule, its polarity and the name written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRef {
    /// The resolved rule.
    pub rule: Rule,
    /// Whether the verdict is inverted.
    pub negated: bool,
    /// The name without any negation marker (`email` stays `email`).
    pub name: String,
}

impl RuleRef {
    /// Resolves a name: exact (canonical or alias) first, then `!name`,
    /// then `notName`.
    pub fn parse(name: &str) -> Result<Self, DispatchError> {
        if let Some(rule) = Rule::from_name(name) {
            return Ok(Self::new(rule, false, name));
        }

        if let Some(base) = name.strip_prefix('!') {
            return Rule::from_name(base)
                .map(|rule| Self::new(rule, true, base))
                .ok_or_else(|| DispatchError::unknown(name));
        }

        name.strip_prefix("not")
            .and_then(decapitalize)
            .and_then(|base| Rule::from_name(&base).map(|rule| Self::new(rule, true, &base)))
            .ok_or_else(|| DispatchError::unknown(name))
    }

    fn new(rule: Rule, negated: bool, name: &str) -> Self {
        Self {
            rule,
            negated,
            name: name.to_owned(),
        }
    }

    /// A typed reference under the canonical name.
    #[must_use]
    pub fn from_rule(rule: Rule, negated: bool) -> Self {
        Self::new(rule, negated, rule.name())
    }

    /// Name recorded in failure maps: the written name, or `not` plus the
    /// capitalised name when negated.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.negated {
            format!("not{}", capitalize(&self.name))
        } else {
            self.name.clone()
        }
    }
}

/// `isPhone` -> `IsPhone`.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// `IsPhone` -> `isPhone`; `None` unless the first letter is uppercase.
fn decapitalize(name: &str) -> Option<String> {
    let mut chars = name.chars();
    let first = chars.next().filter(char::is_ascii_uppercase)?;
    Some(first.to_ascii_lowercase().to_string() + chars.as_str())
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// What evaluating a rule produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// A verdict.
    Bool(bool),
    /// A successful structured result (`dateRange`, `dnsRecords`).
    Structured(Value),
    /// A structured rule found nothing.
    NotFound,
    /// A traversal rule produced a new holder (`eq`).
    Traversal(Box<Input>),
}

impl Outcome {
    /// The verdict: structured results pass, `NotFound` fails, traversal
    /// has none.
    #[must_use]
    pub fn passed(&self) -> Option<bool> {
        match self {
            Self::Bool(passed) => Some(*passed),
            Self::Structured(_) => Some(true),
            Self::NotFound => Some(false),
            Self::Traversal(_) => None,
        }
    }

    /// Inverts the verdict; traversal outcomes are returned unchanged.
    #[must_use]
    pub fn negate(self) -> Self {
        match self.passed() {
            Some(passed) => Self::Bool(!passed),
            None => self,
        }
    }
}

// ============================================================================
// RULE SETS
// ============================================================================

/// Ordered rule names with their arguments, the operand of `oneOf` and
/// `allOf`.
///
/// A name appears once; adding it again replaces its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: IndexMap<String, Vec<Value>>,
}

impl RuleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, name: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        self.rules.insert(name.into(), args.into_iter().collect());
        self
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.rules
            .iter()
            .map(|(name, args)| (name.as_str(), args.as_slice()))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Reads `{ "name": [args...] }`. A null entry means no arguments and
    /// any other scalar is a single argument.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        map.iter().fold(Self::new(), |set, (name, args)| match args {
            Value::Array(items) => set.rule(name.clone(), items.iter().cloned()),
            Value::Null => set.rule(name.clone(), []),
            other => set.rule(name.clone(), [other.clone()]),
        })
    }
}

// ============================================================================
// ARGUMENT DECODING
// ============================================================================

/// Positional arguments for one rule invocation.
struct Args<'a> {
    rule: Rule,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(rule: Rule, values: &'a [Value]) -> Result<Self, DispatchError> {
        let max = rule.max_args();
        if values.len() > max {
            return Err(DispatchError::TooManyArguments {
                rule: rule.name(),
                max,
                given: values.len(),
            });
        }
        Ok(Self { rule, values })
    }

    fn invalid(&self, index: usize, expected: &'static str) -> DispatchError {
        DispatchError::InvalidArgument {
            rule: self.rule.name(),
            index,
            expected,
        }
    }

    /// A required argument of any kind, null included.
    fn value(&self, index: usize) -> Result<&'a Value, DispatchError> {
        self.values.get(index).ok_or(DispatchError::MissingArgument {
            rule: self.rule.name(),
            index,
        })
    }

    /// An optional argument; null counts as absent.
    fn optional(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|v| !v.is_null())
    }

    fn decode<T>(
        &self,
        index: usize,
        expected: &'static str,
        read: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, DispatchError> {
        self.optional(index)
            .map(|value| read(value).ok_or_else(|| self.invalid(index, expected)))
            .transpose()
    }

    fn required<T>(
        &self,
        index: usize,
        expected: &'static str,
        read: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, DispatchError> {
        let value = self.value(index)?;
        read(value).ok_or_else(|| self.invalid(index, expected))
    }

    fn number(&self, index: usize) -> Result<f64, DispatchError> {
        self.required(index, "a number", coerce::to_number)
    }

    fn integer(&self, index: usize) -> Result<i64, DispatchError> {
        self.required(index, "an integer", read_integer)
    }

    fn year_count(&self, index: usize) -> Result<i32, DispatchError> {
        self.required(index, "an integer", |v| {
            read_integer(v).and_then(|n| i32::try_from(n).ok())
        })
    }

    fn count(&self, index: usize) -> Result<usize, DispatchError> {
        self.required(index, "a non-negative integer", read_count)
    }

    fn opt_count(&self, index: usize) -> Result<Option<usize>, DispatchError> {
        self.decode(index, "a non-negative integer", read_count)
    }

    fn string(&self, index: usize) -> Result<&'a str, DispatchError> {
        self.required(index, "a string", Value::as_str)
    }

    fn opt_string(&self, index: usize) -> Result<Option<&'a str>, DispatchError> {
        self.decode(index, "a string", Value::as_str)
    }

    fn opt_bool(&self, index: usize) -> Result<Option<bool>, DispatchError> {
        self.decode(index, "a boolean", Value::as_bool)
    }

    fn array(&self, index: usize) -> Result<&'a [Value], DispatchError> {
        self.required(index, "an array", |v| v.as_array().map(Vec::as_slice))
    }

    fn opt_array(&self, index: usize) -> Result<Option<&'a [Value]>, DispatchError> {
        self.decode(index, "an array", |v| v.as_array().map(Vec::as_slice))
    }

    fn key(&self, index: usize) -> Result<&'a Value, DispatchError> {
        self.required(index, "a string or integer key", |v| {
            (v.is_string() || v.is_u64()).then_some(v)
        })
    }

    fn record_type(&self, index: usize) -> Result<RecordType, DispatchError> {
        self.required(index, "a DNS record type", |v| {
            v.as_str().and_then(|s| s.parse().ok())
        })
    }

    fn rule_set(&self, index: usize) -> Result<RuleSet, DispatchError> {
        self.required(index, "an object of rule names to argument lists", |v| {
            v.as_object().map(RuleSet::from_map)
        })
    }
}

fn read_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_count(value: &Value) -> Option<usize> {
    read_integer(value).and_then(|n| usize::try_from(n).ok())
}

// ============================================================================
// TESTS
// ============================================================================
