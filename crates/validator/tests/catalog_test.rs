//! Integration tests for the predicate catalog, driven by rule name.
//!
//! Every case goes through `Input::check`, so aliases, default arguments
//! and negation are exercised together with the predicate itself.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use sieve_validator::prelude::*;

fn check(value: Value, rule: &str, args: &[Value]) -> bool {
    Input::new(value)
        .check(rule, args)
        .unwrap_or_else(|e| panic!("{rule} failed to dispatch: {e}"))
}

// ============================================================================
// STRINGS AND TYPES
// ============================================================================

#[rstest]
#[case::is_string("isString")]
#[case::required("required")]
#[case::has_value("hasValue")]
fn plain_string_is_present(#[case] rule: &str) {
    assert!(check(json!("TestStringValue"), rule, &[]));
}

#[rstest]
#[case(json!("0"))]
#[case(json!(""))]
#[case(json!(0))]
fn empty_sentinels_are_not_required(#[case] value: Value) {
    assert!(!check(value.clone(), "required", &[]));
    assert!(check(value, "!required", &[]));
}

#[rstest]
#[case(json!("Is string"), "isString")]
#[case(json!(true), "isInt")]
#[case(json!(22.12), "isFloat")]
#[case(json!([1, 2, 3]), "isArray")]
#[case(json!({}), "isObject")]
#[case(json!(false), "isBool")]
#[case(json!("222.33"), "number")]
#[case(json!(100), "positive")]
#[case(json!(-100), "negative")]
fn data_types(#[case] value: Value, #[case] rule: &str) {
    assert!(check(value, rule, &[]));
}

#[test]
fn bounds_are_inclusive() {
    assert!(check(json!(10), "min", &[json!(10)]));
    assert!(check(json!(10), "max", &[json!(10)]));
    assert!(!check(json!(10), "moreThan", &[json!(10)]));
    assert!(check(json!("Lorem ipsum"), "length", &[json!(1), json!(11)]));
    assert!(!check(json!("Lorem ipsum"), "length", &[json!(1), json!(10)]));
    assert!(check(json!("22222"), "equalLength", &[json!(5)]));
}

#[test]
fn equality() {
    assert!(check(json!("hello"), "equal", &[json!("hello")]));
    assert!(check(json!("world"), "notEqual", &[json!("hello")]));
    assert!(!check(json!("10"), "isEqualTo", &[json!(10)]));
    assert!(check(json!("10"), "isLooselyEqualTo", &[json!(10)]));
    assert!(check(json!("b"), "isInArray", &[json!(["a", "b"])]));
}

// ============================================================================
// FORMATS
// ============================================================================

#[rstest]
#[case(json!("#CCC"), "isHexColor", true)]
#[case(json!("#F1F1F1"), "hex", true)]
#[case(json!("#F1F1F"), "hex", false)]
#[case(json!("john.doe-gmail.com"), "email", false)]
#[case(json!("+46 (0) 702-83 27 12"), "phone", true)]
#[case(json!("HelloWorld"), "atoZ", true)]
#[case(json!("welloworld"), "lowerAtoZ", true)]
#[case(json!("HELLOWORLD"), "upperAtoZ", true)]
#[case(json!("example.se"), "domain", true)]
#[case(json!("https://example.se"), "url", true)]
#[case(json!("1922-03-01"), "date", true)]
#[case(json!("MyStrongPass"), "lossyPassword", true)]
#[case(json!("My@StrongPass12"), "strictPassword", true)]
#[case(json!("MyStrongPass"), "strictPassword", false)]
fn formats(#[case] value: Value, #[case] rule: &str, #[case] expected: bool) {
    assert_eq!(check(value, rule, &[]), expected);
}

#[test]
fn zip_strips_formatting() {
    assert!(check(json!("252522"), "zip", &[json!(5)]));
    assert!(check(json!("252 52"), "zip", &[json!(5), json!(5)]));
    assert!(!check(json!("252 52"), "zip", &[json!(6)]));
}

#[test]
fn find_in_string() {
    assert!(check(json!("Hello world!"), "findInString", &[json!("world")]));
    assert!(check(json!("Hello world!"), "findInString", &[json!("world"), json!(6)]));
    assert!(!check(json!("Hello world!"), "findInString", &[json!("world"), json!(0)]));
}

#[test]
fn versions() {
    assert!(check(json!("1.2.3"), "validVersion", &[json!(true)]));
    assert!(check(json!("1.2.0"), "versionCompare", &[json!("1.2.0")]));
    assert!(check(json!("1.10.0"), "versionCompare", &[json!("1.9.0"), json!(">")]));
    assert!(!check(
        json!("1.2.0"),
        "versionCompare",
        &[json!("1.2.0"), json!("not-an-operator")]
    ));
}

#[test]
fn age_uses_the_clock() {
    assert!(check(json!("1988-08-21"), "age", &[json!(18)]));
    assert!(!check(json!("not a date"), "age", &[json!(18)]));
}

// ============================================================================
// IDENTITY NUMBERS
// ============================================================================

#[rstest]
#[case(json!("8808218329"), "socialNumber", false)]
#[case(json!("811228-9874"), "personalNumber", true)]
#[case(json!("4030000010001234"), "creditCard", true)]
#[case(json!("556016-0680"), "orgNumber", true)]
#[case(json!("SE556016068001"), "vatNumber", true)]
#[case(json!("811228-9874"), "isMale", true)]
#[case(json!("811228-9882"), "isFemale", true)]
fn identity_numbers(#[case] value: Value, #[case] rule: &str, #[case] expected: bool) {
    assert_eq!(check(value, rule, &[]), expected);
}

// ============================================================================
// HTTP
// ============================================================================

#[rstest]
#[case("GET")]
#[case("POST")]
#[case("PUT")]
#[case("DELETE")]
#[case("PATCH")]
#[case("HEAD")]
#[case("OPTIONS")]
#[case("options")]
fn request_methods(#[case] method: &str) {
    assert!(check(json!(method), "isRequestMethod", &[]));
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn one_of_and_all_of_by_name() {
    let one = json!({ "length": [120, 200], "isString": [] });
    let all = json!({ "length": [1, 200], "isString": [] });
    assert!(check(json!("Lorem ipsum"), "oneOf", &[one.clone()]));
    assert!(check(json!("Lorem ipsum"), "allOf", &[all]));
    assert!(!check(json!("Lorem ipsum"), "allOf", &[one]));
}

#[test]
fn combinators_propagate_unknown_rules() {
    let rules = json!({ "isString": [], "isBanana": [] });
    assert_eq!(
        Input::new("x").check("oneOf", &[rules]),
        Err(DispatchError::unknown("isBanana"))
    );
}

// ============================================================================
// DNS
// ============================================================================

fn offline_env() -> Environment {
    Environment::default().with_resolver(
        StaticResolver::new()
            .with_record("creativearmy.se", RecordType::Mx, "10 mail.creativearmy.se")
            .with_record("creativearmy.se", RecordType::A, "192.0.2.10"),
    )
}

#[test]
fn dns_rules_consult_the_resolver() {
    let mut email = Input::with_environment("daniel@creativearmy.se", offline_env());
    assert!(email.check("isDeliverableEmail", &[]).unwrap());

    let mut host = Input::with_environment("creativearmy.se", offline_env());
    assert!(host.check("isMxRecord", &[]).unwrap());
    assert!(host.check("isDnsRecord", &[json!("a")]).unwrap());
    assert_eq!(
        host.dispatch("dnsRecords", &[json!("MX")]).unwrap().passed(),
        Some(true)
    );

    let mut missing = Input::with_environment("examplethatwillfail.se", offline_env());
    assert!(!missing.check("isAddressRecord", &[]).unwrap());
    assert!(missing.check("notIsDns", &[]).unwrap());
}
