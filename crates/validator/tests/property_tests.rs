//! Property-based tests for sieve-validator.

use proptest::prelude::*;
use serde_json::{Value, json};
use sieve_validator::prelude::*;

// ============================================================================
// LENGTH: derived from the string form, counted in characters
// ============================================================================

proptest! {
    #[test]
    fn length_counts_characters(s in "\\PC{0,40}") {
        let input = Input::new(s.as_str());
        prop_assert_eq!(input.get_length(), s.chars().count());
        prop_assert_eq!(input.string_view(), Some(s.as_str()));
    }

    #[test]
    fn integers_measure_their_digits(n in any::<i64>()) {
        prop_assert_eq!(Input::new(n).get_length(), n.to_string().len());
    }

    #[test]
    fn length_rule_matches_bounds(s in "[a-zåäö ]{0,30}", min in 0usize..20, span in 0usize..20) {
        let max = min + span;
        let count = s.chars().count();
        let passed = Input::new(s.as_str())
            .check("length", &[json!(min), json!(max)])
            .unwrap();
        prop_assert_eq!(passed, (min..=max).contains(&count));
    }
}

// ============================================================================
// REPEATABILITY: read-only rules give the same answer twice
// ============================================================================

proptest! {
    #[test]
    fn read_only_rules_are_repeatable(s in "[0-9a-z@.+() -]{0,24}", bound in -50i64..50) {
        let mut input = Input::new(s.as_str());
        let value = input.value().clone();
        let length = input.get_length();

        for (rule, args) in [
            ("isString", vec![]),
            ("min", vec![json!(bound)]),
            ("isEmail", vec![]),
            ("isPhone", vec![]),
        ] {
            let first = input.check(rule, &args).unwrap();
            let second = input.check(rule, &args).unwrap();
            prop_assert_eq!(first, second, "{} changed its answer", rule);
            prop_assert_eq!(input.value(), &value);
            prop_assert_eq!(input.get_length(), length);
        }
    }
}

// ============================================================================
// NEGATION: !rule and notRule always invert rule
// ============================================================================

proptest! {
    #[test]
    fn negated_forms_invert(s in ".{0,30}") {
        for (rule, bang, not) in [
            ("isEmail", "!isEmail", "notIsEmail"),
            ("isPhone", "!isPhone", "notIsPhone"),
            ("isInt", "!isInt", "notIsInt"),
            ("zip", "!zip", "notZip"),
        ] {
            let args = if rule == "zip" { vec![json!(5)] } else { vec![] };
            let plain = Input::new(s.as_str()).check(rule, &args).unwrap();
            prop_assert_eq!(Input::new(s.as_str()).check(bang, &args).unwrap(), !plain);
            prop_assert_eq!(Input::new(s.as_str()).check(not, &args).unwrap(), !plain);
        }
    }
}

// ============================================================================
// COMBINATORS: oneOf is any, allOf is all
// ============================================================================

proptest! {
    #[test]
    fn combinators_agree_with_members(s in "[0-9a-z@. ]{0,20}") {
        let rules = RuleSet::new()
            .rule("isInt", [])
            .rule("isEmail", [])
            .rule("length", [json!(3), json!(8)]);
        let verdicts: Vec<bool> = rules
            .iter()
            .map(|(name, args)| Input::new(s.as_str()).check(name, args).unwrap())
            .collect();

        let input = Input::new(s.as_str());
        prop_assert_eq!(input.one_of(&rules).unwrap(), verdicts.iter().any(|v| *v));
        prop_assert_eq!(input.all_of(&rules).unwrap(), verdicts.iter().all(|v| *v));
    }
}

// ============================================================================
// CHAIN: failure map counts exactly the failing rules
// ============================================================================

proptest! {
    #[test]
    fn chain_records_every_failure(s in "[0-9a-z@.]{0,20}") {
        let rules: [(&str, Vec<Value>); 4] = [
            ("isString", vec![]),
            ("isInt", vec![]),
            ("isEmail", vec![]),
            ("length", vec![json!(5), json!(10)]),
        ];

        let mut chain = ValidationChain::new(s.as_str());
        let mut failures = 0;
        for (name, args) in &rules {
            if !chain.validate_with(name, args).unwrap() {
                failures += 1;
            }
        }

        let recorded: usize = chain.failed_validations().values().map(|rules| rules.len()).sum();
        prop_assert_eq!(recorded, failures);
        prop_assert_eq!(chain.errors().len(), failures);
        prop_assert_eq!(chain.is_valid(), failures == 0);
    }
}

// ============================================================================
// LUHN: appending the check digit makes a valid payload
// ============================================================================

proptest! {
    #[test]
    fn check_digit_closes_payload(payload in "[0-9]{1,18}") {
        let check = luhn_check(&payload);
        prop_assert!(check < 10);
        // luhn_check weighs from the first digit, so only even-length
        // payloads keep their weights once the digit is appended.
        if payload.len() % 2 == 1 {
            prop_assert_eq!(luhn_check(&format!("{payload}{check}")), 0);
        }
    }

    #[test]
    fn org_number_check_digit(payload in "[0-9]{9}") {
        let check = luhn_check(&payload);
        let id = LuhnIdentifier::new(&format!("{payload}{check}"));
        prop_assert!(id.is_org_number());
    }
}
