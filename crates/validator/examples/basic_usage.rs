//! Basic usage example for sieve-validator

use serde_json::json;
use sieve_validator::prelude::*;

fn main() -> Result<(), DispatchError> {
    // A single value, checked by name
    let mut zip = Input::new("252 52");
    if zip.check("zip", &[json!(5)])? {
        println!("✓ '252 52' is a zip code, stored as {}", zip.value());
    }

    // A chain with a failure map
    let mut chain = ValidationChain::new("john.doe@gmail.com");
    chain.map_error_to_key("email").check("isEmail", &[])?;
    chain
        .map_error_to_key("email")
        .check("length", &[json!(1), json!(16)])?;
    chain.check("notIsPhone", &[])?.check("endsWith", &[json!(".net")])?;

    for (group, rules) in chain.failed_validations() {
        for (rule, args) in rules {
            println!("✗ {group}: {rule} {args:?}");
        }
    }

    // Checksums on their own
    let ssn = LuhnIdentifier::new("811228-9874");
    println!("✓ personal number valid: {}", ssn.is_personal_number(2026));

    // Typed validators with detailed errors
    if let Err(e) = email().validate("john.doe-gmail.com") {
        println!("✗ 'john.doe-gmail.com': {e}");
    }

    println!("\nsieve-validator is working correctly!");
    Ok(())
}
