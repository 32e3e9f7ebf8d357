//! Luhn checksum engine.
//!
//! [`LuhnIdentifier`] normalises an identifier once and answers every
//! checksum question about it: Swedish personal and organisation numbers,
//! payment card numbers and EU VAT numbers. Malformed input is never an
//! error here, it is simply not valid.
//!
//! ```
//! use sieve_validator::luhn::LuhnIdentifier;
//!
//! let card = LuhnIdentifier::new("4030 0000 1000 1234");
//! assert!(card.is_credit_card());
//!
//! let person = LuhnIdentifier::new("811228-9874");
//! assert!(person.is_personal_number(2026));
//! ```

mod card;
mod personal;
mod vat;

pub use card::CardIssuer;
pub use personal::{PersonalNumberParts, Separator};
pub use vat::{VatFormat, vat_format};

// ============================================================================
// CHECKSUM
// ============================================================================

/// Computes the Luhn check digit for a digit string.
///
/// Weights run `2, 1, 2, 1, ...` from the left; products above 9 have 9
/// subtracted. The result is the digit that would bring the sum up to the
/// next multiple of 10, so a string that already ends in its own correct
/// check digit yields 0 when the weights line up with it.
///
/// Non-digit characters are skipped.
///
/// ```
/// use sieve_validator::luhn::luhn_check;
///
/// assert_eq!(luhn_check("811228987"), 4);
/// assert_eq!(luhn_check("4030000010001234"), 0);
/// ```
#[must_use]
pub fn luhn_check(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| {
            let product = digit * (2 - (i as u32 % 2));
            if product > 9 { product - 9 } else { product }
        })
        .sum();

    (10 - sum % 10) % 10
}

// ============================================================================
// IDENTIFIER
// ============================================================================

/// An identifier normalised for checksum work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LuhnIdentifier {
    /// Every ASCII digit, in order.
    digits: String,
    /// Uppercased ASCII alphanumerics, in order.
    alnum: String,
    /// Digits plus any `+`/`-` separator, for personal number parsing.
    compact: String,
}

impl LuhnIdentifier {
    /// Normalises a raw identifier.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            digits: raw.chars().filter(char::is_ascii_digit).collect(),
            alnum: raw
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .map(|c| c.to_ascii_uppercase())
                .collect(),
            compact: raw
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-'))
                .collect(),
        }
    }

    /// Digits only.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Uppercased alphanumerics only.
    #[must_use]
    pub fn alnum(&self) -> &str {
        &self.alnum
    }

    /// Decomposes a Swedish personal number, inferring the century relative
    /// to `current_year` when it is not written out.
    #[must_use]
    pub fn parts(&self, current_year: i32) -> Option<PersonalNumberParts> {
        PersonalNumberParts::parse(&self.compact, current_year)
    }

    /// Swedish personal (or coordination) number with a valid check digit.
    #[must_use]
    pub fn is_personal_number(&self, current_year: i32) -> bool {
        self.parts(current_year).is_some_and(|parts| {
            (parts.is_date() || parts.is_coordination_number()) && parts.has_valid_check_digit()
        })
    }

    /// Coordination number (day + 60) with a valid check digit.
    #[must_use]
    pub fn is_coordination_number(&self, current_year: i32) -> bool {
        self.parts(current_year)
            .is_some_and(|parts| parts.is_coordination_number() && parts.has_valid_check_digit())
    }

    /// Sex encoded in the serial number: odd is male.
    ///
    /// `None` when the number does not decompose.
    #[must_use]
    pub fn is_male(&self, current_year: i32) -> Option<bool> {
        self.parts(current_year).map(|parts| parts.is_male())
    }

    /// Swedish organisation number: the first ten digits carry a valid
    /// check digit.
    #[must_use]
    pub fn is_org_number(&self) -> bool {
        self.digits.len() >= 10 && luhn_check(&self.digits[..10]) == 0
    }

    /// Issuer whose prefix the digits start with, if any.
    #[must_use]
    pub fn card_issuer(&self) -> Option<CardIssuer> {
        CardIssuer::detect(&self.digits)
    }

    /// Payment card number: known issuer prefix and valid checksum.
    #[must_use]
    pub fn is_credit_card(&self) -> bool {
        if self.card_issuer().is_none() {
            return false;
        }

        // Left-pad to even length so the weights line up with the check digit.
        if self.digits.len() % 2 == 1 {
            luhn_check(&format!("0{}", self.digits)) == 0
        } else {
            luhn_check(&self.digits) == 0
        }
    }

    /// VAT format for the two-letter country prefix, if known.
    #[must_use]
    pub fn vat_country(&self) -> Option<&'static VatFormat> {
        self.alnum.get(..2).and_then(vat_format)
    }

    /// EU VAT number. Swedish numbers must also embed a valid organisation
    /// number.
    #[must_use]
    pub fn is_vat_number(&self) -> bool {
        let Some(format) = self.vat_country() else {
            return false;
        };
        if !format.matches(&self.alnum[2..]) {
            return false;
        }
        format.country != "SE" || self.is_org_number()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalises_once() {
        let id = LuhnIdentifier::new("se 556-677 8899/01");
        assert_eq!(id.digits(), "556677889901");
        assert_eq!(id.alnum(), "SE556677889901");
    }

    #[test]
    fn check_digit_matches_sum() {
        assert_eq!(luhn_check("880821832"), 8);
        assert_eq!(luhn_check("670919953"), 0);
        assert_eq!(luhn_check(""), 0);
    }

    #[test]
    fn org_number() {
        assert!(LuhnIdentifier::new("556016-0680").is_org_number());
        assert!(!LuhnIdentifier::new("556016-0681").is_org_number());
        assert!(!LuhnIdentifier::new("55601").is_org_number());
    }

    #[test]
    fn credit_card() {
        assert!(LuhnIdentifier::new("4030000010001234").is_credit_card());
        assert!(!LuhnIdentifier::new("4030000010001235").is_credit_card());
        assert!(LuhnIdentifier::new("378282246310005").is_credit_card());
        assert!(LuhnIdentifier::new("5555 5555 5555 4444").is_credit_card());
        // valid checksum, unknown issuer
        assert!(!LuhnIdentifier::new("1111111111111117").is_credit_card());
    }

    #[test]
    fn vat_number() {
        assert!(LuhnIdentifier::new("SE556016068001").is_vat_number());
        assert!(!LuhnIdentifier::new("SE556016068101").is_vat_number());
        assert!(LuhnIdentifier::new("DE123456789").is_vat_number());
        assert!(LuhnIdentifier::new("nl123456789B01").is_vat_number());
        assert!(!LuhnIdentifier::new("XX123456789").is_vat_number());
        assert!(!LuhnIdentifier::new("D").is_vat_number());
    }
}
