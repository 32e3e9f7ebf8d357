//! Payment card issuer prefixes.

use std::fmt;
use std::sync::LazyLock;

/// Card issuer, detected from the leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardIssuer {
    VisaElectron,
    Maestro,
    Forbrugsforeningen,
    Dankort,
    Visa,
    Mastercard,
    Amex,
    DinersClub,
    Discover,
    UnionPay,
    Jcb,
}

// Order matters: the narrower prefixes must be tried before `Visa` (`^4`)
// and `Mastercard` (`^5[0-5]`) swallow them.
static ISSUER_PREFIXES: LazyLock<Vec<(CardIssuer, regex::Regex)>> = LazyLock::new(|| {
    [
        (CardIssuer::VisaElectron, r"^4(026|17500|405|508|844|91[37])"),
        (CardIssuer::Maestro, r"^(5(018|0[23]|[68])|6(39|7))"),
        (CardIssuer::Forbrugsforeningen, r"^600"),
        (CardIssuer::Dankort, r"^5019"),
        (CardIssuer::Visa, r"^4"),
        (CardIssuer::Mastercard, r"^(5[0-5]|2[2-7])"),
        (CardIssuer::Amex, r"^3[47]"),
        (CardIssuer::DinersClub, r"^3[0689]"),
        (CardIssuer::Discover, r"^6([045]|22)"),
        (CardIssuer::UnionPay, r"^(62|88)"),
        (CardIssuer::Jcb, r"^35"),
    ]
    .into_iter()
    .map(|(issuer, pattern)| (issuer, regex::Regex::new(pattern).unwrap()))
    .collect()
});

impl CardIssuer {
    /// First issuer whose prefix matches the digits.
    #[must_use]
    pub fn detect(digits: &str) -> Option<Self> {
        ISSUER_PREFIXES
            .iter()
            .find(|(_, pattern)| pattern.is_match(digits))
            .map(|(issuer, _)| *issuer)
    }

    /// Lowercase issuer name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VisaElectron => "visaelectron",
            Self::Maestro => "maestro",
            Self::Forbrugsforeningen => "forbrugsforeningen",
            Self::Dankort => "dankort",
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::DinersClub => "dinersclub",
            Self::Discover => "discover",
            Self::UnionPay => "unionpay",
            Self::Jcb => "jcb",
        }
    }
}

impl fmt::Display for CardIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4030000010001234", CardIssuer::Visa)]
    #[case("4175001234567890", CardIssuer::VisaElectron)]
    #[case("5018123412341234", CardIssuer::Maestro)]
    #[case("5019123412341234", CardIssuer::Dankort)]
    #[case("6001234512345678", CardIssuer::Forbrugsforeningen)]
    #[case("5555555555554444", CardIssuer::Mastercard)]
    #[case("2221000000000009", CardIssuer::Mastercard)]
    #[case("378282246310005", CardIssuer::Amex)]
    #[case("30569309025904", CardIssuer::DinersClub)]
    #[case("6011111111111117", CardIssuer::Discover)]
    #[case("6221260000000000", CardIssuer::Discover)]
    #[case("8800000000000000", CardIssuer::UnionPay)]
    fn detects_in_table_order(#[case] digits: &str, #[case] issuer: CardIssuer) {
        assert_eq!(CardIssuer::detect(digits), Some(issuer));
    }

    #[test]
    fn overlapping_prefixes_resolve_to_first_entry() {
        // amex and diners take 34/37 and 30/36/38/39, leaving 35
        assert_eq!(CardIssuer::detect("3530111333300000"), Some(CardIssuer::Jcb));
        // 622 is discover, the rest of 62 is unionpay
        assert_eq!(CardIssuer::detect("6200000000000005"), Some(CardIssuer::UnionPay));
    }

    #[test]
    fn unknown_prefix() {
        assert_eq!(CardIssuer::detect("1234567890123456"), None);
        assert_eq!(CardIssuer::detect(""), None);
    }

    #[test]
    fn display_name() {
        assert_eq!(CardIssuer::DinersClub.to_string(), "dinersclub");
    }
}
