//! EU VAT number formats, keyed by two-letter country prefix.

use std::sync::LazyLock;

/// The national part of a VAT number for one country.
#[derive(Debug)]
pub struct VatFormat {
    /// Two-letter prefix (`EL` for Greece).
    pub country: &'static str,
    pattern: regex::Regex,
}

impl VatFormat {
    /// Whether the national part (prefix removed) has this country's shape.
    #[must_use]
    pub fn matches(&self, national: &str) -> bool {
        self.pattern.is_match(national)
    }
}

static VAT_FORMATS: LazyLock<Vec<VatFormat>> = LazyLock::new(|| {
    [
        ("AT", r"U[A-Z\d]{8}"),
        ("BE", r"(0\d{9}|\d{10})"),
        ("BG", r"\d{9,10}"),
        ("CY", r"\d{8}[A-Z]"),
        ("CZ", r"\d{8,10}"),
        ("DE", r"\d{9}"),
        ("DK", r"(\d{2} ?){3}\d{2}"),
        ("EE", r"\d{9}"),
        ("EL", r"\d{9}"),
        ("ES", r"([A-Z]\d{7}[A-Z]|\d{8}[A-Z]|[A-Z]\d{8})"),
        ("FI", r"\d{8}"),
        ("FR", r"[A-Z\d]{2}\d{9}"),
        ("GB", r"(\d{9}|\d{12}|(GD|HA)\d{3})"),
        ("HR", r"\d{11}"),
        ("HU", r"\d{8}"),
        ("IE", r"([A-Z\d]{8}|[A-Z\d]{9})"),
        ("IT", r"\d{11}"),
        ("LT", r"(\d{9}|\d{12})"),
        ("LU", r"\d{8}"),
        ("LV", r"\d{11}"),
        ("MT", r"\d{8}"),
        ("NL", r"\d{9}B\d{2}"),
        ("PL", r"\d{10}"),
        ("PT", r"\d{9}"),
        ("RO", r"\d{2,10}"),
        ("SE", r"\d{12}"),
        ("SI", r"\d{8}"),
        ("SK", r"\d{10}"),
    ]
    .into_iter()
    .map(|(country, pattern)| VatFormat {
        country,
        pattern: regex::Regex::new(&format!("^(?:{pattern})$")).unwrap(),
    })
    .collect()
});

/// Looks up the VAT format for an uppercase country prefix.
#[must_use]
pub fn vat_format(country: &str) -> Option<&'static VatFormat> {
    VAT_FORMATS.iter().find(|format| format.country == country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_covers_member_states() {
        assert_eq!(VAT_FORMATS.len(), 28);
        assert!(vat_format("GR").is_none());
        assert!(vat_format("se").is_none());
    }

    #[rstest]
    #[case("AT", "U12345678", true)]
    #[case("AT", "12345678", false)]
    #[case("ES", "X1234567X", true)]
    #[case("FR", "AB123456789", true)]
    #[case("GB", "GD123", true)]
    #[case("IE", "1234567", false)]
    #[case("RO", "1", false)]
    #[case("SE", "556016068001", true)]
    #[case("SE", "55601606800", false)]
    fn national_part_shapes(#[case] country: &str, #[case] national: &str, #[case] ok: bool) {
        assert_eq!(vat_format(country).unwrap().matches(national), ok);
    }
}
