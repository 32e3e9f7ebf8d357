//! Swedish personal number decomposition.
//!
//! Accepted shapes (after stripping everything but digits and `+`/`-`):
//! `YYMMDDNNNC`, `YYMMDD-NNNC`, `YYMMDD+NNNC` and the same with a leading
//! two-digit century. `+` marks a person aged 100 or more.

use std::sync::LazyLock;

use chrono::NaiveDate;

use super::luhn_check;

static PERSONAL_NUMBER_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(\d{2})?(\d{2})(\d{2})(\d{2})([-+]?)(\d{3})(\d)$").unwrap()
});

/// Century separator of a personal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Born less than 100 years ago.
    Minus,
    /// Born 100 or more years ago.
    Plus,
}

/// The parts of a decomposed personal number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalNumberParts {
    /// Two-digit century, written or inferred.
    pub century: u32,
    /// Two-digit year within the century.
    pub year: u32,
    /// Month, `1..=12` for a valid number.
    pub month: u32,
    /// Day of month; coordination numbers add 60.
    pub day: u32,
    /// Written or inferred separator.
    pub separator: Separator,
    /// Three-digit birth serial.
    pub serial: String,
    /// Trailing check digit.
    pub check: u32,
}

impl PersonalNumberParts {
    /// Decomposes a compact personal number.
    ///
    /// When the separator is missing it is inferred: `-` if no century was
    /// written or the written birth year is less than 100 years before
    /// `current_year`, otherwise `+`. A missing century is then taken from
    /// the most recent year ending in `year` that is not after the base
    /// year (`current_year`, or 100 years earlier for `+`).
    #[must_use]
    pub fn parse(compact: &str, current_year: i32) -> Option<Self> {
        let caps = PERSONAL_NUMBER_REGEX.captures(compact)?;
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

        let written_century = number(1);
        let year = number(2)?;
        let month = number(3)?;
        let day = number(4)?;
        let serial = caps.get(6)?.as_str().to_owned();
        let check = number(7)?;

        let separator = match caps.get(5).map(|m| m.as_str()) {
            Some("+") => Separator::Plus,
            Some("-") => Separator::Minus,
            _ => match written_century {
                Some(century) if current_year - (century * 100 + year) as i32 >= 100 => {
                    Separator::Plus
                }
                _ => Separator::Minus,
            },
        };

        let century = match written_century {
            Some(century) => century,
            None => {
                let base = match separator {
                    Separator::Plus => current_year - 100,
                    Separator::Minus => current_year,
                };
                let full_year = base - (base - year as i32).rem_euclid(100);
                (full_year / 100) as u32
            }
        };

        Some(Self {
            century,
            year,
            month,
            day,
            separator,
            serial,
            check,
        })
    }

    /// Four-digit birth year.
    #[must_use]
    pub fn full_year(&self) -> i32 {
        (self.century * 100 + self.year) as i32
    }

    /// Month and day form a real calendar date.
    #[must_use]
    pub fn is_date(&self) -> bool {
        NaiveDate::from_ymd_opt(self.full_year(), self.month, self.day).is_some()
    }

    /// Day minus 60 forms a real calendar date.
    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.day > 60 && NaiveDate::from_ymd_opt(self.full_year(), self.month, self.day - 60).is_some()
    }

    /// `YYMMDDNNN` checksums to the written check digit.
    #[must_use]
    pub fn has_valid_check_digit(&self) -> bool {
        let payload = format!(
            "{:02}{:02}{:02}{}",
            self.year, self.month, self.day, self.serial
        );
        luhn_check(&payload) == self.check
    }

    /// Odd serial means male.
    #[must_use]
    pub fn is_male(&self) -> bool {
        self.serial
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d % 2 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NOW: i32 = 2026;

    #[test]
    fn decomposes_ten_digits() {
        let parts = PersonalNumberParts::parse("811228-9874", NOW).unwrap();
        assert_eq!(parts.century, 19);
        assert_eq!(parts.year, 81);
        assert_eq!(parts.month, 12);
        assert_eq!(parts.day, 28);
        assert_eq!(parts.separator, Separator::Minus);
        assert_eq!(parts.serial, "987");
        assert_eq!(parts.check, 4);
        assert!(parts.is_date());
        assert!(parts.has_valid_check_digit());
    }

    #[test]
    fn written_century_wins() {
        let parts = PersonalNumberParts::parse("198112289874", NOW).unwrap();
        assert_eq!(parts.century, 19);
        assert_eq!(parts.full_year(), 1981);
    }

    #[rstest]
    #[case("0101011234", 20)]
    #[case("2601011234", 20)]
    #[case("2701011234", 19)]
    #[case("270101+1234", 18)]
    #[case("880821+8329", 18)]
    fn infers_century(#[case] compact: &str, #[case] century: u32) {
        assert_eq!(PersonalNumberParts::parse(compact, NOW).unwrap().century, century);
    }

    #[test]
    fn old_written_century_means_plus() {
        let parts = PersonalNumberParts::parse("191001011234", NOW).unwrap();
        assert_eq!(parts.separator, Separator::Plus);
        assert_eq!(parts.century, 19);
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(PersonalNumberParts::parse("", NOW).is_none());
        assert!(PersonalNumberParts::parse("81122898", NOW).is_none());
        assert!(PersonalNumberParts::parse("811228--9874", NOW).is_none());
        assert!(PersonalNumberParts::parse("19811228987412", NOW).is_none());
    }

    #[test]
    fn coordination_number_day() {
        let parts = PersonalNumberParts::parse("701063-2391", NOW).unwrap();
        assert!(!parts.is_date());
        assert!(parts.is_coordination_number());
    }

    #[test]
    fn sex_from_serial() {
        assert!(PersonalNumberParts::parse("811228-9874", NOW).unwrap().is_male());
        assert!(!PersonalNumberParts::parse("811228-9882", NOW).unwrap().is_male());
    }
}
