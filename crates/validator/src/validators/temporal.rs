//! Date, time and date-range validators.
//!
//! Formats are written with the familiar single-letter date tokens
//! (`Y-m-d H:i:s`) and translated to chrono's strftime syntax:
//!
//! | token | meaning | token | meaning |
//! |---|---|---|---|
//! | `Y` | 4-digit year | `y` | 2-digit year |
//! | `m`, `n` | month | `d`, `j` | day of month |
//! | `H`, `G` | 24-hour hour | `h`, `g` | 12-hour hour |
//! | `i` | minutes | `s` | seconds |
//! | `A`, `a` | AM/PM | `D`, `l` | weekday name |
//! | `M`, `F` | month name | `\x` | literal `x` |
//!
//! Calendar validity is strict: `2021-02-30` is rejected, not rolled over.

use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::foundation::{Validate, ValidationError};

/// Separator between the two ends of a date range.
pub const RANGE_SEPARATOR: &str = " - ";

// ============================================================================
// FORMAT TRANSLATION
// ============================================================================

/// A date format in single-letter token syntax, pre-translated for chrono.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    source: String,
    strftime: String,
}

impl DateFormat {
    /// Translates a token format.
    #[must_use]
    pub fn new(format: &str) -> Self {
        let mut strftime = String::with_capacity(format.len() * 2);
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            let spec = match c {
                'Y' => "%Y",
                'y' => "%y",
                'm' | 'n' => "%m",
                'd' | 'j' => "%d",
                'H' | 'G' => "%H",
                'h' | 'g' => "%I",
                'i' => "%M",
                's' => "%S",
                'A' | 'a' => "%p",
                'D' => "%a",
                'l' => "%A",
                'M' => "%b",
                'F' => "%B",
                '%' => "%%",
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        push_literal(&mut strftime, escaped);
                    }
                    continue;
                }
                other => {
                    push_literal(&mut strftime, other);
                    continue;
                }
            };
            strftime.push_str(spec);
        }

        Self {
            source: format.to_owned(),
            strftime,
        }
    }

    /// The format as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The chrono strftime equivalent.
    #[must_use]
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Parses input into the most specific moment the format describes.
    ///
    /// A format with date and time tokens yields [`Moment::DateTime`]; a
    /// format with only one kind falls back to [`Moment::Date`] or
    /// [`Moment::Time`]. Out-of-range values never fall back.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<Moment> {
        let fmt = self.strftime.as_str();

        match NaiveDateTime::parse_from_str(input, fmt) {
            Ok(dt) => return Some(Moment::DateTime(dt)),
            Err(e) if e.kind() != ParseErrorKind::NotEnough => return None,
            Err(_) => {}
        }

        match NaiveDate::parse_from_str(input, fmt) {
            Ok(d) => return Some(Moment::Date(d)),
            Err(e) if e.kind() != ParseErrorKind::NotEnough => return None,
            Err(_) => {}
        }

        NaiveTime::parse_from_str(input, fmt).ok().map(Moment::Time)
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new("Y-m-d")
    }
}

/// A parsed date, time or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Moment {
    /// Calendar date and wall-clock time.
    DateTime(NaiveDateTime),
    /// Calendar date only.
    Date(NaiveDate),
    /// Wall-clock time only.
    Time(NaiveTime),
}

impl Moment {
    /// Calendar year, when the moment has a date.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        match self {
            Self::DateTime(dt) => Some(dt.year()),
            Self::Date(d) => Some(d.year()),
            Self::Time(_) => None,
        }
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a date/time format.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_validator::validators::{Date, DateFormat};
    /// use sieve_validator::foundation::Validate;
    ///
    /// let v = Date::new(DateFormat::new("Y-m-d"));
    /// assert!(v.validate("1922-03-01").is_ok());
    /// assert!(v.validate("1922-02-30").is_err());
    ///
    /// let t = Date::new(DateFormat::new("H:i"));
    /// assert!(t.validate("23:59").is_ok());
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub Date { format: DateFormat } for str;
    rule(self, input) { self.format.parse(input).is_some() }
    error(self, input) {
        ValidationError::invalid_format(self.format.as_str().to_owned())
    }
    fn date(format: DateFormat);
}

// ============================================================================
// DATE RANGE
// ============================================================================

/// Validates `"<start> - <end>"` where both ends match the format and
/// `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    format: DateFormat,
}

impl DateRange {
    /// Creates a date range validator.
    #[must_use]
    pub fn new(format: DateFormat) -> Self {
        Self { format }
    }

    /// Splits and checks a range, returning the trimmed ends.
    ///
    /// ```
    /// use sieve_validator::validators::{DateFormat, DateRange};
    ///
    /// let range = DateRange::new(DateFormat::new("Y-m-d H:i"));
    /// let (start, end) = range.split("2024-01-01 10:00 - 2024-01-02 09:00").unwrap();
    /// assert_eq!(start, "2024-01-01 10:00");
    /// assert_eq!(end, "2024-01-02 09:00");
    /// assert!(range.split("2024-01-02 10:00 - 2024-01-01 09:00").is_none());
    /// ```
    #[must_use]
    pub fn split<'a>(&self, input: &'a str) -> Option<(&'a str, &'a str)> {
        let mut parts = input.split(RANGE_SEPARATOR);
        let (first, second) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let (first, second) = (first.trim(), second.trim());
        let start = self.format.parse(first)?;
        let end = self.format.parse(second)?;
        (start <= end).then_some((first, second))
    }
}

impl Validate for DateRange {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.split(input) {
            Some(_) => Ok(()),
            None => Err(ValidationError::new("date_range", "Invalid date range")
                .with_param("format", self.format.as_str().to_owned())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
