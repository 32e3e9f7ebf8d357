//! Date, time and age predicates.

use serde_json::{Value, json};

use super::Input;
use crate::foundation::Validate;
use crate::validators::{Date, DateFormat, DateRange};

/// Format for `isDateWithTime`.
pub const DATE_TIME_FORMAT: &str = "Y-m-d H:i:s";

impl Input {
    /// Matches `format`; the configured default format when `None`.
    #[must_use]
    pub fn is_date(&self, format: Option<&str>) -> bool {
        let format = format.unwrap_or(&self.env.config().default_date_format);
        self.string_view()
            .is_some_and(|s| Date::new(DateFormat::new(format)).is_valid(s))
    }

    /// Matches `Y-m-d H:i:s`.
    #[must_use]
    pub fn is_date_with_time(&self) -> bool {
        self.is_date(Some(DATE_TIME_FORMAT))
    }

    /// Matches `H:i`, or `H:i:s` with seconds.
    #[must_use]
    pub fn is_time(&self, with_seconds: bool) -> bool {
        self.is_date(Some(if with_seconds { "H:i:s" } else { "H:i" }))
    }

    /// At least `years` old by calendar year, measured against the
    /// environment's "now".
    ///
    /// The value is read with the default date format, falling back to
    /// `Y-m-d H:i:s`. Unreadable values are false.
    #[must_use]
    pub fn is_age(&self, years: i32) -> bool {
        let Some(s) = self.string_view() else {
            return false;
        };
        let birth = DateFormat::new(&self.env.config().default_date_format)
            .parse(s)
            .or_else(|| DateFormat::new(DATE_TIME_FORMAT).parse(s))
            .and_then(|moment| moment.year());

        birth.is_some_and(|year| self.env.current_year() - year >= years)
    }

    /// Splits `"<start> - <end>"` where both ends match `format` (the
    /// configured range format when `None`) and `start <= end`.
    ///
    /// Returns `{"t1": start, "t2": end}` with the trimmed ends.
    #[must_use]
    pub fn date_range(&self, format: Option<&str>) -> Option<Value> {
        let format = format.unwrap_or(&self.env.config().default_date_range_format);
        let range = DateRange::new(DateFormat::new(format));
        let (start, end) = range.split(self.string_view()?)?;
        Some(json!({ "t1": start, "t2": end }))
    }
}
