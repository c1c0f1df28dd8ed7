//! Document date display.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Shown when a document has no date.
pub const MISSING_DATE: &str = "N/A";

/// Shown when a date cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Years that render as exactly four digits.
const DISPLAY_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A date in any of the shapes documents carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Calendar date.
    Date(NaiveDate),
    /// Timestamp without offset.
    DateTime(NaiveDateTime),
    /// Timestamp with offset; displayed in its own offset.
    Zoned(DateTime<FixedOffset>),
    /// ISO-8601 text as received from the API.
    Text(&'a str),
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<DateTime<FixedOffset>> for DateInput<'_> {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::Zoned(datetime)
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::Zoned(datetime.fixed_offset())
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl DateInput<'_> {
    /// The calendar date this input denotes, if it has one.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::DateTime(datetime) => Some(datetime.date()),
            Self::Zoned(datetime) => Some(datetime.date_naive()),
            Self::Text(text) => parse_date_text(text),
        }
    }
}

/// Formats a date as `Jan 05, 2024`.
///
/// Missing dates render as [`MISSING_DATE`]. Unparseable text and dates
/// whose year does not fit four digits render as [`INVALID_DATE`].
/// Never panics.
///
/// ```
/// use chrono::NaiveDate;
/// use tally_core::date::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(format_date(Some(date.into())), "Jan 05, 2024");
/// assert_eq!(format_date(None), "N/A");
/// ```
#[must_use]
pub fn format_date(input: Option<DateInput<'_>>) -> String {
    let Some(input) = input else {
        return MISSING_DATE.to_string();
    };

    match input.to_date() {
        Some(date) if DISPLAY_YEARS.contains(&date.year()) => {
            date.format(DISPLAY_FORMAT).to_string()
        }
        Some(date) => {
            tracing::warn!(%date, "Date year outside displayable range");
            INVALID_DATE.to_string()
        }
        None => {
            tracing::warn!(input = ?input, "Could not parse date");
            INVALID_DATE.to_string()
        }
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_naive_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(Some(date.into())), "Jan 05, 2024");
    }

    #[test]
    fn test_naive_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_date(Some(datetime.into())), "Dec 31, 2023");
    }

    #[test]
    fn test_utc_datetime() {
        let datetime = DateTime::parse_from_rfc3339("2024-07-04T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(Some(datetime.into())), "Jul 04, 2024");
    }

    #[rstest]
    #[case("2024-01-05", "Jan 05, 2024")]
    #[case(" 2024-01-05 ", "Jan 05, 2024")]
    #[case("2024-01-05T08:30:00", "Jan 05, 2024")]
    #[case("2024-01-05 08:30:00.123", "Jan 05, 2024")]
    #[case("2024-01-05T08:30:00.000Z", "Jan 05, 2024")]
    #[case("2024-01-05T23:30:00-05:00", "Jan 05, 2024")]
    #[case("2024-02-29", "Feb 29, 2024")]
    fn test_iso_text(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(format_date(Some(text.into())), expected);
    }

    #[rstest]
    #[case(10_000, 1, 1)]
    #[case(262_000, 6, 30)]
    #[case(-1, 12, 31)]
    fn test_years_beyond_four_digits_are_invalid(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(format_date(Some(date.into())), "Invalid Date");
    }

    #[test]
    fn test_year_bounds_render() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(format_date(Some(last.into())), "Dec 31, 9999");
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert_eq!(format_date(Some(first.into())), "Jan 01, 0000");
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("")]
    #[case("2023-02-29")]
    #[case("2024-13-01")]
    #[case("05/01/2024")]
    fn test_invalid_text(#[case] text: &str) {
        assert_eq!(format_date(Some(DateInput::Text(text))), "Invalid Date");
    }
}
