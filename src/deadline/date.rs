//! Conversions between the two date formats that cross the record boundary.
//!
//! Meeting records store dates as `DD/MM/YYYY` ("display" format). Date
//! input widgets and completion dates use ISO `YYYY-MM-DD` ("input"
//! format). Every function here degrades to `None` or an empty string on
//! malformed input instead of returning an error.

use chrono::{Datelike, NaiveDate};

/// `chrono` format string for the display representation.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// `chrono` format string for the ISO input representation.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy)]
enum Width {
    Exact(usize),
    UpTo(usize),
}

impl Width {
    fn accepts(self, len: usize) -> bool {
        match self {
            Self::Exact(width) => len == width,
            Self::UpTo(width) => (1..=width).contains(&len),
        }
    }
}

const DISPLAY_WIDTHS: [Width; 3] = [Width::UpTo(2), Width::UpTo(2), Width::Exact(4)];
const INPUT_WIDTHS: [Width; 3] = [Width::Exact(4), Width::Exact(2), Width::Exact(2)];

/// Parses a `DD/MM/YYYY` string into a calendar date.
///
/// Day and month may have one or two digits; the year must have exactly
/// four. Dates that do not exist on the calendar (`31/02/2024`,
/// `00/01/2024`) are rejected rather than rolled over.
///
/// # Examples
///
/// ```
/// use atas::deadline::date::parse_display_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_display_date("15/07/2024"),
///     NaiveDate::from_ymd_opt(2024, 7, 15)
/// );
/// assert_eq!(parse_display_date("31/02/2024"), None);
/// ```
#[must_use]
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let (day, month, year) = split_components(value.trim(), '/', DISPLAY_WIDTHS)?;
    build_date(year, month, day)
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// Every component must have its full width: `2024-7-5` is rejected.
#[must_use]
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    let (year, month, day) = split_components(value.trim(), '-', INPUT_WIDTHS)?;
    build_date(year, month, day)
}

/// Parses a date in either boundary format.
///
/// Completion dates were written in both formats over time, so readers of
/// that field accept either.
#[must_use]
pub fn parse_any_date(value: &str) -> Option<NaiveDate> {
    parse_display_date(value).or_else(|| parse_input_date(value))
}

/// Formats a calendar date as `DD/MM/YYYY`.
#[must_use]
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Formats a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn format_input(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Converts an ISO `YYYY-MM-DD` string to `DD/MM/YYYY`.
///
/// Empty or unparseable input yields an empty string.
#[must_use]
pub fn format_to_display(iso_date: &str) -> String {
    parse_input_date(iso_date)
        .map(format_display)
        .unwrap_or_default()
}

/// Converts a `DD/MM/YYYY` string to `YYYY-MM-DD` for date input fields.
///
/// Values already in ISO form pass through unchanged. Anything else,
/// including `None`, yields an empty string.
///
/// # Examples
///
/// ```
/// use atas::deadline::date::to_input_format;
///
/// assert_eq!(to_input_format(Some("05/03/2024")), "2024-03-05");
/// assert_eq!(to_input_format(Some("2024-03-05")), "2024-03-05");
/// assert_eq!(to_input_format(Some("março")), "");
/// assert_eq!(to_input_format(None), "");
/// ```
#[must_use]
pub fn to_input_format(display_date: Option<&str>) -> String {
    display_date
        .and_then(parse_any_date)
        .map(format_input)
        .unwrap_or_default()
}

/// Splits `value` into three numeric components of the given widths.
fn split_components(value: &str, separator: char, widths: [Width; 3]) -> Option<(u32, u32, u32)> {
    let [first_width, second_width, third_width] = widths;
    let mut parts = value.split(separator);
    let first = parse_component(parts.next()?, first_width)?;
    let second = parse_component(parts.next()?, second_width)?;
    let third = parse_component(parts.next()?, third_width)?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

fn parse_component(part: &str, width: Width) -> Option<u32> {
    if !width.accepts(part.len()) || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn build_date(year: u32, month: u32, day: u32) -> Option<NaiveDate> {
    let signed_year = i32::try_from(year).ok()?;
    let date = NaiveDate::from_ymd_opt(signed_year, month, day)?;
    // Rolled-over dates must never be accepted.
    (date.day() == day && date.month() == month && date.year() == signed_year).then_some(date)
}
