//! Tests for display/ISO date conversion.

use super::fixtures::date;
use crate::deadline::date::{
    format_to_display, parse_any_date, parse_display_date, parse_input_date, to_input_format,
};
use rstest::rstest;

#[rstest]
#[case("15/07/2024", 2024, 7, 15)]
#[case("01/01/2000", 2000, 1, 1)]
#[case("29/02/2024", 2024, 2, 29)]
#[case("5/3/2024", 2024, 3, 5)]
#[case(" 31/12/2023 ", 2023, 12, 31)]
fn parse_display_date_accepts_calendar_dates(
    #[case] input: &str,
    #[case] year: i32,
    #[case] month: u32,
    #[case] day: u32,
) {
    assert_eq!(parse_display_date(input), Some(date(year, month, day)));
}

#[rstest]
#[case("31/02/2024")]
#[case("00/01/2024")]
#[case("31/04/2024")]
#[case("29/02/2023")]
#[case("15/13/2024")]
#[case("15/07/24")]
#[case("15/07/02024")]
#[case("15-07-2024")]
#[case("2024-07-15")]
#[case("15/07/2024/1")]
#[case("15/07")]
#[case("aa/07/2024")]
#[case("+5/07/2024")]
#[case("")]
#[case("   ")]
fn parse_display_date_rejects_malformed_or_rolled_over_input(#[case] input: &str) {
    assert_eq!(parse_display_date(input), None);
}

#[rstest]
fn parse_input_date_reads_iso_dates() {
    assert_eq!(parse_input_date("2024-07-15"), Some(date(2024, 7, 15)));
    assert_eq!(parse_input_date("2024-02-30"), None);
    assert_eq!(parse_input_date("15/07/2024"), None);
}

#[rstest]
#[case("2024-7-15")]
#[case("2024-07-5")]
#[case("2024-7-5")]
#[case("24-07-15")]
#[case("2024-007-15")]
fn parse_input_date_requires_full_width_components(#[case] input: &str) {
    assert_eq!(parse_input_date(input), None);
}

#[rstest]
fn parse_any_date_accepts_both_boundary_formats() {
    assert_eq!(parse_any_date("10/07/2024"), Some(date(2024, 7, 10)));
    assert_eq!(parse_any_date("2024-07-10"), Some(date(2024, 7, 10)));
    assert_eq!(parse_any_date("July 10th"), None);
}

#[rstest]
#[case("2024-07-15", "15/07/2024")]
#[case("1999-12-01", "01/12/1999")]
#[case("", "")]
#[case("not a date", "")]
fn format_to_display_converts_iso_dates(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(format_to_display(input), expected);
}

#[rstest]
#[case(Some("15/07/2024"), "2024-07-15")]
#[case(Some("2024-07-15"), "2024-07-15")]
#[case(Some("31/02/2024"), "")]
#[case(Some("5/7/2024"), "2024-07-05")]
#[case(Some("2024-7-5"), "")]
#[case(Some(""), "")]
#[case(None, "")]
fn to_input_format_converts_or_passes_through(
    #[case] input: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(to_input_format(input), expected);
}

#[rstest]
#[case("2024-07-15")]
#[case("2000-02-29")]
#[case("1987-11-03")]
fn input_format_round_trips_through_display_format(#[case] iso: &str) {
    assert_eq!(to_input_format(Some(&format_to_display(iso))), iso);
}
