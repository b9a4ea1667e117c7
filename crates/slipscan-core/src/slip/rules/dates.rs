//! Calendar date recovery for slip date lines.

use chrono::NaiveDate;

use super::patterns::FOUR_DIGIT_YEAR;

/// Formats tried against a cleaned date expression, most common first.
/// Month-name formats also accept abbreviations ("Dec 25").
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m/%d %Y",
    "%m-%d-%Y",
    "%m-%d %Y",
    "%m.%d.%Y",
    "%m.%d %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
];

/// Parse a slip date expression, borrowing `year` when the text has none.
///
/// Commas never matter; periods only separate numeric dates, so they are
/// dropped once month names are involved ("Dec. 25"). Anything outside
/// the known formats is absent, not an error.
pub fn parse_date(raw: &str, year: i32) -> Option<NaiveDate> {
    let mut cleaned = raw.replace(',', " ");
    if cleaned.chars().any(|c| c.is_ascii_alphabetic()) {
        cleaned = cleaned.replace('.', " ");
    }
    let mut cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return None;
    }

    if !FOUR_DIGIT_YEAR.is_match(&cleaned) {
        cleaned = format!("{} {}", cleaned, year);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_numeric_dates_with_year() {
        assert_eq!(parse_date("12/25/2025", 2024), Some(ymd(2025, 12, 25)));
        assert_eq!(parse_date("12-25-2025", 2024), Some(ymd(2025, 12, 25)));
        assert_eq!(parse_date("12.25.2025", 2024), Some(ymd(2025, 12, 25)));
        assert_eq!(parse_date("2025-12-25", 2024), Some(ymd(2025, 12, 25)));
    }

    #[test]
    fn test_numeric_dates_borrow_year() {
        assert_eq!(parse_date("12/25", 2024), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("1/5", 2026), Some(ymd(2026, 1, 5)));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_date("December 25, 2025", 2024), Some(ymd(2025, 12, 25)));
        assert_eq!(parse_date("Dec 25", 2024), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("Dec. 25", 2024), Some(ymd(2024, 12, 25)));
        assert_eq!(parse_date("25 December", 2024), Some(ymd(2024, 12, 25)));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(parse_date("  Dec   25 ", 2024), Some(ymd(2024, 12, 25)));
    }

    #[test]
    fn test_unparsable_dates() {
        assert_eq!(parse_date("", 2024), None);
        assert_eq!(parse_date("next friday", 2024), None);
        assert_eq!(parse_date("13/45", 2024), None);
    }
}
