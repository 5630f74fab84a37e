use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Literal marker used in profile documents for an open-ended date.
pub const PRESENT_TOKEN: &str = "Present";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("invalid date token '{0}': expected YYYY-MM or 'Present'")]
    InvalidFormat(String),
}

/// Display language for formatted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLocale {
    #[default]
    French,
    English,
}

/// Truncate a date to month resolution (day-of-month carries no meaning here).
pub fn month_of(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Parse a `"YYYY-MM"` token, or the `"Present"` literal which maps to
/// `today` at month resolution. `today` is passed in so callers control the
/// clock.
pub fn parse_month_token(token: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let token = token.trim();
    if token == PRESENT_TOKEN {
        return Ok(month_of(today));
    }
    NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d")
        .map_err(|_| DateError::InvalidFormat(token.to_string()))
}

/// Serialize a month-resolution date back to its `"YYYY-MM"` source token.
pub fn source_token(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Signed count of calendar months from `start` to `end`, ignoring
/// day-of-month. Negative when `end` precedes `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Short month + year for display, e.g. "janv. 2024" / "Jan 2024".
/// Lossy; the storage round-trip goes through [`source_token`].
pub fn format_month_year(date: NaiveDate, locale: DisplayLocale) -> String {
    let locale = match locale {
        DisplayLocale::French => chrono::Locale::fr_FR,
        DisplayLocale::English => chrono::Locale::en_US,
    };
    date.format_localized("%b %Y", locale).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_year_month_tokens() {
        let today = ymd(2025, 6, 15);
        assert_eq!(parse_month_token("2020-01", today), Ok(ymd(2020, 1, 1)));
        assert_eq!(parse_month_token("1999-12", today), Ok(ymd(1999, 12, 1)));
        assert_eq!(parse_month_token(" 2021-07 ", today), Ok(ymd(2021, 7, 1)));
    }

    #[test]
    fn present_maps_to_current_month() {
        let today = ymd(2025, 6, 15);
        assert_eq!(parse_month_token("Present", today), Ok(ymd(2025, 6, 1)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        let today = ymd(2025, 6, 15);
        for bad in ["", "2020", "2020-13", "01-2020", "ongoing", "2020-1-1"] {
            assert!(
                matches!(parse_month_token(bad, today), Err(DateError::InvalidFormat(_))),
                "token {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn month_token_round_trips() {
        let today = ymd(2025, 6, 1);
        for (y, m) in [(2020, 1), (1999, 12), (2024, 7)] {
            let d = ymd(y, m, 1);
            assert_eq!(parse_month_token(&source_token(d), today), Ok(d));
        }
    }

    #[test]
    fn months_between_is_signed() {
        assert_eq!(months_between(ymd(2020, 1, 1), ymd(2020, 6, 1)), 5);
        assert_eq!(months_between(ymd(2020, 6, 1), ymd(2020, 1, 1)), -5);
        assert_eq!(months_between(ymd(2019, 11, 1), ymd(2020, 2, 1)), 3);
        assert_eq!(months_between(ymd(2020, 3, 1), ymd(2020, 3, 1)), 0);
    }

    #[test]
    fn months_between_ignores_day_of_month() {
        assert_eq!(months_between(ymd(2020, 1, 31), ymd(2020, 2, 1)), 1);
    }

    #[test]
    fn formats_per_locale() {
        let d = ymd(2024, 1, 1);
        assert_eq!(format_month_year(d, DisplayLocale::English), "Jan 2024");
        assert_eq!(format_month_year(d, DisplayLocale::French), "janv. 2024");
    }
}
