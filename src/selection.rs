//! Day-selection strings.
//!
//! The calendar reports a selected day as `MM/DD/YY`. The entry form keeps
//! that string and parses it back on submit, expanding the two-digit year
//! into the 2000s.

use chrono::{Datelike, NaiveDate};

/// Format used for selection notifications
pub const SELECTION_FORMAT: &str = "%m/%d/%y";

/// Years a two-digit selection can name
pub const FIRST_YEAR: i32 = 2000;
pub const LAST_YEAR: i32 = 2099;

/// Error parsing a selection string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("expected MM/DD/YY, got {0:?}")]
    Malformed(String),
    #[error("invalid literal for {field}: {value:?}")]
    NotNumeric { field: &'static str, value: String },
    #[error("{month}/{day}/{year} is not a calendar date")]
    OutOfRange { month: u32, day: u32, year: i32 },
}

/// Whether `date` survives a format/parse round trip
pub fn is_selectable(date: NaiveDate) -> bool {
    (FIRST_YEAR..=LAST_YEAR).contains(&date.year())
}

/// Pull `date` into the selectable years, snapping to the nearest end
pub fn clamp_selectable(date: NaiveDate) -> NaiveDate {
    let clamped = if date.year() < FIRST_YEAR {
        NaiveDate::from_ymd_opt(FIRST_YEAR, 1, 1)
    } else if date.year() > LAST_YEAR {
        NaiveDate::from_ymd_opt(LAST_YEAR, 12, 31)
    } else {
        Some(date)
    };
    clamped.unwrap_or(date)
}

/// Render a date the way the calendar reports a selection
pub fn format_selection(date: NaiveDate) -> String {
    date.format(SELECTION_FORMAT).to_string()
}

/// Parse a `MM/DD/YY` selection string into a date in the 2000s
pub fn parse_selection(s: &str) -> Result<NaiveDate, DateParseError> {
    let parts: Vec<&str> = s.trim().split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(DateParseError::Malformed(s.to_string()));
    };

    let month = parse_field("month", month)?;
    let day = parse_field("day", day)?;
    let short_year = parse_field("year", year)?;
    let year = i32::try_from(short_year)
        .ok()
        .and_then(|y| y.checked_add(2000))
        .ok_or_else(|| DateParseError::Malformed(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::OutOfRange { month, day, year })
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, DateParseError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| DateParseError::NotNumeric {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_selection() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).unwrap();
        assert_eq!(format_selection(date), "03/02/25");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("03/22/25"),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 22).unwrap())
        );
        assert_eq!(
            parse_selection("12/31/99"),
            Ok(NaiveDate::from_ymd_opt(2099, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(matches!(parse_selection(""), Err(DateParseError::Malformed(_))));
        assert!(matches!(parse_selection("03/22"), Err(DateParseError::Malformed(_))));
        assert!(matches!(
            parse_selection("03/xx/25"),
            Err(DateParseError::NotNumeric { field: "day", .. })
        ));
        assert_eq!(
            parse_selection("02/30/25"),
            Err(DateParseError::OutOfRange { month: 2, day: 30, year: 2025 })
        );
    }

    #[test]
    fn test_error_message() {
        let err = parse_selection("ab/01/25").unwrap_err();
        assert_eq!(err.to_string(), "invalid literal for month: \"ab\"");
    }

    #[test]
    fn test_selectable_years() {
        let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert!(is_selectable(ymd(2000, 1, 1)));
        assert!(is_selectable(ymd(2099, 12, 31)));
        assert!(!is_selectable(ymd(1999, 12, 31)));
        assert!(!is_selectable(ymd(2100, 1, 1)));

        assert_eq!(clamp_selectable(ymd(1999, 12, 31)), ymd(2000, 1, 1));
        assert_eq!(clamp_selectable(ymd(2150, 6, 1)), ymd(2099, 12, 31));
        assert_eq!(clamp_selectable(ymd(2025, 3, 22)), ymd(2025, 3, 22));
    }

    #[test]
    fn test_format_parse_agree() {
        let date = NaiveDate::from_ymd_opt(2031, 11, 9).unwrap();
        assert_eq!(parse_selection(&format_selection(date)), Ok(date));
    }
}
