//! Flexible date and date-time parsing
//!
//! Formats are tried in a fixed order and the first match wins:
//! - dates: `yyyy-MM-dd`, `d/M/yyyy`, `M/d/yyyy`
//! - date-times: ISO `yyyy-MM-ddTHH:mm[:ss[.fff]]`, `yyyy-MM-dd HHmm`,
//!   `d/M/yyyy HHmm`, `M/d/yyyy HHmm`, then any date at midnight
//!
//! Day-first is tried before month-first, so `3/4/2024` is 3 April. Slash
//! forms need a four-digit year and `HHmm` needs exactly four digits.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use super::error::{Result, TaskError};

/// Display format for date-times, e.g. `Dec 24 2023 09:00`
pub const DISPLAY_FORMAT: &str = "%b %-d %Y %H:%M";

const ISO_DATE: &str = "%Y-%m-%d";
const SLASH_DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%m/%d/%Y"];
const COMPACT_DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H%M", "%d/%m/%Y %H%M", "%m/%d/%Y %H%M"];

// Years outside 0000..=9999 carry an explicit sign, as chrono writes them
static ISO_DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]\d+|\d{4})-\d{2}-\d{2}$").expect("valid ISO date regex")
});

static ISO_DATE_TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]\d+|\d{4})-\d{2}-\d{2}T\d{2}:\d{2}(:\d{2}(\.\d{1,9})?)?$")
        .expect("valid ISO date-time regex")
});

static SLASH_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid slash date regex"));

static COMPACT_DATE_TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{4}) \d{4}$")
        .expect("valid compact date-time regex")
});

/// Parse an unambiguous `yyyy-MM-dd` date.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if !ISO_DATE_SHAPE.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, ISO_DATE).ok()
}

/// Parse an unambiguous ISO local date-time. Seconds and fraction are optional.
pub fn parse_iso_date_time(raw: &str) -> Option<NaiveDateTime> {
    if !ISO_DATE_TIME_SHAPE.is_match(raw) {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TaskError::InvalidDate(raw.to_string()));
    }

    if let Some(date) = parse_iso_date(raw) {
        return Ok(date);
    }

    if !SLASH_DATE_SHAPE.is_match(raw) {
        return Err(TaskError::InvalidDate(raw.to_string()));
    }
    SLASH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| TaskError::InvalidDate(raw.to_string()))
}

pub fn parse_date_time(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TaskError::InvalidDateTime(raw.to_string()));
    }

    if let Some(dt) = parse_iso_date_time(raw) {
        return Ok(dt);
    }

    if COMPACT_DATE_TIME_SHAPE.is_match(raw) {
        return COMPACT_DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .ok_or_else(|| TaskError::InvalidDateTime(raw.to_string()));
    }

    parse_date(raw)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| TaskError::InvalidDateTime(raw.to_string()))
}

/// Machine form used in the task file. Seconds and fraction only appear when non-zero.
pub fn format_iso_date_time(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() != 0 {
        dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    } else if dt.second() != 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M").to_string()
    }
}

pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(parse_date("2024-03-04").unwrap(), date(2024, 3, 4));
    }

    #[test]
    fn test_parse_date_prefers_day_first() {
        assert_eq!(parse_date("3/4/2024").unwrap(), date(2024, 4, 3));
    }

    #[test]
    fn test_parse_date_falls_back_to_month_first() {
        assert_eq!(parse_date("12/25/2024").unwrap(), date(2024, 12, 25));
    }

    #[test]
    fn test_parse_date_accepts_padded_slash_form() {
        assert_eq!(parse_date("03/04/2024").unwrap(), date(2024, 4, 3));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("next tuesday"),
            Err(TaskError::InvalidDate("next tuesday".to_string()))
        );
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_date_rejects_loose_iso() {
        // Not ISO and not a slash form either
        assert!(parse_date("2024-3-4").is_err());
    }

    #[test]
    fn test_parse_date_time_iso() {
        assert_eq!(
            parse_date_time("2023-12-24T09:00").unwrap(),
            date_time(2023, 12, 24, 9, 0)
        );
        assert_eq!(
            parse_date_time("2023-12-24T09:00:30").unwrap(),
            date(2023, 12, 24).and_hms_opt(9, 0, 30).unwrap()
        );
    }

    #[test]
    fn test_parse_date_time_compact_forms() {
        assert_eq!(
            parse_date_time("2019-12-02 1800").unwrap(),
            date_time(2019, 12, 2, 18, 0)
        );
        assert_eq!(
            parse_date_time("2/12/2019 1800").unwrap(),
            date_time(2019, 12, 2, 18, 0)
        );
        assert_eq!(
            parse_date_time("12/25/2019 0930").unwrap(),
            date_time(2019, 12, 25, 9, 30)
        );
    }

    #[test]
    fn test_parse_date_time_falls_back_to_midnight() {
        assert_eq!(
            parse_date_time("2024-03-04").unwrap(),
            date_time(2024, 3, 4, 0, 0)
        );
        assert_eq!(
            parse_date_time("3/4/2024").unwrap(),
            date_time(2024, 4, 3, 0, 0)
        );
    }

    #[test]
    fn test_parse_date_time_failure_is_date_time_error() {
        assert_eq!(
            parse_date_time("tomorrow"),
            Err(TaskError::InvalidDateTime("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_parse_iso_date_time_is_strict() {
        assert!(parse_iso_date_time("2024-03-04 1800").is_none());
        assert!(parse_iso_date_time("2024-03-04").is_none());
        assert!(parse_iso_date_time("2024-03-04T18:00").is_some());
    }

    #[test]
    fn test_format_iso_date_time() {
        assert_eq!(
            format_iso_date_time(&date_time(2023, 12, 24, 9, 0)),
            "2023-12-24T09:00"
        );
        let with_seconds = date(2023, 12, 24).and_hms_opt(9, 0, 5).unwrap();
        assert_eq!(format_iso_date_time(&with_seconds), "2023-12-24T09:00:05");
        let with_millis = date(2023, 12, 24).and_hms_milli_opt(9, 0, 5, 250).unwrap();
        assert_eq!(format_iso_date_time(&with_millis), "2023-12-24T09:00:05.250");
    }

    #[test]
    fn test_iso_form_parses_back() {
        let with_millis = date(2023, 12, 24).and_hms_milli_opt(9, 0, 5, 250).unwrap();
        let text = format_iso_date_time(&with_millis);
        assert_eq!(parse_iso_date_time(&text), Some(with_millis));
    }

    #[test]
    fn test_slash_forms_need_four_digit_years() {
        assert_eq!(
            parse_date("3/4/24"),
            Err(TaskError::InvalidDate("3/4/24".to_string()))
        );
        assert!(parse_date("3/4/02024").is_err());
        assert!(parse_date_time("3/4/24 1800").is_err());
        assert!(parse_date_time("3/4/24").is_err());
    }

    #[test]
    fn test_compact_time_needs_space_and_four_digits() {
        assert!(parse_date_time("2019-12-021800").is_err());
        assert!(parse_date_time("2019-12-02 180").is_err());
        assert!(parse_date_time("2/12/2019 18000").is_err());
        assert_eq!(
            parse_date_time("2019-12-02 2500"),
            Err(TaskError::InvalidDateTime("2019-12-02 2500".to_string()))
        );
    }

    #[test]
    fn test_iso_forms_accept_signed_extended_years() {
        let far = date(12024, 1, 1).and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(format_iso_date_time(&far), "+12024-01-01T09:30");
        assert_eq!(parse_iso_date_time("+12024-01-01T09:30"), Some(far));
        assert_eq!(parse_iso_date("+12024-01-01"), Some(date(12024, 1, 1)));
        assert_eq!(parse_date_time("+12024-01-01T09:30").unwrap(), far);
        // Five digits without a sign are not a year chrono writes
        assert!(parse_iso_date("12024-01-01").is_none());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(
            format_display(&date_time(2023, 12, 4, 9, 5)),
            "Dec 4 2023 09:05"
        );
    }
}
