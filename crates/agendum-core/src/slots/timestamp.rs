//! Timestamp parsing and quarter-hour normalization.
//!
//! Inputs are ISO-8601-like strings. A trailing `Z` is stripped as text
//! before parsing -- this is not a timezone conversion. Any other offset
//! is discarded as well: the clock reading is kept as written and treated
//! as naive local time.

use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::error::ParseError;

/// Strip a trailing UTC marker (`Z` or `z`) from a timestamp string.
///
/// Purely textual; the remainder is parsed as a naive local date-time.
pub fn strip_utc_suffix(input: &str) -> &str {
    let trimmed = input.trim();
    trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed)
}

/// Parse an ISO-8601-like timestamp into a naive local date-time.
///
/// Accepts `T` or space separators, with or without seconds and
/// fractional seconds. A numeric offset (`+02:00`) is discarded, not
/// converted: the wall-clock reading is returned unchanged.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, ParseError> {
    let text = strip_utc_suffix(input);

    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(dt);
        }
    }

    // Last resort: an explicit offset was supplied. Keep the clock reading,
    // drop the offset.
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }

    Err(ParseError::InvalidTimestamp {
        input: input.to_string(),
        message: "expected an ISO-8601 date-time such as 2024-05-01T09:00:00".to_string(),
    })
}

/// Floor a date-time to the nearest 15-minute boundary.
///
/// Minutes are truncated to the largest multiple of 15; seconds and
/// sub-second components are dropped, not rounded.
pub fn floor_to_quarter_hour(dt: NaiveDateTime) -> NaiveDateTime {
    let minute = (dt.minute() / 15) * 15;
    // Components are in range by construction, so this never yields None.
    dt.date()
        .and_hms_opt(dt.hour(), minute, 0)
        .unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn strips_trailing_utc_marker() {
        assert_eq!(strip_utc_suffix("2024-05-01T09:00:00Z"), "2024-05-01T09:00:00");
        assert_eq!(strip_utc_suffix("2024-05-01T09:00:00"), "2024-05-01T09:00:00");
        assert_eq!(strip_utc_suffix("  2024-05-01T09:00:00z "), "2024-05-01T09:00:00");
    }

    #[test]
    fn parses_with_and_without_seconds() {
        assert_eq!(parse_timestamp("2024-05-01T09:00:00").unwrap(), dt(2024, 5, 1, 9, 0, 0));
        assert_eq!(parse_timestamp("2024-05-01T09:00").unwrap(), dt(2024, 5, 1, 9, 0, 0));
        assert_eq!(parse_timestamp("2024-05-01 09:00:00").unwrap(), dt(2024, 5, 1, 9, 0, 0));
    }

    #[test]
    fn utc_marker_is_stripped_not_converted() {
        assert_eq!(
            parse_timestamp("2024-05-01T09:00:00Z").unwrap(),
            dt(2024, 5, 1, 9, 0, 0)
        );
    }

    #[test]
    fn numeric_offset_is_discarded_not_converted() {
        // +02:00 would shift the clock if converted; we keep 09:00 as written.
        assert_eq!(
            parse_timestamp("2024-05-01T09:00:00+02:00").unwrap(),
            dt(2024, 5, 1, 9, 0, 0)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a timestamp").is_err());
        assert!(parse_timestamp("2024-13-40T09:00:00").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn floors_minutes_to_quarter_hour() {
        assert_eq!(floor_to_quarter_hour(dt(2024, 5, 1, 9, 7, 0)), dt(2024, 5, 1, 9, 0, 0));
        assert_eq!(floor_to_quarter_hour(dt(2024, 5, 1, 10, 4, 59)), dt(2024, 5, 1, 10, 0, 0));
        assert_eq!(floor_to_quarter_hour(dt(2024, 5, 1, 9, 44, 30)), dt(2024, 5, 1, 9, 30, 0));
        assert_eq!(floor_to_quarter_hour(dt(2024, 5, 1, 9, 45, 0)), dt(2024, 5, 1, 9, 45, 0));
    }
}
