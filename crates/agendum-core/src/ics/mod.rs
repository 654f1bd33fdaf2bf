//! Calendar invite (.ics) generation per RFC 5545.
//!
//! Event times are written as floating local times, matching the naive
//! date-times used everywhere else. The DESCRIPTION carries a plain-text
//! rendering of the generated agenda content.

mod render;

use chrono::{NaiveDateTime, Utc};

use crate::error::Result;
use crate::slots::parse_timestamp;

pub use render::render_description;

const PRODID: &str = "-//Agendum//Agendum 0.1//EN";

/// A generated calendar invite: payload bytes plus a suggested filename.
#[derive(Debug, Clone)]
pub struct IcsExport {
    pub payload: Vec<u8>,
    pub filename: String,
}

/// Build a calendar invite for a meeting.
///
/// `agenda_content` is the (nominally JSON) generator output; it is
/// rendered to plain text for the DESCRIPTION property.
pub fn export_invite(
    topic: &str,
    start_time: &str,
    end_time: &str,
    location: &str,
    agenda_content: &str,
) -> Result<IcsExport> {
    let start = parse_timestamp(start_time)?;
    let end = parse_timestamp(end_time)?;

    let description = render_description(agenda_content);
    let payload = build_calendar(topic, start, end, location, &description).into_bytes();

    Ok(IcsExport {
        payload,
        filename: invite_filename(topic, start),
    })
}

/// Suggested filename: `YYYY-MM-DD HH-MM <sanitized topic>.ics`.
pub fn invite_filename(topic: &str, start: NaiveDateTime) -> String {
    format!(
        "{} {} {}.ics",
        start.format("%Y-%m-%d"),
        start.format("%H-%M"),
        sanitize_topic(topic)
    )
}

/// Strip a topic down to a filesystem-friendly form: ASCII alphanumerics
/// and spaces only, collapsed whitespace, at most 50 characters.
pub fn sanitize_topic(topic: &str) -> String {
    let kept: String = topic
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(50)
        .collect()
}

fn build_calendar(
    topic: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: &str,
    description: &str,
) -> String {
    const DT: &str = "%Y%m%dT%H%M%S";
    let uid = format!("{}-{}@agendum", start.format(DT), end.format(DT));

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        format!("PRODID:{PRODID}"),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{uid}"),
        fold_line(&format!("SUMMARY:{}", escape_text(topic))),
        format!("DTSTART:{}", start.format(DT)),
        format!("DTEND:{}", end.format(DT)),
        format!("DTSTAMP:{}", Utc::now().format("%Y%m%dT%H%M%SZ")),
        fold_line(&format!("LOCATION:{}", escape_text(location))),
        fold_line(&format!("DESCRIPTION:{}", escape_text(description))),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Escape a TEXT property value (RFC 5545 §3.3.11).
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

/// Fold a content line at 75 octets (RFC 5545 §3.1), continuation lines
/// prefixed with a single space.
fn fold_line(line: &str) -> String {
    const LIMIT: usize = 75;
    if line.len() <= LIMIT {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / LIMIT * 3);
    let mut budget = LIMIT;
    let mut used = 0;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            folded.push_str("\r\n ");
            // Continuation lines lose one octet to the leading space.
            budget = LIMIT - 1;
            used = 0;
        }
        folded.push(ch);
        used += width;
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn sanitizes_topics_for_filenames() {
        assert_eq!(sanitize_topic("Dev Sync"), "Dev Sync");
        assert_eq!(sanitize_topic("Exchange Dev <> Research!"), "Exchange Dev Research");
        assert_eq!(sanitize_topic("  spaced   out  "), "spaced out");
        let long = "a".repeat(80);
        assert_eq!(sanitize_topic(&long).chars().count(), 50);
    }

    #[test]
    fn filename_embeds_start_date_and_time() {
        assert_eq!(
            invite_filename("Dev Sync", start()),
            "2024-12-05 10-00 Dev Sync.ics"
        );
    }

    #[test]
    fn export_produces_a_calendar_payload() {
        let export = export_invite(
            "Dev Sync",
            "2024-12-05T10:00:00",
            "2024-12-05T11:00:00",
            "Room A",
            "{\"title\": \"Dev Sync\", \"items\": []}",
        )
        .unwrap();

        let text = String::from_utf8(export.payload).unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
        assert!(text.contains("SUMMARY:Dev Sync"));
        assert!(text.contains("DTSTART:20241205T100000"));
        assert!(text.contains("DTEND:20241205T110000"));
        assert!(text.contains("LOCATION:Room A"));
        assert!(text.contains("DESCRIPTION:Dev Sync\\n========"));
        assert_eq!(export.filename, "2024-12-05 10-00 Dev Sync.ics");
    }

    #[test]
    fn export_rejects_malformed_timestamps() {
        assert!(export_invite("Dev Sync", "yesterday", "2024-12-05T11:00:00", "Room A", "{}").is_err());
    }

    #[test]
    fn text_values_are_escaped() {
        assert_eq!(escape_text("a;b,c\\d"), "a\\;b\\,c\\\\d");
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
    }

    #[test]
    fn long_lines_are_folded() {
        let line = format!("DESCRIPTION:{}", "x".repeat(200));
        let folded = fold_line(&line);
        for part in folded.split("\r\n") {
            assert!(part.len() <= 75);
        }
        assert_eq!(folded.replace("\r\n ", ""), line);
    }
}
