//! Plain-text rendering of agenda content for the invite DESCRIPTION.

use serde_json::Value;

/// Render generated agenda JSON as plain text.
///
/// Understands both response shapes (a flat `items` list or a `days`
/// list). Content that is not parseable JSON is passed through verbatim
/// so a malformed generator response still produces a usable invite.
pub fn render_description(agenda_content: &str) -> String {
    let data: Value = match serde_json::from_str(agenda_content) {
        Ok(value) => value,
        Err(_) => return agenda_content.to_string(),
    };

    let title = data["title"].as_str().unwrap_or("Meeting Agenda");
    let mut parts: Vec<String> = vec![title.to_string(), "=".repeat(title.chars().count())];
    parts.push(String::new());

    if let Some(summary) = data["summary"].as_str() {
        parts.push(summary.to_string());
        parts.push(String::new());
    }

    if let Some(days) = data["days"].as_array() {
        for (idx, day) in days.iter().enumerate() {
            let date = day["date"].as_str().unwrap_or("");
            parts.push(format!("DAY {} - {}", idx + 1, date));
            parts.push("-".repeat(40));

            if let Some(items) = day["items"].as_array() {
                for item in items {
                    render_item(item, &mut parts);
                }
            }
            parts.push(String::new());
        }
    } else if let Some(items) = data["items"].as_array() {
        parts.push("AGENDA ITEMS:".to_string());
        parts.push("-".repeat(40));
        parts.push(String::new());
        for item in items {
            render_item(item, &mut parts);
        }
    }

    parts.join("\n")
}

fn render_item(item: &Value, parts: &mut Vec<String>) {
    let time_slot = item["time_slot"].as_str().unwrap_or("");
    let title = item["title"].as_str().unwrap_or("");
    let duration = item["duration"].as_str().unwrap_or("");
    let description = item["description"].as_str().unwrap_or("");

    if !time_slot.is_empty() {
        let mut header = format!("{time_slot} - {title}");
        if !duration.is_empty() {
            header.push_str(&format!(" ({duration} mins)"));
        }
        parts.push(header);
    } else {
        parts.push(format!("* {title}"));
    }

    if !description.is_empty() {
        parts.push(format!("  {description}"));
    }
    parts.push(String::new());
}
