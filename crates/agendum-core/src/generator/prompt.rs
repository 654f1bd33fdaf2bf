//! Prompt construction for the content generator.
//!
//! The slots are computed before the model is ever involved; the prompt
//! enumerates them verbatim and asks the model only to fill in content.
//! Break and social lines are pre-labelled so the model cannot move them.

use std::fmt::Write;

use indoc::formatdoc;

use crate::slots::{Schedule, ScheduleKind, SlotKind};

use super::Language;

/// System prompt sent with every generation request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful professional assistant that outputs strict JSON.";

/// Build the user prompt for an agenda generation request.
pub fn build_agenda_prompt(
    topic: &str,
    schedule: &Schedule,
    language: Language,
    email_content: Option<&str>,
    attachments: &[String],
) -> String {
    let lang = language.instruction();
    let mut prompt = String::new();

    if schedule.kind == ScheduleKind::Simple {
        let num_items = schedule.num_items.unwrap_or(3);
        let _ = write!(
            prompt,
            "Create a simple meeting agenda {lang} for: {topic}\n\n\
             Meeting Duration: {} minutes\n\n\
             Generate {num_items} agenda points as a simple list.\n\n",
            schedule.duration_minutes,
        );
    } else {
        let _ = write!(
            prompt,
            "Create a detailed meeting agenda {lang} for: {topic}\n\n\
             The time slots have been pre-calculated. Your job is to fill in \
             appropriate content for each slot.\n\n",
        );

        for (day_idx, day) in schedule.days.iter().enumerate() {
            if schedule.kind == ScheduleKind::MultiDay {
                let _ = write!(prompt, "\n**Day {} ({}):**\n", day_idx + 1, day.date);
            }

            for slot in &day.slots {
                let start = slot.start.format("%H:%M");
                match slot.kind {
                    SlotKind::LunchBreak => {
                        if let Some(end) = slot.end {
                            let _ = writeln!(
                                prompt,
                                "- {start} - {}: Lunch Break (60 mins)",
                                end.format("%H:%M")
                            );
                        }
                    }
                    SlotKind::CoffeeBreak => {
                        if let Some(end) = slot.end {
                            let _ = writeln!(
                                prompt,
                                "- {start} - {}: Coffee Break (30 mins)",
                                end.format("%H:%M")
                            );
                        }
                    }
                    SlotKind::Social => {
                        let _ = writeln!(prompt, "- {start}: Dinner / Social event");
                    }
                    SlotKind::Work => {
                        if let Some(end) = slot.end {
                            let _ = writeln!(
                                prompt,
                                "- {start} - {}: [FILL CONTENT] ({} mins)",
                                end.format("%H:%M"),
                                slot.duration_minutes
                            );
                        }
                    }
                }
            }
            prompt.push('\n');
        }
    }

    if let Some(email) = email_content {
        if !email.is_empty() {
            let _ = write!(prompt, "\nEmail Context:\n{email}\n");
        }
    }

    if !attachments.is_empty() {
        prompt.push_str("\nAttached Files Content:\n");
        for content in attachments {
            let _ = writeln!(prompt, "{content}");
        }
    }

    if schedule.kind == ScheduleKind::Simple {
        prompt.push_str(&formatdoc! {r#"

            Return a JSON object {lang} with this structure:
            {{
                "title": "Meeting title {lang}",
                "summary": "Brief summary {lang}",
                "items": [
                    {{
                        "title": "Agenda point title {lang}",
                        "description": "Brief description {lang}"
                    }}
                ]
            }}

            All text must be {lang}.
        "#});
    } else {
        prompt.push_str(&formatdoc! {r#"

            Fill in the [FILL CONTENT] slots with appropriate agenda items {lang}.

            Return a JSON object with this structure:
            {{
                "title": "Meeting title {lang}",
                "summary": "Brief summary {lang}",
                "days": [
                    {{
                        "date": "YYYY-MM-DD",
                        "start_time": "HH:MM",
                        "end_time": "HH:MM",
                        "items": [
                            {{
                                "time_slot": "HH:MM - HH:MM",
                                "title": "Item title {lang}",
                                "description": "Description {lang}",
                                "duration": "X mins",
                                "type": "work|lunch_break|coffee_break"
                            }}
                        ]
                    }}
                ]
            }}

            All text must be {lang}. Keep the exact time slots provided above.
        "#});
    }

    prompt
}

/// Build the user prompt for a free-text refinement request.
pub fn build_refine_prompt(text: &str, instruction: &str) -> String {
    format!(
        "Refine the following text according to the instruction. \
         Return only the refined text, no commentary.\n\n\
         Instruction: {instruction}\n\nText:\n{text}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::compute_schedule;

    #[test]
    fn simple_prompt_asks_for_bullet_points() {
        let schedule = compute_schedule("2024-05-01T09:00:00", "2024-05-01T09:45:00").unwrap();
        let prompt = build_agenda_prompt("Dev Sync", &schedule, Language::English, None, &[]);
        assert!(prompt.contains("Create a simple meeting agenda in English for: Dev Sync"));
        assert!(prompt.contains("Generate 3 agenda points"));
        assert!(prompt.contains("\"items\""));
        assert!(!prompt.contains("[FILL CONTENT]"));
    }

    #[test]
    fn scheduled_prompt_enumerates_slots() {
        let schedule = compute_schedule("2024-05-01T08:30:00", "2024-05-01T17:30:00").unwrap();
        let prompt = build_agenda_prompt("Planning", &schedule, Language::German, None, &[]);
        assert!(prompt.contains("in German"));
        assert!(prompt.contains("- 08:30 - 10:15: [FILL CONTENT] (105 mins)"));
        assert!(prompt.contains("- 12:30 - 13:30: Lunch Break (60 mins)"));
        assert!(prompt.contains("- 10:15 - 10:45: Coffee Break (30 mins)"));
        assert!(prompt.contains("- 19:00: Dinner / Social event"));
        assert!(prompt.contains("Keep the exact time slots provided above."));
    }

    #[test]
    fn multi_day_prompt_labels_days() {
        let schedule = compute_schedule("2024-05-01T09:00:00", "2024-05-03T15:00:00").unwrap();
        let prompt = build_agenda_prompt("Offsite", &schedule, Language::English, None, &[]);
        assert!(prompt.contains("**Day 1 (2024-05-01):**"));
        assert!(prompt.contains("**Day 3 (2024-05-03):**"));
    }

    #[test]
    fn context_sections_are_appended() {
        let schedule = compute_schedule("2024-05-01T09:00:00", "2024-05-01T09:45:00").unwrap();
        let prompt = build_agenda_prompt(
            "Dev Sync",
            &schedule,
            Language::English,
            Some("Please align on priorities."),
            &["quarterly goals doc".to_string()],
        );
        assert!(prompt.contains("Email Context:\nPlease align on priorities."));
        assert!(prompt.contains("Attached Files Content:\nquarterly goals doc"));
    }
}
