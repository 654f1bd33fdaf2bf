//! Deterministic time-slot scheduler.
//!
//! Given a start and end timestamp, partition the span into typed slots
//! (work, coffee break, lunch break, social) according to fixed rules:
//!
//! - All times are floored to 15-minute boundaries.
//! - Meetings under 60 minutes get no slots, just an item-count hint.
//! - Longer single-day meetings follow the standard day template.
//! - Multi-day meetings run 08:30-17:30 on interior days, with a separate
//!   schedule per calendar date.
//!
//! The computation is a pure function of the two inputs: no I/O, no
//! hidden state, identical output on every call.

mod template;
mod timestamp;
pub(crate) mod wire;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result, ValidationError};

pub use template::{apply_standard_day, default_day_end, default_day_start, intersect,
    social_event_time, standard_day, TemplateSlot};
pub use timestamp::{floor_to_quarter_hour, parse_timestamp, strip_utc_suffix};

/// Classification of a computed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Under an hour: bare bullet points, no slots
    Simple,
    /// A single day partitioned by the standard template
    Scheduled,
    /// One schedule per calendar date
    MultiDay,
}

/// Type of an individual slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Work,
    CoffeeBreak,
    LunchBreak,
    Social,
}

/// An atomic scheduled block within one day.
///
/// The social marker is instantaneous: no end time, zero duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(with = "wire::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "wire::hhmm_or_empty")]
    pub end: Option<NaiveTime>,
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: SlotKind,
}

impl Slot {
    fn social() -> Self {
        Self {
            start: social_event_time(),
            end: None,
            duration_minutes: 0,
            kind: SlotKind::Social,
        }
    }
}

/// One day's worth of the meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    #[serde(with = "wire::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "wire::hhmm")]
    pub end_time: NaiveTime,
    pub slots: Vec<Slot>,
}

/// The scheduler's sole output.
///
/// Serializes to the wire shape consumed by the content generator and
/// the calendar exporter; field names and enum values are load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    pub duration_minutes: u32,
    /// Hint for the renderer: how many bullet points to produce.
    /// Present only for `simple` schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_items: Option<u32>,
    pub days: Vec<DaySchedule>,
}

/// Compute the deterministic slot partition for a meeting span.
///
/// Both timestamps are parsed as naive local date-times (a trailing `Z`
/// is stripped, other offsets discarded) and floored to 15-minute
/// boundaries before classification.
pub fn compute_schedule(start_time: &str, end_time: &str) -> Result<Schedule> {
    let start = floor_to_quarter_hour(parse_timestamp(start_time)?);
    let end = floor_to_quarter_hour(parse_timestamp(end_time)?);
    compute_between(start, end).map_err(CoreError::from)
}

/// Slot computation over already-parsed, already-floored bounds.
///
/// Rejects `end <= start` outright rather than emitting a degenerate
/// empty schedule.
pub fn compute_between(
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> std::result::Result<Schedule, ValidationError> {
    if end <= start {
        return Err(ValidationError::InvalidTimeRange { start, end });
    }

    if start.date() != end.date() {
        return Ok(multi_day_schedule(start, end));
    }

    let total_minutes = (end - start).num_minutes() as u32;
    if total_minutes < 60 {
        Ok(simple_schedule(start, end, total_minutes))
    } else {
        Ok(single_day_schedule(start, end, total_minutes))
    }
}

fn simple_schedule(start: NaiveDateTime, end: NaiveDateTime, total_minutes: u32) -> Schedule {
    Schedule {
        kind: ScheduleKind::Simple,
        duration_minutes: total_minutes,
        num_items: Some((total_minutes / 15).max(3)),
        days: vec![DaySchedule {
            date: start.date(),
            start_time: start.time(),
            end_time: end.time(),
            slots: Vec::new(),
        }],
    }
}

fn single_day_schedule(start: NaiveDateTime, end: NaiveDateTime, total_minutes: u32) -> Schedule {
    let mut slots = apply_standard_day(start.time(), end.time());
    if qualifies_for_social(end.time()) {
        slots.push(Slot::social());
    }

    Schedule {
        kind: ScheduleKind::Scheduled,
        duration_minutes: total_minutes,
        num_items: None,
        days: vec![DaySchedule {
            date: start.date(),
            start_time: start.time(),
            end_time: end.time(),
            slots,
        }],
    }
}

fn multi_day_schedule(start: NaiveDateTime, end: NaiveDateTime) -> Schedule {
    let end_date = end.date();
    let mut days = Vec::new();
    let mut current = start.date();

    while current <= end_date {
        let day_start = if current == start.date() {
            start.time()
        } else {
            default_day_start()
        };
        let day_end = if current == end_date {
            end.time()
        } else {
            default_day_end()
        };

        let mut slots = apply_standard_day(day_start, day_end);

        // Dinner is unconditional except on the final day, which must run
        // into the evening to earn it.
        if current != end_date || qualifies_for_social(day_end) {
            slots.push(Slot::social());
        }

        days.push(DaySchedule {
            date: current,
            start_time: day_start,
            end_time: day_end,
            slots,
        });

        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let duration_minutes = days
        .iter()
        .flat_map(|day| day.slots.iter())
        .map(|slot| slot.duration_minutes)
        .sum();

    Schedule {
        kind: ScheduleKind::MultiDay,
        duration_minutes,
        num_items: None,
        days,
    }
}

/// Literal dinner rule: `hour >= 17 AND minute >= 30`.
///
/// This is a conjunction on the components, not a time-of-day comparison:
/// 17:45 qualifies but 18:00 does not (minute 0 fails the test). Replicated
/// as-is for compatibility with existing renderers.
fn qualifies_for_social(day_end: NaiveTime) -> bool {
    day_end.hour() >= 17 && day_end.minute() >= 30
}
