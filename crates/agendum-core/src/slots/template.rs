//! The standard day template and interval intersection.
//!
//! A day's slots come from a fixed seven-slot template (08:30-17:30)
//! intersected with that day's active window. The same intersection
//! primitive serves both the single-day and multi-day paths.

use chrono::NaiveTime;

use super::{Slot, SlotKind};

/// One slot of the standard day template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: SlotKind,
}

fn t(hour: u32, minute: u32) -> NaiveTime {
    // Template constants are always valid clock times.
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Default start of an interior meeting day.
pub fn default_day_start() -> NaiveTime {
    t(8, 30)
}

/// Default end of an interior meeting day.
pub fn default_day_end() -> NaiveTime {
    t(17, 30)
}

/// Time-of-day at which the dinner / social marker is placed.
pub fn social_event_time() -> NaiveTime {
    t(19, 0)
}

/// The fixed standard day: work blocks separated by two coffee breaks
/// and a one-hour lunch.
pub fn standard_day() -> [TemplateSlot; 7] {
    [
        TemplateSlot { start: t(8, 30), end: t(10, 15), kind: SlotKind::Work },
        TemplateSlot { start: t(10, 15), end: t(10, 45), kind: SlotKind::CoffeeBreak },
        TemplateSlot { start: t(10, 45), end: t(12, 30), kind: SlotKind::Work },
        TemplateSlot { start: t(12, 30), end: t(13, 30), kind: SlotKind::LunchBreak },
        TemplateSlot { start: t(13, 30), end: t(15, 15), kind: SlotKind::Work },
        TemplateSlot { start: t(15, 15), end: t(15, 45), kind: SlotKind::CoffeeBreak },
        TemplateSlot { start: t(15, 45), end: t(17, 30), kind: SlotKind::Work },
    ]
}

/// Intersect two closed time-of-day intervals.
///
/// Returns `None` unless the overlap has strictly positive length.
pub fn intersect(
    a: (NaiveTime, NaiveTime),
    b: (NaiveTime, NaiveTime),
) -> Option<(NaiveTime, NaiveTime)> {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    if start < end {
        Some((start, end))
    } else {
        None
    }
}

/// Intersect the standard day template with an active window, emitting a
/// slot for every non-empty overlap in template order.
pub fn apply_standard_day(window_start: NaiveTime, window_end: NaiveTime) -> Vec<Slot> {
    standard_day()
        .iter()
        .filter_map(|slot| {
            intersect((window_start, window_end), (slot.start, slot.end)).map(|(start, end)| {
                Slot {
                    start,
                    end: Some(end),
                    duration_minutes: (end - start).num_minutes() as u32,
                    kind: slot.kind,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_covers_standard_day_without_gaps() {
        let day = standard_day();
        assert_eq!(day.len(), 7);
        for pair in day.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(day[0].start, t(8, 30));
        assert_eq!(day[6].end, t(17, 30));
    }

    #[test]
    fn intersect_requires_positive_overlap() {
        assert_eq!(
            intersect((t(9, 0), t(10, 0)), (t(9, 30), t(11, 0))),
            Some((t(9, 30), t(10, 0)))
        );
        // Touching intervals do not overlap.
        assert_eq!(intersect((t(9, 0), t(10, 0)), (t(10, 0), t(11, 0))), None);
        assert_eq!(intersect((t(9, 0), t(10, 0)), (t(11, 0), t(12, 0))), None);
    }

    #[test]
    fn full_window_yields_all_seven_slots() {
        let slots = apply_standard_day(t(8, 30), t(17, 30));
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[1].kind, SlotKind::CoffeeBreak);
        assert_eq!(slots[3].kind, SlotKind::LunchBreak);
        assert_eq!(slots[3].duration_minutes, 60);
    }

    #[test]
    fn window_clips_first_and_last_slot() {
        let slots = apply_standard_day(t(9, 0), t(16, 0));
        assert_eq!(slots[0].start, t(9, 0));
        assert_eq!(slots[0].end, Some(t(10, 15)));
        assert_eq!(slots[0].duration_minutes, 75);
        let last = slots.last().unwrap();
        assert_eq!(last.start, t(15, 45));
        assert_eq!(last.end, Some(t(16, 0)));
        assert_eq!(last.duration_minutes, 15);
    }

    #[test]
    fn window_outside_template_yields_nothing() {
        assert!(apply_standard_day(t(18, 0), t(20, 0)).is_empty());
        assert!(apply_standard_day(t(6, 0), t(8, 30)).is_empty());
    }
}
