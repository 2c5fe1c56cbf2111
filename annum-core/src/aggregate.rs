//! Per-day event aggregation and the burnout/chain signals derived from it.

use chrono::NaiveDate;

use crate::event::Event;
use crate::interval::{event_active_on, inclusive_span_days};

/// Number of simultaneously active events that flags a day as burnout.
pub const BURNOUT_THRESHOLD: usize = 3;

/// Minimum inclusive span, in days, for an event to count as a chain.
pub const CHAIN_MIN_DAYS: i64 = 14;

/// All events active on `date`, preserving input order.
pub fn events_on_day<'a>(date: NaiveDate, events: &'a [Event]) -> Vec<&'a Event> {
    events.iter().filter(|e| event_active_on(date, e)).collect()
}

/// Whether `date` has [`BURNOUT_THRESHOLD`] or more simultaneously active
/// events.
pub fn is_burnout_day(date: NaiveDate, events: &[Event]) -> bool {
    events
        .iter()
        .filter(|e| event_active_on(date, e))
        .take(BURNOUT_THRESHOLD)
        .count()
        >= BURNOUT_THRESHOLD
}

/// Ids of events whose inclusive span is at least [`CHAIN_MIN_DAYS`],
/// in input order.
///
/// An event running 2025-01-01 through 2025-01-14 spans exactly 14 days and
/// qualifies; a 13-day span does not.
pub fn detect_chains(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter(|e| inclusive_span_days(e) >= CHAIN_MIN_DAYS)
        .map(|e| e.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            title: id.to_string(),
            start_date: Utc
                .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
                .unwrap(),
            end_date: Utc.with_ymd_and_hms(end.0, end.1, end.2, 0, 0, 0).unwrap(),
            category_id: "work".to_string(),
            notes: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn events_on_day_preserves_input_order() {
        let events = vec![
            event("b", (2025, 5, 1), (2025, 5, 10)),
            event("a", (2025, 5, 3), (2025, 5, 4)),
            event("c", (2025, 6, 1), (2025, 6, 2)),
        ];
        let active = events_on_day(day(2025, 5, 3), &events);
        let ids: Vec<&str> = active.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn burnout_needs_three_active_events() {
        let events = vec![
            event("a", (2025, 5, 1), (2025, 5, 10)),
            event("b", (2025, 5, 5), (2025, 5, 6)),
            event("c", (2025, 5, 6), (2025, 5, 8)),
        ];
        // May 5th: only a + b active
        assert!(!is_burnout_day(day(2025, 5, 5), &events));
        // May 6th: all three active
        assert!(is_burnout_day(day(2025, 5, 6), &events));
        assert!(!is_burnout_day(day(2025, 5, 20), &events));
    }

    #[test]
    fn chain_threshold_is_fourteen_inclusive_days() {
        let events = vec![
            // Exactly 14 days inclusive: qualifies
            event("two-weeks", (2025, 1, 1), (2025, 1, 14)),
            // 13 days inclusive: does not
            event("thirteen", (2025, 2, 1), (2025, 2, 13)),
            // 2025-01-25 minus 2025-01-15 is a 10-day difference, an
            // 11-day inclusive span: does not
            event("mid-jan", (2025, 1, 15), (2025, 1, 25)),
            event("month-long", (2025, 7, 1), (2025, 7, 31)),
        ];
        assert_eq!(detect_chains(&events), vec!["two-weeks", "month-long"]);
    }

    #[test]
    fn degenerate_events_never_chain() {
        let events = vec![event("inverted", (2025, 3, 20), (2025, 3, 1))];
        assert!(detect_chains(&events).is_empty());
    }

    #[test]
    fn empty_input_degrades_to_empty_output() {
        assert!(events_on_day(day(2025, 1, 1), &[]).is_empty());
        assert!(!is_burnout_day(day(2025, 1, 1), &[]));
        assert!(detect_chains(&[]).is_empty());
    }
}
