//! Primitive date-interval math: weekday normalization and inclusive
//! day-membership for events.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;

/// Zero-based weekday with Monday=0 .. Sunday=6.
///
/// Rebases chrono's Sunday-first convention onto the Monday-first week the
/// rest of the crate assumes.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Whether `event` is active on `date`.
///
/// Membership is inclusive on both ends and date-only: an event starting at
/// 23:00 on its first day and ending at 01:00 on its last day is active on
/// both. An inverted interval (`end_date < start_date`) is never active.
pub fn event_active_on(date: NaiveDate, event: &Event) -> bool {
    let start = event.start_date.date_naive();
    let end = event.end_date.date_naive();
    start <= date && date <= end
}

/// Inclusive duration of an event in whole days, ignoring time-of-day.
///
/// A same-day event spans 1 day. Inverted intervals clamp to the 1-day
/// minimum so that downstream width calculations never see zero or
/// negative spans.
pub fn inclusive_span_days(event: &Event) -> i64 {
    let diff = event
        .end_date
        .date_naive()
        .signed_duration_since(event.start_date.date_naive())
        .num_days();
    (diff + 1).max(1)
}
