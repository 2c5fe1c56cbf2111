//! Continuation clipping for events that cross a view boundary.

use annum_core::Event;
use chrono::NaiveDate;

/// The visible portion of an event within one month or week of a view,
/// with flags for relabeling the segment ("cont.") when the event extends
/// past the boundary in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClippedSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub continues_before: bool,
    pub continues_after: bool,
}

/// Clip an event to the inclusive day range `[from, to]`.
///
/// Returns `None` when the event does not overlap the range at all, or when
/// its interval is inverted (never active anywhere).
pub fn clip_to_range(event: &Event, from: NaiveDate, to: NaiveDate) -> Option<ClippedSpan> {
    let start = event.start_date.date_naive();
    let end = event.end_date.date_naive();

    if end < start || end < from || start > to {
        return None;
    }

    Some(ClippedSpan {
        start: start.max(from),
        end: end.min(to),
        continues_before: start < from,
        continues_after: end > to,
    })
}
