//! View assemblers: map the core's grid/week structures plus events to
//! renderable text for each of the three year layouts.
//!
//! Everything here is a pure function of `(year, events, categories,
//! settings, today)`; the current date is passed in so rendering stays
//! deterministic and testable.

mod clip;
mod cyclic;
mod horizontal;
mod names;
mod vertical;

pub use clip::{clip_to_range, ClippedSpan};

use anyhow::Result;
use chrono::NaiveDate;

use annum_core::aggregate::{detect_chains, events_on_day, is_burnout_day};
use annum_core::{Category, Event, Layout, Settings};

/// Render a full year in the layout selected by `settings`, with the chain
/// advisory banner on top when warnings are enabled.
pub fn render(
    year: i32,
    events: &[Event],
    categories: &[Category],
    settings: &Settings,
    today: NaiveDate,
) -> Result<String> {
    let visible: Vec<Event> = events
        .iter()
        .filter(|e| settings.category_active(&e.category_id))
        .cloned()
        .collect();

    let mut out = String::new();

    if settings.show_burnout_warnings {
        let chains = detect_chains(&visible);
        if !chains.is_empty() {
            out.push_str(&names::chain_advisory(settings.language, chains.len()));
            out.push_str("\n\n");
        }
    }

    let body = match settings.layout {
        Layout::Horizontal => horizontal::render(year, &visible, categories, settings, today)?,
        Layout::Vertical => vertical::render(year, &visible, settings, today)?,
        Layout::Cyclic => cyclic::render(year, &visible, settings)?,
    };
    out.push_str(&body);

    Ok(out)
}

/// Marker character for one day cell: burnout beats plain activity.
fn day_marker(date: NaiveDate, events: &[Event], settings: &Settings) -> char {
    if settings.show_burnout_warnings && is_burnout_day(date, events) {
        '!'
    } else if !events_on_day(date, events).is_empty() {
        '*'
    } else {
        ' '
    }
}

/// Whether a day should render faded (past, eventless, fade_past on).
fn faded(date: NaiveDate, events: &[Event], settings: &Settings, today: NaiveDate) -> bool {
    settings.fade_past && date < today && events_on_day(date, events).is_empty()
}
