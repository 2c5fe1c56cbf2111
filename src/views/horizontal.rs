//! Horizontal layout: one row per month, days running left to right,
//! followed by the month's event segments with continuation labels.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use annum_core::grid::month_grid;
use annum_core::{Category, Event, Settings};

use super::{clip_to_range, day_marker, faded, names};

pub fn render(
    year: i32,
    events: &[Event],
    categories: &[Category],
    settings: &Settings,
    today: NaiveDate,
) -> Result<String> {
    let months = names::month_names(settings.language);
    let mut out = String::new();

    for month0 in 0..12u32 {
        let grid = month_grid(year, month0)?;

        out.push_str(&format!("{:<10}", months[month0 as usize]));
        for date in &grid.days {
            if faded(*date, events, settings, today) {
                out.push_str("  · ");
            } else {
                out.push_str(&format!("{:>3}{}", date.day(), day_marker(*date, events, settings)));
            }
        }
        out.push('\n');

        for line in month_event_lines(&grid.days, events, categories, settings) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(out)
}

/// One line per event segment visible in this month, clipped at the month
/// boundary and relabeled when it continues beyond it.
fn month_event_lines(
    days: &[NaiveDate],
    events: &[Event],
    categories: &[Category],
    settings: &Settings,
) -> Vec<String> {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return Vec::new();
    };

    events
        .iter()
        .filter_map(|event| {
            let clipped = clip_to_range(event, *first, *last)?;

            let label = categories
                .iter()
                .find(|c| c.id == event.category_id)
                .map(|c| c.label.as_str())
                .unwrap_or(event.category_id.as_str());

            let mut line = format!(
                "          {:>2}–{:>2}  {} ({})",
                clipped.start.day(),
                clipped.end.day(),
                event.title,
                label
            );
            if clipped.continues_before || clipped.continues_after {
                line.push_str(&format!(" [{}]", names::continuation_label(settings.language)));
            }
            Some(line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use annum_core::{default_categories, Language};
    use chrono::{TimeZone, Utc};

    fn event(id: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            start_date: Utc
                .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
                .unwrap(),
            end_date: Utc.with_ymd_and_hms(end.0, end.1, end.2, 0, 0, 0).unwrap(),
            category_id: "travel".to_string(),
            notes: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn renders_twelve_month_rows() {
        let rendered = render(
            2025,
            &[],
            &default_categories(Language::En),
            &Settings::default(),
            today(),
        )
        .unwrap();
        assert!(rendered.contains("January"));
        assert!(rendered.contains("December"));
    }

    #[test]
    fn cross_month_event_gets_continuation_label_in_both_months() {
        let events = vec![event("trip", (2025, 3, 28), (2025, 4, 3))];
        let rendered = render(
            2025,
            &events,
            &default_categories(Language::En),
            &Settings::default(),
            today(),
        )
        .unwrap();

        let lines: Vec<&str> = rendered
            .lines()
            .filter(|l| l.contains("Event trip"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("28–31"));
        assert!(lines[0].contains("[cont.]"));
        assert!(lines[1].contains(" 1– 3"));
        assert!(lines[1].contains("[cont.]"));
        assert!(lines[0].contains("(Travel)"));
    }

    #[test]
    fn contained_event_has_no_continuation_label() {
        let events = vec![event("short", (2025, 5, 5), (2025, 5, 7))];
        let rendered = render(
            2025,
            &events,
            &default_categories(Language::En),
            &Settings::default(),
            today(),
        )
        .unwrap();
        let line = rendered
            .lines()
            .find(|l| l.contains("Event short"))
            .unwrap();
        assert!(!line.contains("[cont.]"));
    }

    #[test]
    fn fade_past_replaces_eventless_past_days() {
        let mut settings = Settings::default();
        settings.fade_past = true;
        let rendered = render(
            2025,
            &[],
            &default_categories(Language::En),
            &settings,
            today(),
        )
        .unwrap();
        // January 2025 is entirely in the past relative to 2025-06-15
        let january = rendered.lines().next().unwrap();
        assert!(january.contains("·"));
        // December is entirely in the future
        let december = rendered
            .lines()
            .find(|l| l.starts_with("December"))
            .unwrap();
        assert!(!december.contains("·"));
    }
}
