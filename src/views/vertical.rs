//! Vertical layout: classic month grids with a Monday-first weekday header
//! and leading padding so day 1 lands under its weekday column.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use annum_core::grid::month_grid;
use annum_core::{Event, Settings};

use super::{day_marker, faded, names};

pub fn render(
    year: i32,
    events: &[Event],
    settings: &Settings,
    today: NaiveDate,
) -> Result<String> {
    let months = names::month_names(settings.language);
    let mut out = String::new();

    for month0 in 0..12u32 {
        let grid = month_grid(year, month0)?;

        out.push_str(&format!("{} {}\n", months[month0 as usize], year));
        for weekday in names::WEEKDAYS {
            out.push_str(&format!("{:>4}", weekday));
        }
        out.push('\n');

        let mut column = 0;
        for _ in 0..grid.start_padding {
            out.push_str("    ");
            column += 1;
        }

        for date in &grid.days {
            if faded(*date, events, settings, today) {
                out.push_str("   ·");
            } else {
                out.push_str(&format!("{:>3}{}", date.day(), day_marker(*date, events, settings)));
            }
            column += 1;
            if column == 7 {
                out.push('\n');
                column = 0;
            }
        }
        if column != 0 {
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn april_2025_first_row_is_padded_one_cell() {
        let rendered = render(2025, &[], &Settings::default(), today()).unwrap();
        let mut lines = rendered.lines().skip_while(|l| !l.starts_with("April"));
        lines.next(); // month title
        let header = lines.next().unwrap();
        assert!(header.trim_start().starts_with("Mon"));
        let first_row = lines.next().unwrap();
        // One blank cell, then day 1 under Tuesday
        assert_eq!(&first_row[..8], "      1 ");
    }

    #[test]
    fn every_week_row_fits_seven_columns() {
        let rendered = render(2025, &[], &Settings::default(), today()).unwrap();
        for line in rendered.lines() {
            // 7 columns of width 4
            assert!(line.len() <= 28, "{:?}", line);
        }
    }

    #[test]
    fn event_days_are_marked() {
        let events = vec![Event {
            id: "e".to_string(),
            title: "Marked".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 7, 8, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 7, 9, 0, 0, 0).unwrap(),
            category_id: "work".to_string(),
            notes: None,
        }];
        let rendered = render(2025, &events, &Settings::default(), today()).unwrap();
        let july: String = rendered
            .lines()
            .skip_while(|l| !l.starts_with("July"))
            .take(8)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(july.contains("8*"));
        assert!(july.contains("9*"));
        assert!(!july.contains("10*"));
    }
}
