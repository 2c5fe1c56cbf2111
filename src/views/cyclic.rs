//! Cyclic layout: quarter-by-quarter listing of the 13-week structure,
//! annotated with cycle position, check-in flags and per-week activity.

use anyhow::Result;
use chrono::Datelike;

use annum_core::aggregate::{events_on_day, is_burnout_day};
use annum_core::cyclic::{cyclic_year, Week, WeekKind};
use annum_core::{Event, Settings};

use super::names;

pub fn render(year: i32, events: &[Event], settings: &Settings) -> Result<String> {
    let cy = cyclic_year(year)?;
    let months = names::month_names(settings.language);
    let mut out = String::new();

    for quarter in &cy.quarters {
        out.push_str(&format!(
            "{} {}\n",
            names::quarter_label(settings.language),
            quarter.number
        ));

        for week in &quarter.weeks {
            out.push_str(&week_line(week, events, settings, months));
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(out)
}

fn week_line(
    week: &Week,
    events: &[Event],
    settings: &Settings,
    months: &[&str; 12],
) -> String {
    let first = week.days[0];
    let last = week.days[week.days.len() - 1];

    let span = format!(
        "{} {:>2} – {} {:>2}",
        &months[first.month0() as usize][..3],
        first.day(),
        &months[last.month0() as usize][..3],
        last.day()
    );

    let annotation = match week.kind {
        WeekKind::Reset => names::reset_label(settings.language).to_string(),
        WeekKind::Prep => names::prep_label(settings.language).to_string(),
        WeekKind::Standard => {
            let mut s = format!(
                "cycle {}.{}",
                week.cycle_index + 1,
                week.week_in_cycle + 1
            );
            if week.is_check_in {
                s.push_str(&format!("  [{}]", names::check_in_label(settings.language)));
            }
            s
        }
    };

    let active: usize = week
        .days
        .iter()
        .map(|d| events_on_day(*d, events).len())
        .max()
        .unwrap_or(0);
    let burnout = settings.show_burnout_warnings
        && week.days.iter().any(|d| is_burnout_day(*d, events));

    let mut line = format!("  W{:02}  {}  {}", week.week_number, span, annotation);
    if active > 0 {
        line.push_str(&format!("  ({} active)", active));
    }
    if burnout {
        line.push_str("  !");
    }
    line
}
