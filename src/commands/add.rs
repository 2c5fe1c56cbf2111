use anyhow::{Context, Result};
use chrono::NaiveDate;

use annum_core::Event;

use crate::config::Config;

/// Create a new local event.
///
/// The editing surface is where `start <= end` gets enforced; everything
/// downstream (the computation core) merely tolerates violations.
pub fn cmd_add(
    config: &Config,
    title: String,
    start: String,
    end: Option<String>,
    category: String,
    notes: Option<String>,
) -> Result<()> {
    let start_date = parse_date(&start)?;
    let end_date = match end {
        Some(s) => parse_date(&s)?,
        None => start_date,
    };

    if end_date < start_date {
        anyhow::bail!(
            "End date {} is before start date {}",
            end_date.date_naive(),
            start_date.date_naive()
        );
    }

    let event = Event {
        id: format!("local-{}", uuid::Uuid::new_v4()),
        title,
        start_date,
        end_date,
        category_id: category,
        notes,
    };

    let store = super::open_store(config)?;
    store.upsert_events(vec![event.clone()])?;

    println!(
        "Added: {} ({} – {}) [{}]",
        event.title,
        event.start_date.date_naive(),
        event.end_date.date_naive(),
        event.id
    );

    Ok(())
}

/// Parse YYYY-MM-DD as midnight UTC.
fn parse_date(s: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))?;
    Ok(date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc())
}
