use anyhow::Result;
use chrono::Datelike;

use annum_core::interval::inclusive_span_days;
use annum_core::aggregate::detect_chains;

use crate::config::Config;

/// List stored events, optionally restricted to those touching `year`.
pub fn cmd_list(config: &Config, year: Option<i32>) -> Result<()> {
    let store = super::open_store(config)?;
    let mut events = super::load_events_lenient(&store);

    if let Some(year) = year {
        events.retain(|e| {
            e.start_date.date_naive().year() <= year && e.end_date.date_naive().year() >= year
        });
    }

    if events.is_empty() {
        println!("No events stored. Add one with `annum add`.");
        return Ok(());
    }

    let chains = detect_chains(&events);

    for event in &events {
        let span = inclusive_span_days(event);
        let chain_mark = if chains.contains(&event.id) { "  ⛓" } else { "" };
        println!(
            "{}  {} – {}  {:>3}d  [{}]  {}{}",
            event.id,
            event.start_date.date_naive(),
            event.end_date.date_naive(),
            span,
            event.category_id,
            event.title,
            chain_mark
        );
    }

    println!("\n{} event(s), {} chain(s)", events.len(), chains.len());

    Ok(())
}
