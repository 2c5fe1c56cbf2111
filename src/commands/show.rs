use anyhow::Result;
use chrono::{Datelike, Utc};

use annum_core::{Layout, Settings};

use crate::config::Config;
use crate::views;

/// Render the year in one of the three layouts.
pub fn cmd_show(
    config: &Config,
    year: Option<i32>,
    layout: Option<Layout>,
    categories: Vec<String>,
) -> Result<()> {
    let store = super::open_store(config)?;
    let events = super::load_events_lenient(&store);

    let language = config.display.language;
    let category_list = store.load_categories(language)?;

    let settings = Settings {
        fade_past: config.display.fade_past,
        show_burnout_warnings: config.display.show_burnout_warnings,
        active_category_ids: if categories.is_empty() {
            None
        } else {
            Some(categories.into_iter().collect())
        },
        layout: layout.unwrap_or(config.display.layout),
        language,
    };

    let today = Utc::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());

    let rendered = views::render(year, &events, &category_list, &settings, today)?;
    print!("{}", rendered);

    Ok(())
}
