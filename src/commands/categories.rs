use anyhow::Result;

use crate::config::Config;

/// List categories: built-in defaults merged with user-defined ones.
pub fn cmd_categories(config: &Config) -> Result<()> {
    let store = super::open_store(config)?;
    let categories = store.load_categories(config.display.language)?;

    for category in &categories {
        println!("{:<12} {:<20} {}", category.id, category.label, category.color);
    }

    Ok(())
}
