use anyhow::Result;
use chrono::{Datelike, Utc};

use crate::config::Config;
use crate::provider::{build_params, Provider};

/// Import events for a year from the configured provider and merge them
/// into the local store, last write wins.
pub async fn cmd_pull(config: &Config, year: Option<i32>, provider: Option<String>) -> Result<()> {
    let (provider_name, config_params) = match (&provider, &config.import) {
        (Some(name), Some(import)) if *name == import.provider => {
            (name.clone(), import.params.clone())
        }
        (Some(name), _) => (name.clone(), Default::default()),
        (None, Some(import)) => (import.provider.clone(), import.params.clone()),
        (None, None) => anyhow::bail!(
            "No import provider configured.\n\
            Run `annum auth <provider>` first, then add an [import] section to config.toml"
        ),
    };

    let provider = Provider::new(&provider_name)?;
    let year = year.unwrap_or_else(|| Utc::now().year());

    println!("Importing {} from {}...", year, provider_name);

    let params = build_params(&config_params, &[("year", serde_json::json!(year))]);
    let events = provider.fetch_events(params).await?;
    println!("  Fetched {} events", events.len());

    let store = super::open_store(config)?;
    let (added, updated) = store.upsert_events(events)?;

    println!("  {} added, {} updated", added, updated);

    Ok(())
}
