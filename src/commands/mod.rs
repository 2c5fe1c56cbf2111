//! CLI command implementations.

mod add;
mod auth;
mod categories;
mod list;
mod pull;
mod remove;
mod show;

pub use add::cmd_add;
pub use auth::cmd_auth;
pub use categories::cmd_categories;
pub use list::cmd_list;
pub use pull::cmd_pull;
pub use remove::cmd_remove;
pub use show::cmd_show;

use crate::config::{self, Config};
use crate::store::Store;
use anyhow::Result;
use annum_core::Event;

/// Open the local store for the configured data directory.
pub(crate) fn open_store(config: &Config) -> Result<Store> {
    Ok(Store::open(config::data_path(config)?))
}

/// Load events, degrading a corrupt store to an empty one with a warning;
/// a broken file should never make the planner unusable.
pub(crate) fn load_events_lenient(store: &Store) -> Vec<Event> {
    match store.load_events() {
        Ok(events) => events,
        Err(err) => {
            eprintln!("Warning: {:#}; continuing with an empty event list", err);
            Vec::new()
        }
    }
}
