use anyhow::Result;

use crate::config::Config;

/// Delete an event from the local store by id.
pub fn cmd_remove(config: &Config, id: String) -> Result<()> {
    let store = super::open_store(config)?;

    if store.remove_event(&id)? {
        println!("Removed {}", id);
    } else {
        println!("No event with id {}", id);
    }

    Ok(())
}
