//! Local persistence for events and categories.
//!
//! Plain JSON files in the data directory. Durability is best-effort: a
//! missing file yields defaults, and callers decide what to do about a
//! corrupt one (the commands warn and fall back rather than aborting, so a
//! broken store never takes the renderer down with it).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use annum_core::{default_categories, Category, Event, Language};

/// Handle to the on-disk store directory.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: PathBuf) -> Self {
        Store { dir }
    }

    pub fn events_path(&self) -> PathBuf {
        self.dir.join("events.json")
    }

    pub fn categories_path(&self) -> PathBuf {
        self.dir.join("categories.json")
    }

    /// Load all stored events. A missing file is an empty store.
    pub fn load_events(&self) -> Result<Vec<Event>> {
        read_json_or_default(&self.events_path())
    }

    /// Persist the full event collection (atomic enough for a single-user
    /// tool: write whole file, no partial updates).
    pub fn save_events(&self, events: &[Event]) -> Result<()> {
        write_json(&self.events_path(), &events)
    }

    /// Insert or replace events by id, last write wins. Returns
    /// `(added, updated)` counts.
    pub fn upsert_events(&self, incoming: Vec<Event>) -> Result<(usize, usize)> {
        let mut events = self.load_events()?;
        let mut added = 0;
        let mut updated = 0;

        for event in incoming {
            match events.iter_mut().find(|e| e.id == event.id) {
                Some(existing) => {
                    *existing = event;
                    updated += 1;
                }
                None => {
                    events.push(event);
                    added += 1;
                }
            }
        }

        self.save_events(&events)?;
        Ok((added, updated))
    }

    /// Remove an event by id. Returns whether anything was removed.
    pub fn remove_event(&self, id: &str) -> Result<bool> {
        let mut events = self.load_events()?;
        let before = events.len();
        events.retain(|e| e.id != id);
        let removed = events.len() != before;
        if removed {
            self.save_events(&events)?;
        }
        Ok(removed)
    }

    /// User-defined categories layered over the built-in defaults:
    /// a stored category with a default's id replaces it.
    pub fn load_categories(&self, language: Language) -> Result<Vec<Category>> {
        let stored: Vec<Category> = read_json_or_default(&self.categories_path())?;

        let mut categories = default_categories(language);
        for category in stored {
            match categories.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category,
                None => categories.push(category),
            }
        }
        Ok(categories)
    }
}

fn read_json_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(value).context("Failed to serialize")?;

    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn temp_store() -> Store {
        let dir = std::env::temp_dir().join(format!("annum-store-test-{}", uuid::Uuid::new_v4()));
        Store::open(dir)
    }

    fn event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 3, 0, 0, 0).unwrap(),
            category_id: "work".to_string(),
            notes: None,
        }
    }

    #[test]
    fn missing_files_yield_defaults() {
        let store = temp_store();
        assert!(store.load_events().unwrap().is_empty());
        let categories = store.load_categories(Language::En).unwrap();
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn events_round_trip() {
        let store = temp_store();
        store
            .save_events(&[event("e1", "First"), event("e2", "Second")])
            .unwrap();

        let loaded = store.load_events().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "e1");
        assert_eq!(loaded[1].title, "Second");

        std::fs::remove_dir_all(store.dir).unwrap();
    }

    #[test]
    fn upsert_is_last_write_wins() {
        let store = temp_store();
        store.save_events(&[event("e1", "Original")]).unwrap();

        let (added, updated) = store
            .upsert_events(vec![event("e1", "Replaced"), event("e2", "New")])
            .unwrap();
        assert_eq!((added, updated), (1, 1));

        let loaded = store.load_events().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].title, "Replaced");

        std::fs::remove_dir_all(store.dir).unwrap();
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let store = temp_store();
        store.save_events(&[event("e1", "First")]).unwrap();

        assert!(store.remove_event("e1").unwrap());
        assert!(!store.remove_event("e1").unwrap());
        assert!(store.load_events().unwrap().is_empty());

        std::fs::remove_dir_all(store.dir).unwrap();
    }

    #[test]
    fn stored_categories_override_defaults_by_id() {
        let store = temp_store();
        write_json(
            &store.categories_path(),
            &vec![
                Category {
                    id: "work".to_string(),
                    label: "Deep Work".to_string(),
                    color: "#111111".to_string(),
                },
                Category {
                    id: "garden".to_string(),
                    label: "Garden".to_string(),
                    color: "#22c55e".to_string(),
                },
            ],
        )
        .unwrap();

        let categories = store.load_categories(Language::En).unwrap();
        assert_eq!(categories.len(), 7);
        let work = categories.iter().find(|c| c.id == "work").unwrap();
        assert_eq!(work.label, "Deep Work");

        std::fs::remove_dir_all(store.dir).unwrap();
    }
}
