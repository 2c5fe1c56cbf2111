//! Render settings passed explicitly into the view layer.
//!
//! Settings are an immutable value handed to view assemblers per render
//! pass; nothing in the computation core reads them ambiently.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Which of the three year layouts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
    Cyclic,
}

/// Display language for month names, labels and advisories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    It,
}

/// Immutable per-render configuration for the view assemblers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub fade_past: bool,
    pub show_burnout_warnings: bool,
    /// Categories to render; `None` means all.
    pub active_category_ids: Option<HashSet<String>>,
    pub layout: Layout,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fade_past: false,
            show_burnout_warnings: true,
            active_category_ids: None,
            layout: Layout::default(),
            language: Language::default(),
        }
    }
}

impl Settings {
    /// Whether events in `category_id` should be rendered.
    pub fn category_active(&self, category_id: &str) -> bool {
        match &self.active_category_ids {
            Some(ids) => ids.contains(category_id),
            None => true,
        }
    }
}
