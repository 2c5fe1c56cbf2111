//! Event categories.

use serde::{Deserialize, Serialize};

use crate::settings::Language;

/// A user-visible event category.
///
/// `color` is a hex string carried opaquely for the presentation layer; the
/// core never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub label: String,
    pub color: String,
}

/// The built-in category set, localized per language. User-defined
/// categories are layered on top by the persistence layer.
pub fn default_categories(language: Language) -> Vec<Category> {
    let labels: [(&str, &str, &str); 6] = match language {
        Language::En => [
            ("work", "Work & Projects", "#ef4444"),
            ("travel", "Travel", "#3b82f6"),
            ("personal", "Personal", "#eab308"),
            ("rest", "Rest & Recovery", "#64748b"),
            ("milestone", "Milestones", "#a855f7"),
            ("other", "Other", "#10b981"),
        ],
        Language::It => [
            ("work", "Lavoro & Progetti", "#ef4444"),
            ("travel", "Viaggi", "#3b82f6"),
            ("personal", "Personale", "#eab308"),
            ("rest", "Riposo & Recupero", "#64748b"),
            ("milestone", "Traguardi", "#a855f7"),
            ("other", "Altro", "#10b981"),
        ],
    };

    labels
        .into_iter()
        .map(|(id, label, color)| Category {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_stable_ids_across_languages() {
        let en: Vec<String> = default_categories(Language::En)
            .into_iter()
            .map(|c| c.id)
            .collect();
        let it: Vec<String> = default_categories(Language::It)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(en, it);
        assert!(en.contains(&"work".to_string()));
    }
}
