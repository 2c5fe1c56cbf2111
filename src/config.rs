use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use annum_core::{Language, Layout};

/// CLI configuration, loaded from ~/.config/annum/config.toml.
///
/// Every field has a default so a missing config file is not an error:
/// first runs work with an empty local store and no import provider.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding events.json / categories.json (defaults to the
    /// platform data dir)
    pub data_dir: Option<String>,

    /// Render defaults, overridable per invocation with CLI flags
    #[serde(default)]
    pub display: DisplayConfig,

    /// External calendar import configuration
    pub import: Option<ImportConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub layout: Layout,
    pub language: Language,
    pub fade_past: bool,
    pub show_burnout_warnings: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            layout: Layout::default(),
            language: Language::default(),
            fade_past: false,
            show_burnout_warnings: true,
        }
    }
}

/// Which provider to import from, plus free-form provider parameters that
/// are passed through verbatim (calendar ids, accounts, etc).
#[derive(Debug, Deserialize)]
pub struct ImportConfig {
    pub provider: String,
    #[serde(default, flatten)]
    pub params: HashMap<String, toml::Value>,
}

/// Get the config directory path (~/.config/annum)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("annum");
    Ok(config_dir)
}

/// Get the config file path (~/.config/annum/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/annum/config.toml, falling back to defaults
/// when the file does not exist.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Directory holding the local store, honoring the data_dir override.
pub fn data_path(config: &Config) -> Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(expand_path(dir)),
        None => {
            let dir = dirs::data_dir()
                .context("Could not determine data directory")?
                .join("annum");
            Ok(dir)
        }
    }
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.import.is_none());
        assert_eq!(config.display.layout, Layout::Horizontal);
        assert!(config.display.show_burnout_warnings);
    }

    #[test]
    fn import_params_are_passed_through() {
        let config: Config = toml::from_str(
            r#"
            data_dir = "~/planner"

            [display]
            layout = "cyclic"
            language = "it"

            [import]
            provider = "gcal"
            gcal_account = "user@example.com"
            gcal_calendar_id = "primary"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.layout, Layout::Cyclic);
        assert_eq!(config.display.language, Language::It);

        let import = config.import.unwrap();
        assert_eq!(import.provider, "gcal");
        assert_eq!(
            import.params.get("gcal_account").and_then(|v| v.as_str()),
            Some("user@example.com")
        );
    }
}
