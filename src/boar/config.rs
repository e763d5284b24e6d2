use crate::error::{BoarError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_HISTORY_LENGTH: usize = 5;
const DEFAULT_MAX_DISPLAY: usize = 15;
const DEFAULT_SHOW_ALL: &str = "all";
const DEFAULT_CLEAR: &str = "cl";

/// Configuration for boar, stored as JSON in the `conf` file of the data directory.
///
/// Keys keep the spaced names of the on-disk format; every key falls back to its
/// default when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoarConfig {
    /// Number of previous book versions kept for undo
    #[serde(rename = "history length", default = "default_history_length")]
    pub history_length: usize,

    /// Entries (categories + items) above which a bare `list` only shows categories
    #[serde(rename = "max display", default = "default_max_display")]
    pub max_display: usize,

    /// Token that forces the full listing
    #[serde(rename = "show all", default = "default_show_all")]
    pub show_all: String,

    #[serde(rename = "disable colors", default)]
    pub disable_colors: bool,

    /// Print item links in the full listing (always shown for a single category)
    #[serde(rename = "show links", default = "default_true")]
    pub show_links: bool,

    /// Edit input that clears a description or link
    #[serde(rename = "clear", default = "default_clear")]
    pub clear: String,

    #[serde(rename = "export light by default", default = "default_true")]
    pub export_light: bool,
}

fn default_history_length() -> usize {
    DEFAULT_HISTORY_LENGTH
}

fn default_max_display() -> usize {
    DEFAULT_MAX_DISPLAY
}

fn default_show_all() -> String {
    DEFAULT_SHOW_ALL.to_string()
}

fn default_clear() -> String {
    DEFAULT_CLEAR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for BoarConfig {
    fn default() -> Self {
        Self {
            history_length: DEFAULT_HISTORY_LENGTH,
            max_display: DEFAULT_MAX_DISPLAY,
            show_all: default_show_all(),
            disable_colors: false,
            show_links: true,
            clear: default_clear(),
            export_light: true,
        }
    }
}

impl BoarConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::HistoryLength => self.history_length.to_string(),
            ConfigKey::MaxDisplay => self.max_display.to_string(),
            ConfigKey::ShowAll => self.show_all.clone(),
            ConfigKey::DisableColors => self.disable_colors.to_string(),
            ConfigKey::ShowLinks => self.show_links.to_string(),
            ConfigKey::Clear => self.clear.clone(),
            ConfigKey::ExportLight => self.export_light.to_string(),
        }
    }

    /// Parses and stores a raw value. The config is left untouched on error.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::HistoryLength => self.history_length = parse_count(key, value)?,
            ConfigKey::MaxDisplay => self.max_display = parse_count(key, value)?,
            ConfigKey::ShowAll => self.show_all = parse_token(key, value)?,
            ConfigKey::DisableColors => self.disable_colors = parse_flag(key, value)?,
            ConfigKey::ShowLinks => self.show_links = parse_flag(key, value)?,
            ConfigKey::Clear => self.clear = parse_token(key, value)?,
            ConfigKey::ExportLight => self.export_light = parse_flag(key, value)?,
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .iter()
            .map(|key| (*key, self.get(*key)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    HistoryLength,
    MaxDisplay,
    ShowAll,
    DisableColors,
    ShowLinks,
    Clear,
    ExportLight,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::HistoryLength,
        ConfigKey::DisableColors,
        ConfigKey::ShowLinks,
        ConfigKey::Clear,
        ConfigKey::ExportLight,
        ConfigKey::MaxDisplay,
        ConfigKey::ShowAll,
    ];

    /// The key as written in the `conf` file.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::HistoryLength => "history length",
            ConfigKey::MaxDisplay => "max display",
            ConfigKey::ShowAll => "show all",
            ConfigKey::DisableColors => "disable colors",
            ConfigKey::ShowLinks => "show links",
            ConfigKey::Clear => "clear",
            ConfigKey::ExportLight => "export light by default",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::HistoryLength => "amount of previous versions stored for undo",
            ConfigKey::MaxDisplay => {
                "maximum number of entries to display when showing the full book before only listing categories"
            }
            ConfigKey::ShowAll => "string that forces showing every item",
            ConfigKey::DisableColors => "disable colors and styling of output",
            ConfigKey::ShowLinks => {
                "print item links when showing the full book (always shown for a single category)"
            }
            ConfigKey::Clear => "string that clears a value when editing an item",
            ConfigKey::ExportLight => "default color scheme when exporting (light or dark)",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = BoarError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "history length" => Ok(ConfigKey::HistoryLength),
            "max display" => Ok(ConfigKey::MaxDisplay),
            "show all" => Ok(ConfigKey::ShowAll),
            "disable colors" => Ok(ConfigKey::DisableColors),
            "show links" => Ok(ConfigKey::ShowLinks),
            "clear" => Ok(ConfigKey::Clear),
            "export light by default" | "export light" => Ok(ConfigKey::ExportLight),
            _ => Err(BoarError::UnknownConfigKey(s.to_string())),
        }
    }
}

fn invalid(key: ConfigKey, value: &str, reason: &str) -> BoarError {
    BoarError::InvalidConfigValue {
        key: key.name().to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_count(key: ConfigKey, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, value, "value must be a non-negative integer"))
}

fn parse_flag(key: ConfigKey, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value, "value must be one of 'true', 'false'")),
    }
}

fn parse_token(key: ConfigKey, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(key, value, "string can't be empty"));
    }
    Ok(value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoarConfig::default();
        assert_eq!(config.history_length, 5);
        assert_eq!(config.max_display, 15);
        assert_eq!(config.show_all, "all");
        assert_eq!(config.clear, "cl");
        assert!(config.show_links);
        assert!(config.export_light);
        assert!(!config.disable_colors);
    }

    #[test]
    fn test_reads_original_conf_file() {
        let raw = r#"{"history length": 3, "max display": 10, "show all": "everything",
            "disable colors": true, "show links": false, "clear": "x",
            "export light by default": false}"#;
        let config = BoarConfig::from_json(raw).unwrap();
        assert_eq!(config.history_length, 3);
        assert_eq!(config.show_all, "everything");
        assert!(config.disable_colors);
        assert!(!config.export_light);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = BoarConfig::from_json(r#"{"history length": 0}"#).unwrap();
        assert_eq!(config.history_length, 0);
        assert_eq!(config.clear, "cl");
        assert!(config.show_links);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut config = BoarConfig::default();
        config.set(ConfigKey::Clear, "none").unwrap();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"history length\":5"));
        assert_eq!(BoarConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_key_parsing_accepts_spaced_and_dashed() {
        assert_eq!(
            "history length".parse::<ConfigKey>().unwrap(),
            ConfigKey::HistoryLength
        );
        assert_eq!(
            "history-length".parse::<ConfigKey>().unwrap(),
            ConfigKey::HistoryLength
        );
        assert_eq!(
            "export-light".parse::<ConfigKey>().unwrap(),
            ConfigKey::ExportLight
        );
        assert!(matches!(
            "colour".parse::<ConfigKey>(),
            Err(BoarError::UnknownConfigKey(_))
        ));
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = BoarConfig::default();
        config.set(ConfigKey::HistoryLength, "12").unwrap();
        config.set(ConfigKey::ShowLinks, "FALSE").unwrap();
        config.set(ConfigKey::ShowAll, "EVERY").unwrap();
        assert_eq!(config.history_length, 12);
        assert!(!config.show_links);
        assert_eq!(config.show_all, "every");

        assert!(config.set(ConfigKey::HistoryLength, "-1").is_err());
        assert!(config.set(ConfigKey::DisableColors, "yes").is_err());
        assert!(config.set(ConfigKey::Clear, "  ").is_err());
        assert_eq!(config.history_length, 12);
        assert_eq!(config.clear, "cl");
    }
}
