//! TOML-based application configuration.
//!
//! Stores the calendar conventions the agenda uses:
//! - First day of week for the week strip
//!
//! Configuration is stored at `~/.config/dayplan/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarRules;
use crate::error::ConfigError;

/// Calendar conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First day of week as a weekday name ("sun", "monday", ...).
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_first_weekday() -> String {
    "sun".into()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_weekday: default_first_weekday(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file under the user configuration directory.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dayplan")
            .join("config.toml")
    }

    /// Load the config from the default path, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load_from(&Self::path()).unwrap_or_default()
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default path, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the configured calendar rules.
    ///
    /// A weekday name that does not parse is the one malformed-calendar
    /// failure mode; callers decide whether to fall back to defaults.
    pub fn calendar_rules(&self) -> Result<CalendarRules, ConfigError> {
        let first_weekday: Weekday =
            self.calendar
                .first_weekday
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "calendar.first_weekday".into(),
                    message: format!(
                        "unrecognized weekday '{}'",
                        self.calendar.first_weekday
                    ),
                })?;
        Ok(CalendarRules { first_weekday })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sunday_start() {
        let rules = Config::default().calendar_rules().unwrap();
        assert_eq!(rules, CalendarRules::default());
        assert_eq!(rules.first_weekday, Weekday::Sun);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.calendar.first_weekday = "monday".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.calendar.first_weekday, "monday");
        assert_eq!(
            loaded.calendar_rules().unwrap().first_weekday,
            Weekday::Mon
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.calendar.first_weekday, "sun");
    }

    #[test]
    fn garbage_weekday_is_invalid_value() {
        let mut config = Config::default();
        config.calendar.first_weekday = "someday".into();
        match config.calendar_rules() {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "calendar.first_weekday");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
