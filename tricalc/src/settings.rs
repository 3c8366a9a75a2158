//! Calculator settings
//!
//! Read once at startup from `<config dir>/settings.json`; every field is
//! optional. The file is never written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tricore::storage::{config_dir, load_json, StorageError};
use tricore::ThemeKind;

/// Overrides the configured theme, e.g. `TRICALC_THEME=dark`.
pub const THEME_ENV: &str = "TRICALC_THEME";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Theme at startup; can be switched from the menu.
    pub theme: ThemeKind,
    /// Longest number that can be typed into the display.
    pub display_max_len: usize,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Light,
            display_max_len: 15,
            log_filter: "warn".to_string(),
        }
    }
}

impl CalcSettings {
    pub fn config_path() -> PathBuf {
        config_dir("tricalc").join("settings.json")
    }

    /// Load the settings file; a missing file gives the defaults.
    pub fn load() -> Result<Self, StorageError> {
        match load_json::<Self>(&Self::config_path()) {
            Err(StorageError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn apply_env(&mut self) -> Result<(), StorageError> {
        self.apply_theme_override(std::env::var(THEME_ENV).ok().as_deref())
    }

    fn apply_theme_override(&mut self, value: Option<&str>) -> Result<(), StorageError> {
        if let Some(value) = value {
            self.theme = value.parse()?;
        }
        Ok(())
    }
}
