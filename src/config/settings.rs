//! User settings for tally
//!
//! Display and export preferences. The ledger itself is never persisted;
//! only these preferences survive between sessions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::TallyPaths;
use crate::error::TallyError;

/// User settings for tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in display output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display output (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Directory exports are written to when no path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if no file exists
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TallyError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
