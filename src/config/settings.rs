//! User settings for FinanceLab
//!
//! Application preferences that are not part of the ledger itself.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Year;
use crate::reports::MonthLabels;

/// User settings for FinanceLab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Language of month labels in reports
    #[serde(default)]
    pub month_labels: MonthLabels,

    /// Number of backup folders kept by `backup prune`
    #[serde(default = "default_backup_keep")]
    pub backup_keep: usize,

    /// Last year viewed; reports default to it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_year: Option<String>,
}

/// Settings layout written by this build
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_backup_keep() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            month_labels: MonthLabels::default(),
            backup_keep: default_backup_keep(),
            selected_year: None,
        }
    }
}

impl Settings {
    /// Selected year, if one is stored and well-formed
    pub fn selected_year(&self) -> Option<Year> {
        self.selected_year
            .as_deref()
            .and_then(|s| Year::parse(s).ok())
    }

    /// Remember `year` as the selected one
    pub fn select_year(&mut self, year: Option<Year>) {
        self.selected_year = year.map(|y| y.to_string());
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SETTINGS_SCHEMA_VERSION {
                return Err(LedgerError::Config(format!(
                    "Settings schema version {} is newer than supported version {}",
                    settings.schema_version, SETTINGS_SCHEMA_VERSION
                )));
            }
            if settings.schema_version < SETTINGS_SCHEMA_VERSION {
                warn!(
                    from = settings.schema_version,
                    to = SETTINGS_SCHEMA_VERSION,
                    "upgrading settings schema"
                );
                settings.schema_version = SETTINGS_SCHEMA_VERSION;
            }

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
