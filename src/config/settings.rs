//! User settings for load-monitor
//!
//! Settings are optional: without a settings file every value falls back to
//! its default.

use serde::{Deserialize, Serialize};

use super::paths::MonitorPaths;
use crate::error::MonitorError;

/// Default maximum number of appliances kept in the store
pub const DEFAULT_MAX_APPLIANCES: usize = 100;

/// User settings for load-monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of appliances the store accepts
    #[serde(default = "default_max_appliances")]
    pub max_appliances: usize,

    /// Currency symbol shown in front of costs on the console
    #[serde(default)]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_appliances() -> usize {
    DEFAULT_MAX_APPLIANCES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_appliances: default_max_appliances(),
            currency_symbol: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &MonitorPaths) -> Result<Self, MonitorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MonitorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MonitorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MonitorPaths) -> Result<(), MonitorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MonitorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            MonitorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the store cannot work with
    pub fn validate(&self) -> Result<(), MonitorError> {
        if self.max_appliances == 0 {
            return Err(MonitorError::Config(
                "max_appliances must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
