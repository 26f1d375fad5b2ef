//! Configuration for the app-settings module.
//!
//! Hosts hand the module its raw section, shaped as
//! `{ "config": { ... } }`. Loading is lenient: a missing or malformed
//! section falls back to defaults, only an invalid `config` body is an error.

use app_settings_sdk::Prefer;
use serde::Deserialize;

use crate::hub::GLOBAL_SCOPE;

/// Module name used for the host configuration section.
pub const MODULE_NAME: &str = "app_settings";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppSettingsConfig {
    /// Provider hub scope the module resolves its settings provider from.
    pub scope: String,

    /// Preference applied when a resolve request leaves `prefer` unset.
    pub default_prefer: Prefer,
}

impl Default for AppSettingsConfig {
    fn default() -> Self {
        Self {
            scope: GLOBAL_SCOPE.to_owned(),
            default_prefer: Prefer::Settings,
        }
    }
}

/// Configuration error for typed config loading.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppSettingsConfig {
    /// Lenient loader over the raw module section.
    ///
    /// - No section, a non-object section or no `config` field → defaults
    /// - `config` present but invalid → `ConfigError::InvalidConfig`
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the config body cannot be deserialized.
    pub fn from_module_section(section: Option<&serde_json::Value>) -> Result<Self, ConfigError> {
        let Some(obj) = section.and_then(serde_json::Value::as_object) else {
            return Ok(Self::default());
        };

        let Some(config_section) = obj.get("config") else {
            return Ok(Self::default());
        };

        serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
            module: MODULE_NAME.to_owned(),
            source: e,
        })
    }
}
