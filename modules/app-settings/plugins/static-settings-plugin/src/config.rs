//! Configuration for the static settings plugin.

use std::collections::HashMap;

use app_settings_sdk::SettingsObject;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticSettingsPluginConfig {
    /// Provider hub scope the plugin registers under.
    pub scope: String,

    /// Static settings per application identifier.
    pub apps: HashMap<String, SettingsObject>,
}

impl Default for StaticSettingsPluginConfig {
    fn default() -> Self {
        Self {
            scope: "global".to_owned(),
            apps: HashMap::new(),
        }
    }
}
