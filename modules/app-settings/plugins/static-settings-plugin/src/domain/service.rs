//! Config-backed settings provider.

use std::collections::HashMap;

use app_settings_sdk::{AppId, SettingsObject, SettingsProvider, SettingsProviderError};

use crate::config::StaticSettingsPluginConfig;

/// Static settings provider.
///
/// Serves the per-app settings from configuration; applications that are
/// not configured have no settings.
#[derive(Debug, Clone)]
pub struct StaticSettingsProvider {
    scope: String,
    apps: HashMap<String, SettingsObject>,
}

impl StaticSettingsProvider {
    #[must_use]
    pub fn new(config: StaticSettingsPluginConfig) -> Self {
        tracing::info!(
            scope = %config.scope,
            apps = config.apps.len(),
            "Loaded static app settings"
        );
        Self {
            scope: config.scope,
            apps: config.apps,
        }
    }

    /// Provider hub scope this provider belongs to.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl SettingsProvider for StaticSettingsProvider {
    fn get_settings(&self, app: &AppId) -> Result<Option<SettingsObject>, SettingsProviderError> {
        Ok(self.apps.get(app.as_str()).cloned())
    }
}
