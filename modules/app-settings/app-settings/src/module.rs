//! Module wiring: configuration plus provider hub in, public client out.

use std::sync::Arc;

use app_settings_sdk::{AppSettingsClient, AppSettingsError};
use tracing::info;

use crate::config::AppSettingsConfig;
use crate::domain::{AppSettingsLocalClient, SettingsLookup, SettingsResolver};
use crate::hub::ProviderHub;

/// Build the module's public client.
///
/// The settings provider is resolved once, from `config.scope`.
///
/// # Errors
/// Returns `LookupUnavailable` if no provider is registered for `config.scope`.
#[tracing::instrument(skip_all, fields(scope = %config.scope))]
pub fn build_client(
    config: &AppSettingsConfig,
    hub: &ProviderHub,
) -> Result<Arc<dyn AppSettingsClient>, AppSettingsError> {
    let lookup = SettingsLookup::from_hub(hub, &config.scope)?;
    let resolver = SettingsResolver::new(lookup).with_default_prefer(config.default_prefer);
    info!(default_prefer = %config.default_prefer, "Initializing app_settings client");

    Ok(Arc::new(AppSettingsLocalClient::new(resolver)))
}
