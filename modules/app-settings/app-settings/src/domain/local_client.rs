//! Local (in-process) client for the app-settings module.

use app_settings_sdk::{
    AppSettingsClient, AppSettingsError, LookedUpSettings, LookupQuery, ResolveRequest,
    SettingsObject,
};

use super::resolver::SettingsResolver;

/// Local client wrapping the settings resolver.
///
/// Handed out by [`build_client`](crate::build_client) as `Arc<dyn AppSettingsClient>`.
pub struct AppSettingsLocalClient {
    resolver: SettingsResolver,
}

impl AppSettingsLocalClient {
    #[must_use]
    pub fn new(resolver: SettingsResolver) -> Self {
        Self { resolver }
    }
}

fn log_and_pass(op: &str, e: AppSettingsError) -> AppSettingsError {
    tracing::error!(operation = op, error = %e, "app-settings call failed");
    e
}

impl AppSettingsClient for AppSettingsLocalClient {
    fn lookup(&self, query: &LookupQuery) -> Result<LookedUpSettings, AppSettingsError> {
        self.resolver
            .lookup()
            .lookup(query)
            .map_err(|e| log_and_pass("lookup", e))
    }

    fn resolve(&self, request: &ResolveRequest) -> Result<SettingsObject, AppSettingsError> {
        self.resolver
            .resolve(request)
            .map_err(|e| log_and_pass("resolve", e))
    }
}
