//! Settings lookup: application list in, flat object or bundle out.

use std::sync::Arc;

use app_settings_sdk::{
    AppSettingsError, LookedUpSettings, LookupQuery, SettingsBundle, SettingsProvider,
};
use tracing::debug;

use super::merge;
use crate::hub::ProviderHub;

/// Looks up settings through an injected [`SettingsProvider`].
///
/// Nothing is cached: every call asks the provider again.
#[derive(Clone)]
pub struct SettingsLookup {
    provider: Arc<dyn SettingsProvider>,
}

impl SettingsLookup {
    #[must_use]
    pub fn new(provider: Arc<dyn SettingsProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the provider registered under `scope`.
    ///
    /// # Errors
    /// Returns `LookupUnavailable` if the hub has no provider for `scope`.
    pub fn from_hub(hub: &ProviderHub, scope: &str) -> Result<Self, AppSettingsError> {
        hub.get_scoped(scope).map(Self::new)
    }

    /// Look up every requested application.
    ///
    /// Applications without settings contribute an empty object. The result
    /// is flattened when `query.merge` says so or, when unset, when exactly
    /// one application was requested.
    ///
    /// # Errors
    /// Returns `LookupFailed` if the provider fails for any application.
    #[tracing::instrument(skip_all, fields(apps = query.apps.len(), merge = ?query.merge))]
    pub fn lookup(&self, query: &LookupQuery) -> Result<LookedUpSettings, AppSettingsError> {
        let bundle = self.fetch_bundle(query)?;

        if should_merge(query) {
            debug!("Flattening looked up settings");
            Ok(LookedUpSettings::Flat(merge::flatten(&bundle)))
        } else {
            Ok(LookedUpSettings::Bundle(bundle))
        }
    }

    /// Continuation form of [`lookup`](Self::lookup): `f` is called exactly
    /// once with the result, and its return value is passed through.
    ///
    /// # Errors
    /// Returns `LookupFailed` if the provider fails; `f` is not called then.
    pub fn consume<R>(
        &self,
        query: &LookupQuery,
        f: impl FnOnce(LookedUpSettings) -> R,
    ) -> Result<R, AppSettingsError> {
        self.lookup(query).map(f)
    }

    fn fetch_bundle(&self, query: &LookupQuery) -> Result<SettingsBundle, AppSettingsError> {
        let mut bundle = SettingsBundle::new();
        for app in &query.apps {
            if bundle.contains(app.as_str()) {
                continue;
            }
            let settings = self
                .provider
                .get_settings(app)
                .map_err(|e| AppSettingsError::lookup_failed(app.as_str(), e.to_string()))?;
            debug!(app = %app, found = settings.is_some(), "Looked up app settings");
            bundle.insert(app.clone(), settings.unwrap_or_default());
        }
        Ok(bundle)
    }
}

/// Explicit `merge` wins; otherwise flatten only a single application.
fn should_merge(query: &LookupQuery) -> bool {
    query.merge.unwrap_or(query.apps.len() == 1)
}
