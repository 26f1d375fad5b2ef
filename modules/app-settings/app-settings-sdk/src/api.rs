//! Provider, resolver and client traits of the app-settings module.

use crate::error::{AppSettingsError, SettingsProviderError};
use crate::models::{
    AppId, AppList, LookedUpSettings, LookupQuery, Prefer, ResolveRequest, SettingsObject,
};

/// Lookup capability answering "give me the settings of app X".
///
/// Implementations are injected into the lookup layer, either directly or
/// through a scoped provider hub. `Ok(None)` means the application has no
/// settings; callers treat it as an empty object.
///
/// Plain closures work as providers:
///
/// ```
/// use app_settings_sdk::{AppId, SettingsObject, SettingsProvider, SettingsProviderError};
///
/// let provider = |_app: &AppId| -> Result<Option<SettingsObject>, SettingsProviderError> {
///     Ok(None)
/// };
/// assert_eq!(provider.get_settings(&AppId::new("vendor.app")), Ok(None));
/// ```
pub trait SettingsProvider: Send + Sync {
    /// Look up the settings of one application.
    ///
    /// # Errors
    ///
    /// Returns a `SettingsProviderError` when the backing store fails.
    fn get_settings(&self, app: &AppId) -> Result<Option<SettingsObject>, SettingsProviderError>;
}

impl<F> SettingsProvider for F
where
    F: Fn(&AppId) -> Result<Option<SettingsObject>, SettingsProviderError> + Send + Sync,
{
    fn get_settings(&self, app: &AppId) -> Result<Option<SettingsObject>, SettingsProviderError> {
        self(app)
    }
}

/// Everything a custom resolver gets to see: the fetched settings plus
/// every original input of the resolve call.
#[derive(Debug, Clone)]
pub struct ResolverInput {
    pub settings: LookedUpSettings,
    pub apps: AppList,
    pub merge: Option<bool>,
    pub settings_prop: SettingsObject,
    /// Effective preference (request value or configured default).
    pub prefer: Prefer,
}

/// Caller-supplied replacement for the default reconciliation policy.
///
/// Its output is used verbatim as the resolved settings.
pub trait CustomResolver: Send + Sync {
    /// Compute the final settings object.
    ///
    /// # Errors
    ///
    /// Any error is reported to the caller as `CustomResolverFailed`.
    fn resolve(&self, input: ResolverInput) -> anyhow::Result<SettingsObject>;
}

impl<F> CustomResolver for F
where
    F: Fn(ResolverInput) -> anyhow::Result<SettingsObject> + Send + Sync,
{
    fn resolve(&self, input: ResolverInput) -> anyhow::Result<SettingsObject> {
        self(input)
    }
}

/// Public API of the app-settings module.
///
/// Hosts build it once and share the `Arc`:
/// ```ignore
/// let client = app_settings::build_client(&config, &hub)?;
/// let settings = client.lookup(&LookupQuery::new("vendor.app"))?;
/// ```
pub trait AppSettingsClient: Send + Sync {
    /// Look up settings for one or more applications.
    ///
    /// # Errors
    ///
    /// - `LookupFailed` if the provider fails for any requested application
    fn lookup(&self, query: &LookupQuery) -> Result<LookedUpSettings, AppSettingsError>;

    /// Look up settings and reconcile them with `request.settings_prop`.
    ///
    /// # Errors
    ///
    /// - `LookupFailed` if the provider fails for any requested application
    /// - `CustomResolverFailed` if the custom resolver fails
    fn resolve(&self, request: &ResolveRequest) -> Result<SettingsObject, AppSettingsError>;
}
