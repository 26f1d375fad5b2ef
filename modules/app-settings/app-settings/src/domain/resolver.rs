//! Settings resolver: reconciles looked up settings with caller-supplied ones.

use app_settings_sdk::{AppSettingsError, Prefer, ResolveRequest, ResolverInput, SettingsObject};
use tracing::debug;

use super::lookup::SettingsLookup;
use super::merge;

/// Reconciles fetched settings with `settings_prop` of each request.
///
/// A request carrying a custom resolver bypasses the default policy and
/// gets the resolver's output verbatim. Otherwise the two objects are
/// shallow-merged and the preferred side wins on key collision.
#[derive(Clone)]
pub struct SettingsResolver {
    lookup: SettingsLookup,
    default_prefer: Prefer,
}

impl SettingsResolver {
    #[must_use]
    pub fn new(lookup: SettingsLookup) -> Self {
        Self {
            lookup,
            default_prefer: Prefer::default(),
        }
    }

    /// Preference used when a request leaves `prefer` unset.
    #[must_use]
    pub fn with_default_prefer(mut self, prefer: Prefer) -> Self {
        self.default_prefer = prefer;
        self
    }

    #[must_use]
    pub fn lookup(&self) -> &SettingsLookup {
        &self.lookup
    }

    /// Produce the final settings object for `request`.
    ///
    /// # Errors
    /// - `LookupFailed` if the provider fails for any requested application
    /// - `CustomResolverFailed` if the request's custom resolver fails
    #[tracing::instrument(skip_all, fields(apps = request.query.apps.len(), prefer))]
    pub fn resolve(&self, request: &ResolveRequest) -> Result<SettingsObject, AppSettingsError> {
        let prefer = request.prefer.unwrap_or(self.default_prefer);
        tracing::Span::current().record("prefer", prefer.as_str());

        let fetched = self.lookup.lookup(&request.query)?;

        if let Some(resolver) = &request.resolver {
            debug!("Delegating to custom settings resolver");
            let input = ResolverInput {
                settings: fetched,
                apps: request.query.apps.clone(),
                merge: request.query.merge,
                settings_prop: request.settings_prop.clone(),
                prefer,
            };
            return resolver
                .resolve(input)
                .map_err(AppSettingsError::CustomResolverFailed);
        }

        debug!("Reconciling with default merge policy");
        Ok(merge::reconcile(
            &fetched.into_object(),
            &request.settings_prop,
            prefer,
        ))
    }

    /// Continuation form of [`resolve`](Self::resolve): `f` is called exactly
    /// once with the final settings, and its return value is passed through.
    ///
    /// # Errors
    /// Same as [`resolve`](Self::resolve); `f` is not called on failure.
    pub fn render<R>(
        &self,
        request: &ResolveRequest,
        f: impl FnOnce(SettingsObject) -> R,
    ) -> Result<R, AppSettingsError> {
        self.resolve(request).map(f)
    }
}
