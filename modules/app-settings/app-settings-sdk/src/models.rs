//! Public models for the app-settings module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the app-settings module, its providers and its consumers.

use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::api::CustomResolver;
use crate::error::AppSettingsError;

/// Opaque key-value settings payload of one application.
pub type SettingsObject = Map<String, Value>;

/// Opaque application identifier, e.g. `"vendor.app"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, non-empty list of applications to look up.
///
/// Order decides merge precedence: later applications win on key collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppList(Vec<AppId>);

impl AppList {
    /// List holding exactly one application.
    #[must_use]
    pub fn single(app: impl Into<AppId>) -> Self {
        Self(vec![app.into()])
    }

    /// Builds a list from any sequence of identifiers.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredInput { input: "app" }` when the sequence is empty.
    pub fn new<I, T>(apps: I) -> Result<Self, AppSettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<AppId>,
    {
        let apps: Vec<AppId> = apps.into_iter().map(Into::into).collect();
        if apps.is_empty() {
            return Err(AppSettingsError::missing_input("app"));
        }
        Ok(Self(apps))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[AppId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppId> {
        self.0.iter()
    }
}

impl From<AppId> for AppList {
    fn from(app: AppId) -> Self {
        Self(vec![app])
    }
}

impl From<&str> for AppList {
    fn from(app: &str) -> Self {
        Self::single(app)
    }
}

impl<'a> IntoIterator for &'a AppList {
    type Item = &'a AppId;
    type IntoIter = std::slice::Iter<'a, AppId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Per-application settings, kept in request order.
///
/// Holds one entry per distinct application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsBundle {
    entries: Vec<(AppId, SettingsObject)>,
}

impl SettingsBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the settings of `app`.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, app: AppId, settings: SettingsObject) {
        if let Some(slot) = self.entries.iter_mut().find(|(id, _)| *id == app) {
            slot.1 = settings;
        } else {
            self.entries.push((app, settings));
        }
    }

    #[must_use]
    pub fn get(&self, app: &str) -> Option<&SettingsObject> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == app)
            .map(|(_, settings)| settings)
    }

    #[must_use]
    pub fn contains(&self, app: &str) -> bool {
        self.get(app).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AppId, &SettingsObject)> {
        self.entries.iter().map(|(id, settings)| (id, settings))
    }

    /// Object view: application identifiers as keys, settings as values.
    #[must_use]
    pub fn into_object(self) -> SettingsObject {
        self.entries
            .into_iter()
            .map(|(id, settings)| (id.0, Value::Object(settings)))
            .collect()
    }
}

impl FromIterator<(AppId, SettingsObject)> for SettingsBundle {
    fn from_iter<I: IntoIterator<Item = (AppId, SettingsObject)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (app, settings) in iter {
            bundle.insert(app, settings);
        }
        bundle
    }
}

impl IntoIterator for SettingsBundle {
    type Item = (AppId, SettingsObject);
    type IntoIter = std::vec::IntoIter<(AppId, SettingsObject)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for SettingsBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, settings) in &self.entries {
            map.serialize_entry(id.as_str(), settings)?;
        }
        map.end()
    }
}

/// Result of a settings lookup: flattened or namespaced per application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookedUpSettings {
    Flat(SettingsObject),
    Bundle(SettingsBundle),
}

impl LookedUpSettings {
    #[must_use]
    pub fn is_flat(&self) -> bool {
        matches!(self, Self::Flat(_))
    }

    #[must_use]
    pub fn as_flat(&self) -> Option<&SettingsObject> {
        match self {
            Self::Flat(settings) => Some(settings),
            Self::Bundle(_) => None,
        }
    }

    #[must_use]
    pub fn as_bundle(&self) -> Option<&SettingsBundle> {
        match self {
            Self::Bundle(bundle) => Some(bundle),
            Self::Flat(_) => None,
        }
    }

    /// Object view of either form; a bundle is keyed by application.
    #[must_use]
    pub fn into_object(self) -> SettingsObject {
        match self {
            Self::Flat(settings) => settings,
            Self::Bundle(bundle) => bundle.into_object(),
        }
    }
}

/// Which side wins on key collision when reconciling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefer {
    /// Fetched settings win.
    #[default]
    Settings,
    /// Caller-supplied settings win.
    Props,
}

impl Prefer {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Props => "props",
        }
    }
}

impl fmt::Display for Prefer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applications to look up and the flattening choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub apps: AppList,
    /// `None` flattens only when exactly one application is requested.
    pub merge: Option<bool>,
}

impl LookupQuery {
    #[must_use]
    pub fn new(apps: impl Into<AppList>) -> Self {
        Self {
            apps: apps.into(),
            merge: None,
        }
    }

    #[must_use]
    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = Some(merge);
        self
    }
}

/// Inputs for reconciling fetched settings with caller-supplied ones.
#[derive(Clone)]
pub struct ResolveRequest {
    pub query: LookupQuery,
    pub settings_prop: SettingsObject,
    /// `None` falls back to the resolver's configured default.
    pub prefer: Option<Prefer>,
    /// Replaces the default merge policy entirely when set.
    pub resolver: Option<Arc<dyn CustomResolver>>,
}

impl ResolveRequest {
    #[must_use]
    pub fn new(query: LookupQuery, settings_prop: SettingsObject) -> Self {
        Self {
            query,
            settings_prop,
            prefer: None,
            resolver: None,
        }
    }

    #[must_use]
    pub fn with_prefer(mut self, prefer: Prefer) -> Self {
        self.prefer = Some(prefer);
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl CustomResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }
}

impl fmt::Debug for ResolveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveRequest")
            .field("query", &self.query)
            .field("settings_prop", &self.settings_prop)
            .field("prefer", &self.prefer)
            .field("resolver", &self.resolver.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Raw `app` input: one identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppSelector {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<AppSelector> for AppList {
    type Error = AppSettingsError;

    fn try_from(selector: AppSelector) -> Result<Self, Self::Error> {
        match selector {
            AppSelector::One(app) => Ok(Self::single(app)),
            AppSelector::Many(apps) => Self::new(apps),
        }
    }
}

/// Untyped lookup inputs as handed over by a host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupParams {
    pub app: Option<AppSelector>,
    pub merge: Option<bool>,
}

impl TryFrom<LookupParams> for LookupQuery {
    type Error = AppSettingsError;

    fn try_from(params: LookupParams) -> Result<Self, Self::Error> {
        let app = params
            .app
            .ok_or_else(|| AppSettingsError::missing_input("app"))?;
        Ok(Self {
            apps: AppList::try_from(app)?,
            merge: params.merge,
        })
    }
}

/// Untyped resolve inputs as handed over by a host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveParams {
    pub app: Option<AppSelector>,
    pub merge: Option<bool>,
    #[serde(alias = "settingsProp")]
    pub settings_prop: Option<SettingsObject>,
    pub prefer: Option<Prefer>,
}

impl TryFrom<ResolveParams> for ResolveRequest {
    type Error = AppSettingsError;

    fn try_from(params: ResolveParams) -> Result<Self, Self::Error> {
        let query = LookupQuery::try_from(LookupParams {
            app: params.app,
            merge: params.merge,
        })?;
        let settings_prop = params
            .settings_prop
            .ok_or_else(|| AppSettingsError::missing_input("settings_prop"))?;
        Ok(Self {
            query,
            settings_prop,
            prefer: params.prefer,
            resolver: None,
        })
    }
}
