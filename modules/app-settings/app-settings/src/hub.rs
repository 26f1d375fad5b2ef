//! Scoped registry of settings providers.
//!
//! The host registers one [`SettingsProvider`] per scope (`global`, a tenant,
//! a deployment variant) and the lookup layer resolves it by scope name
//! instead of reaching for ambient state.
//!
//! Notes:
//! - Re-registering overwrites the previous provider; `Arc`s already handed out stay valid.
//! - `remove` and `clear` are intended mainly for tests and reconfiguration flows.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use app_settings_sdk::{AppSettingsError, SettingsProvider};
use parking_lot::RwLock;

/// Global scope constant.
pub const GLOBAL_SCOPE: &str = "global";

type ProviderMap = HashMap<Arc<str>, Arc<dyn SettingsProvider>>;

/// Thread-safe registry of settings providers keyed by scope.
pub struct ProviderHub {
    map: RwLock<ProviderMap>,
}

impl ProviderHub {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ProviderHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.map.read();
        let mut scopes: Vec<&str> = r.keys().map(AsRef::as_ref).collect();
        scopes.sort_unstable();
        f.debug_struct("ProviderHub")
            .field("scopes", &scopes)
            .finish()
    }
}

impl ProviderHub {
    /// Register a provider in the *global* scope.
    pub fn register(&self, provider: Arc<dyn SettingsProvider>) {
        self.register_scoped(GLOBAL_SCOPE, provider);
    }

    /// Register a provider in a *named* scope.
    pub fn register_scoped(&self, scope: impl Into<Arc<str>>, provider: Arc<dyn SettingsProvider>) {
        let scope = scope.into();
        tracing::info!(scope = %scope, "Registered settings provider");
        self.map.write().insert(scope, provider);
    }

    /// Fetch the provider of the *global* scope.
    ///
    /// # Errors
    /// Returns `LookupUnavailable` if no provider is registered globally.
    pub fn get(&self) -> Result<Arc<dyn SettingsProvider>, AppSettingsError> {
        self.get_scoped(GLOBAL_SCOPE)
    }

    /// Fetch the provider of a *named* scope.
    ///
    /// # Errors
    /// Returns `LookupUnavailable` if no provider is registered under `scope`.
    pub fn get_scoped(&self, scope: &str) -> Result<Arc<dyn SettingsProvider>, AppSettingsError> {
        self.map
            .read()
            .get(scope)
            .cloned()
            .ok_or_else(|| AppSettingsError::lookup_unavailable(scope))
    }

    /// Remove a provider; returns it if it was present.
    pub fn remove(&self, scope: &str) -> Option<Arc<dyn SettingsProvider>> {
        self.map.write().remove(scope)
    }

    /// Clear everything (useful in tests).
    pub fn clear(&self) {
        self.map.write().clear();
    }

    /// Introspection: (total entries).
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Check if the hub is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}
