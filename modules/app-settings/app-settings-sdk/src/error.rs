//! Error types for the app-settings module.

use thiserror::Error;

/// Errors that can occur when looking up or resolving application settings.
#[derive(Debug, Error)]
pub enum AppSettingsError {
    /// A required input (`app` or `settings_prop`) was not supplied.
    #[error("missing required input: {input}")]
    MissingRequiredInput {
        /// Name of the missing input.
        input: &'static str,
    },

    /// No settings provider is available for the requested scope.
    #[error("settings lookup capability unavailable for scope '{scope}'")]
    LookupUnavailable {
        /// Scope the provider was expected under.
        scope: String,
    },

    /// The settings provider failed while looking up one application.
    #[error("settings lookup failed for app '{app}': {reason}")]
    LookupFailed {
        /// Application whose lookup failed.
        app: String,
        /// Provider failure description.
        reason: String,
    },

    /// The caller-supplied resolver function failed.
    #[error("custom settings resolver failed: {0}")]
    CustomResolverFailed(#[source] anyhow::Error),
}

impl AppSettingsError {
    #[must_use]
    pub fn missing_input(input: &'static str) -> Self {
        Self::MissingRequiredInput { input }
    }

    #[must_use]
    pub fn lookup_unavailable(scope: impl Into<String>) -> Self {
        Self::LookupUnavailable {
            scope: scope.into(),
        }
    }

    #[must_use]
    pub fn lookup_failed(app: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::LookupFailed {
            app: app.into(),
            reason: reason.into(),
        }
    }
}

/// Errors reported by [`SettingsProvider`](crate::SettingsProvider) implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsProviderError {
    /// The backing store cannot be reached right now.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Any other provider failure.
    #[error("internal provider error: {0}")]
    Internal(String),
}
