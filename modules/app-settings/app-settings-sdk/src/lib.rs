//! App Settings SDK
//!
//! This crate provides the public contract of the `app-settings` module:
//!
//! - [`SettingsProvider`] - lookup capability implemented by settings sources
//! - [`CustomResolver`] - caller-supplied reconciliation function
//! - [`AppSettingsClient`] - public API trait for consumers
//! - [`AppList`], [`SettingsBundle`], [`LookedUpSettings`], [`Prefer`] - models
//! - [`AppSettingsError`], [`SettingsProviderError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use app_settings_sdk::{LookupQuery, Prefer, ResolveRequest};
//!
//! // Flat settings of one application
//! let settings = client.lookup(&LookupQuery::new("vendor.app"))?;
//!
//! // Reconcile with local values, local values win
//! let request = ResolveRequest::new(LookupQuery::new("vendor.app"), props)
//!     .with_prefer(Prefer::Props);
//! let resolved = client.resolve(&request)?;
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

pub use api::{AppSettingsClient, CustomResolver, ResolverInput, SettingsProvider};
pub use error::{AppSettingsError, SettingsProviderError};
pub use models::{
    AppId, AppList, AppSelector, LookedUpSettings, LookupParams, LookupQuery, Prefer,
    ResolveParams, ResolveRequest, SettingsBundle, SettingsObject,
};
