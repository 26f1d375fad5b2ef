//! App Settings Module
//!
//! Looks up per-application settings through an injected provider and
//! reconciles them with caller-supplied values.
//!
//! - [`SettingsLookup`] fetches settings for one or more applications and
//!   optionally flattens them into one object
//! - [`SettingsResolver`] merges the fetched settings with local values by
//!   preference, or hands everything to a custom resolver
//! - [`ProviderHub`] keeps one settings provider per scope
//! - [`build_client`] wires configuration and hub into an `AppSettingsClient`
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use app_settings_sdk::*;

pub mod adapter;
pub mod config;
pub mod domain;
pub mod hub;
pub mod module;

pub use adapter::with_settings;
pub use config::AppSettingsConfig;
pub use domain::{AppSettingsLocalClient, SettingsLookup, SettingsResolver};
pub use hub::{GLOBAL_SCOPE, ProviderHub};
pub use module::build_client;
