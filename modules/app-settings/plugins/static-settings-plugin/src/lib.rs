//! Static Settings Plugin
//!
//! This plugin answers app settings lookups from configuration.
//! Useful for testing, development, and simple deployments.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_settings_plugin:
//!     scope: "global"
//!     apps:
//!       vendor.store:
//!         currency: "EUR"
//!         showPrices: true
//!       vendor.header:
//!         title: "Welcome"
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::StaticSettingsPluginConfig;
pub use domain::StaticSettingsProvider;
