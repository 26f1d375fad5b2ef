//! Domain layer for the static settings plugin.

pub mod service;

pub use service::StaticSettingsProvider;
