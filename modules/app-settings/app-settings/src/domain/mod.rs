//! Domain layer for app settings.

pub mod local_client;
pub mod lookup;
pub mod merge;
pub mod resolver;

pub use local_client::AppSettingsLocalClient;
pub use lookup::SettingsLookup;
pub use resolver::SettingsResolver;

#[cfg(test)]
mod lookup_tests;
