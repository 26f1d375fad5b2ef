//! Attaches looked up settings to an arbitrary downstream consumer.

use app_settings_sdk::{AppSettingsError, LookedUpSettings, LookupQuery};

use crate::domain::SettingsLookup;

/// Wrap `consumer` so each call first looks up `query` and hands the
/// settings over next to the caller's own input.
///
/// The lookup runs on every call of the returned closure.
///
/// ```ignore
/// let render = with_settings(lookup, LookupQuery::new("vendor.app"), |title: &str, settings| {
///     format!("{title}: {}", settings.into_object().len())
/// });
/// let line = render("Header")?;
/// ```
pub fn with_settings<P, R, F>(
    lookup: SettingsLookup,
    query: LookupQuery,
    consumer: F,
) -> impl Fn(P) -> Result<R, AppSettingsError>
where
    F: Fn(P, LookedUpSettings) -> R,
{
    move |props| lookup.consume(&query, |settings| consumer(props, settings))
}
