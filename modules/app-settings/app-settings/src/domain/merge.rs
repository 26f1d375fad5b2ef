//! Shallow merge primitives.
//!
//! Every merge here is one level deep: on key collision the overlay value
//! replaces the base value wholesale, nested objects included. Inputs are
//! never mutated.

use app_settings_sdk::{Prefer, SettingsBundle, SettingsObject};

/// Overlay `top` on a copy of `base`; `top` wins on collision.
///
/// Keys already present in `base` keep their position.
#[must_use]
pub fn overlay(base: &SettingsObject, top: &SettingsObject) -> SettingsObject {
    let mut merged = base.clone();
    for (key, value) in top {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Collapse a bundle into one object, later applications winning.
#[must_use]
pub fn flatten(bundle: &SettingsBundle) -> SettingsObject {
    bundle
        .iter()
        .fold(SettingsObject::new(), |mut acc, (_, settings)| {
            acc.extend(settings.clone());
            acc
        })
}

/// Reconcile fetched settings with caller-supplied ones.
///
/// `Prefer::Settings` lets `fetched` win, `Prefer::Props` lets `props` win.
#[must_use]
pub fn reconcile(
    fetched: &SettingsObject,
    props: &SettingsObject,
    prefer: Prefer,
) -> SettingsObject {
    match prefer {
        Prefer::Settings => overlay(props, fetched),
        Prefer::Props => overlay(fetched, props),
    }
}
