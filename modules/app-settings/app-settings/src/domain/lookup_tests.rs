#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;

use app_settings_sdk::{
    AppId, AppList, AppSettingsError, LookedUpSettings, LookupQuery, SettingsObject,
    SettingsProvider, SettingsProviderError,
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing_test::traced_test;

use super::lookup::SettingsLookup;
use crate::hub::ProviderHub;

fn object(value: Value) -> SettingsObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// Mock provider recording every lookup
#[derive(Default)]
struct MockProvider {
    settings: HashMap<String, SettingsObject>,
    failing: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    fn with(mut self, app: &str, settings: Value) -> Self {
        self.settings.insert(app.to_owned(), object(settings));
        self
    }

    fn failing_on(mut self, app: &str) -> Self {
        self.failing = Some(app.to_owned());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl SettingsProvider for MockProvider {
    fn get_settings(&self, app: &AppId) -> Result<Option<SettingsObject>, SettingsProviderError> {
        self.calls.lock().push(app.as_str().to_owned());
        if self.failing.as_deref() == Some(app.as_str()) {
            return Err(SettingsProviderError::Unavailable("store offline".to_owned()));
        }
        Ok(self.settings.get(app.as_str()).cloned())
    }
}

fn two_apps() -> Arc<MockProvider> {
    Arc::new(
        MockProvider::default()
            .with("vendor.a", json!({"x": 1, "y": 2}))
            .with("vendor.b", json!({"y": 3, "z": 4})),
    )
}

#[test]
fn test_single_app_defaults_to_flat() {
    let lookup = SettingsLookup::new(two_apps());

    let result = lookup.lookup(&LookupQuery::new("vendor.a")).unwrap();

    assert_eq!(result, LookedUpSettings::Flat(object(json!({"x": 1, "y": 2}))));
    assert_eq!(result.as_flat(), Some(&object(json!({"x": 1, "y": 2}))));
    assert!(result.as_bundle().is_none());
}

#[test]
fn test_multiple_apps_default_to_bundle() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.b"]).unwrap());

    let result = lookup.lookup(&query).unwrap();

    let bundle = result.as_bundle().expect("multiple apps must not be flattened");
    assert_eq!(bundle.len(), 2);
    assert_eq!(bundle.get("vendor.a"), Some(&object(json!({"x": 1, "y": 2}))));
    assert_eq!(bundle.get("vendor.b"), Some(&object(json!({"y": 3, "z": 4}))));
}

#[test]
fn test_explicit_merge_is_last_write_wins() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.b"]).unwrap()).with_merge(true);

    let result = lookup.lookup(&query).unwrap();

    assert_eq!(
        result,
        LookedUpSettings::Flat(object(json!({"x": 1, "y": 3, "z": 4})))
    );
}

#[test]
fn test_merge_order_follows_app_list() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new(AppList::new(["vendor.b", "vendor.a"]).unwrap()).with_merge(true);

    let result = lookup.lookup(&query).unwrap();

    assert_eq!(result.into_object()["y"], json!(2));
}

#[test]
fn test_explicit_no_merge_keeps_single_app_namespaced() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new("vendor.a").with_merge(false);

    let result = lookup.lookup(&query).unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"vendor.a": {"x": 1, "y": 2}})
    );
}

#[test]
fn test_missing_settings_become_empty_object() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.unknown"]).unwrap());

    let result = lookup.lookup(&query).unwrap();

    let bundle = result.as_bundle().unwrap();
    assert_eq!(bundle.get("vendor.unknown"), Some(&SettingsObject::new()));

    let flat = lookup
        .lookup(&LookupQuery::new("vendor.unknown"))
        .unwrap();
    assert_eq!(flat, LookedUpSettings::Flat(SettingsObject::new()));
}

#[test]
fn test_provider_called_once_per_distinct_app() {
    let provider = two_apps();
    let lookup = SettingsLookup::new(provider.clone());
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.b", "vendor.a"]).unwrap());

    let result = lookup.lookup(&query).unwrap();

    assert_eq!(result.as_bundle().unwrap().len(), 2);
    assert_eq!(provider.calls(), vec!["vendor.a", "vendor.b"]);
}

#[test]
fn test_lookup_is_not_cached() {
    let provider = two_apps();
    let lookup = SettingsLookup::new(provider.clone());
    let query = LookupQuery::new("vendor.a");

    let first = lookup.lookup(&query).unwrap();
    let second = lookup.lookup(&query).unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.calls().len(), 2);
}

#[test]
fn test_provider_failure_is_named() {
    let provider = Arc::new(
        MockProvider::default()
            .with("vendor.a", json!({"x": 1}))
            .failing_on("vendor.b"),
    );
    let lookup = SettingsLookup::new(provider);
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.b"]).unwrap());

    let err = lookup.lookup(&query).unwrap_err();

    match err {
        AppSettingsError::LookupFailed { app, reason } => {
            assert_eq!(app, "vendor.b");
            assert!(reason.contains("store offline"));
        }
        other => panic!("Expected LookupFailed, got {other}"),
    }
}

#[test]
fn test_internal_provider_error_is_reported_as_lookup_failure() {
    let provider = |_app: &AppId| -> Result<Option<SettingsObject>, SettingsProviderError> {
        Err(SettingsProviderError::Internal("corrupt record".to_owned()))
    };
    let lookup = SettingsLookup::new(Arc::new(provider));

    let err = lookup.lookup(&LookupQuery::new("vendor.a")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "settings lookup failed for app 'vendor.a': internal provider error: corrupt record"
    );
}

#[test]
fn test_closure_provider() {
    let provider = |app: &AppId| -> Result<Option<SettingsObject>, SettingsProviderError> {
        Ok(Some(object(json!({"name": app.as_str()}))))
    };
    let lookup = SettingsLookup::new(Arc::new(provider));

    let result = lookup.lookup(&LookupQuery::new("vendor.c")).unwrap();

    assert_eq!(result.into_object()["name"], json!("vendor.c"));
}

#[test]
fn test_consume_passes_continuation_result_through() {
    let lookup = SettingsLookup::new(two_apps());
    let mut calls = 0;

    let keys = lookup
        .consume(&LookupQuery::new("vendor.b"), |settings| {
            calls += 1;
            settings.into_object().len()
        })
        .unwrap();

    assert_eq!(keys, 2);
    assert_eq!(calls, 1);
}

#[test]
fn test_consume_skips_continuation_on_failure() {
    let lookup = SettingsLookup::new(Arc::new(MockProvider::default().failing_on("vendor.a")));
    let mut called = false;

    let result = lookup.consume(&LookupQuery::new("vendor.a"), |_| called = true);

    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn test_from_hub_without_provider_is_unavailable() {
    let hub = ProviderHub::new();

    let err = SettingsLookup::from_hub(&hub, "tenant-7").err().unwrap();

    assert_eq!(
        err.to_string(),
        "settings lookup capability unavailable for scope 'tenant-7'"
    );
}

#[test]
#[traced_test]
fn test_lookup_logs_each_app() {
    let lookup = SettingsLookup::new(two_apps());
    let query = LookupQuery::new(AppList::new(["vendor.a", "vendor.missing"]).unwrap());

    lookup.lookup(&query).unwrap();

    assert!(logs_contain("Looked up app settings"));
    assert!(logs_contain("found=false"));
}
