//! Preferences plugin-backed key-value store transport.
//!
//! Inside a native shell the store survives webview data clears because the plugin persists to
//! platform preferences (SharedPreferences / UserDefaults) instead of `localStorage`.

use photo_host::{KeyValueFuture, KeyValueStore};

#[derive(Debug, Clone, Copy, Default)]
/// Native-shell key-value store backed by the preferences plugin.
pub struct HybridKeyValueStore;

impl KeyValueStore for HybridKeyValueStore {
    fn get<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { crate::bridge::kv_get(key).await })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::kv_set(key, value).await })
    }

    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::kv_remove(key).await })
    }
}
