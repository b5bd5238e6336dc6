//! `localStorage`-backed storage adapters.
//!
//! These adapters are synchronous at the browser API boundary while implementing the async
//! storage traits so higher layers stay adapter-agnostic. On non-wasm targets every operation
//! degrades to an empty, successful result.

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    app_state::{AppStateEnvelope, AppStateStore, AppStateStoreFuture},
    prefs::{PrefsStore, PrefsStoreFuture},
};

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads a raw JSON string for a preference key.
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = local_storage().ok()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Deletes a preference key from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Loads and deserializes a typed preference value.
    pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        let raw = self.load_json(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Serializes and saves a typed preference value.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the localStorage write fails.
    pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
        let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
        self.save_json(key, &raw)
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_json(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}

fn app_state_storage_key(namespace: &str) -> String {
    format!("appstate.{namespace}")
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser app-state store persisting envelopes as JSON strings in `window.localStorage`.
pub struct WebAppStateStore;

impl WebAppStateStore {
    fn load_sync(self, namespace: &str) -> Result<Option<AppStateEnvelope>, String> {
        let Some(raw) = WebPrefsStore.load_json(&app_state_storage_key(namespace)) else {
            return Ok(None);
        };
        let envelope = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
        Ok(Some(envelope))
    }

    fn save_sync(self, envelope: &AppStateEnvelope) -> Result<(), String> {
        let raw = serde_json::to_string(envelope).map_err(|e| e.to_string())?;
        WebPrefsStore.save_json(&app_state_storage_key(&envelope.namespace), &raw)
    }

    fn delete_sync(self, namespace: &str) -> Result<(), String> {
        WebPrefsStore.delete_json(&app_state_storage_key(namespace))
    }
}

impl AppStateStore for WebAppStateStore {
    fn load_app_state_envelope<'a>(
        &'a self,
        namespace: &'a str,
    ) -> AppStateStoreFuture<'a, Result<Option<AppStateEnvelope>, String>> {
        let store = *self;
        Box::pin(async move { store.load_sync(namespace) })
    }

    fn save_app_state_envelope<'a>(
        &'a self,
        envelope: &'a AppStateEnvelope,
    ) -> AppStateStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_sync(envelope) })
    }

    fn delete_app_state<'a>(
        &'a self,
        namespace: &'a str,
    ) -> AppStateStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_sync(namespace) })
    }
}
