//! Browser localStorage Adapter
//!
//! `KeyValueStore` over `window.localStorage`.

use todo_core::{KeyValueStore, StoreError};
use wasm_bindgen::{JsCast, JsValue};

/// DOMException names browsers use when the storage quota is hit
const QUOTA_EXCEEDED_NAMES: &[&str] = &["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"];

/// `window.localStorage`, or nothing if the browser refuses access
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserStorage {
    pub fn new() -> Self {
        // local_storage() throws when storage is blocked (e.g. disabled cookies)
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[STORAGE] window.localStorage is not accessible");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Backend("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(store_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(store_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(store_error)
    }
}

/// Translate a thrown JS value into a `StoreError`
fn store_error(err: JsValue) -> StoreError {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        let name = exception.name();
        if QUOTA_EXCEEDED_NAMES.contains(&name.as_str()) {
            return StoreError::QuotaExceeded;
        }
        return StoreError::Backend(exception.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return StoreError::Backend(String::from(error.message()));
    }
    StoreError::Backend(err.as_string().unwrap_or_else(|| "unknown storage error".to_string()))
}
