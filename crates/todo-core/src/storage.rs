//! Storage Layer
//!
//! `KeyValueStore` is the injected capability (browser `localStorage`, memory, ...).
//! `Persistence` wraps a store with availability probing and JSON encode/decode,
//! translating raw store failures into typed errors.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Key written and removed by `Persistence::is_available`
const PROBE_KEY: &str = "__storage_probe__";

/// Raw failure reported by a `KeyValueStore`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("quota exceeded")]
    QuotaExceeded,
    #[error("{0}")]
    Backend(String),
}

/// Minimal string key/value store
pub trait KeyValueStore {
    /// Read the raw value, `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a raw value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key; removing an absent key succeeds
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Failure to persist a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Storage quota exceeded. Please free up some space.")]
    QuotaExceeded,
    #[error("Failed to save to localStorage: {0}")]
    WriteFailed(String),
}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::QuotaExceeded => SaveError::QuotaExceeded,
            StoreError::Backend(msg) => SaveError::WriteFailed(msg),
        }
    }
}

/// Failure to read back a persisted value
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read stored value: {0}")]
    Read(#[source] StoreError),
    #[error("stored value is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON persistence over a `KeyValueStore`
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Probe the store by writing and removing a sentinel key
    pub fn is_available(&mut self) -> bool {
        let probe = self
            .store
            .set(PROBE_KEY, PROBE_KEY)
            .and_then(|()| self.store.remove(PROBE_KEY));
        match probe {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[STORAGE] Store unavailable: {}", e);
                false
            }
        }
    }

    /// Serialize `value` as JSON and write it under `key`
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), SaveError> {
        let json = serde_json::to_string(value).map_err(|e| SaveError::WriteFailed(e.to_string()))?;
        self.store.set(key, &json)?;
        Ok(())
    }

    /// Read and parse the value under `key`.
    ///
    /// `Ok(None)` means the key is absent; an unreadable or unparsable value is an error.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, LoadError> {
        let Some(raw) = self.store.get(key).map_err(LoadError::Read)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Read and parse the value under `key`, falling back to `default`. Never fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                log::error!("[STORAGE] Failed to load '{}': {}", key, e);
                default
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

/// In-process `KeyValueStore` with injectable failures
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    quota_bytes: Option<usize>,
    write_failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store on which every operation fails, like blocked browser storage
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Seed a raw value
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Limit the total size of keys and values
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota_bytes = bytes;
    }

    /// Make every following write fail with `message`
    pub fn fail_writes(&mut self, message: impl Into<String>) {
        self.write_failure = Some(message.into());
    }

    pub fn restore_writes(&mut self) {
        self.write_failure = None;
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_enabled(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Backend("storage is disabled".to_string()));
        }
        Ok(())
    }

    fn used_bytes_with(&self, key: &str, value: &str) -> usize {
        let others: usize = self
            .entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        others + key.len() + value.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_enabled()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_enabled()?;
        if let Some(msg) = &self.write_failure {
            return Err(StoreError::Backend(msg.clone()));
        }
        if let Some(quota) = self.quota_bytes {
            if self.used_bytes_with(key, value) > quota {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_enabled()?;
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    const KEY: &str = "todos";

    #[test]
    fn test_available_store_leaves_no_probe() {
        let mut persistence = Persistence::new(MemoryStore::new());
        assert!(persistence.is_available());
        assert!(persistence.store().is_empty());
    }

    #[test]
    fn test_unavailable_store() {
        let mut persistence = Persistence::new(MemoryStore::unavailable());
        assert!(!persistence.is_available());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let mut persistence = Persistence::new(MemoryStore::new());
        let mut second = Todo::new(2, "Task 2");
        second.completed = true;
        let todos = vec![Todo::new(3, "Task 3"), second, Todo::new(1, "Task 1")];

        persistence.save(KEY, &todos).unwrap();
        let loaded: Vec<Todo> = persistence.load(KEY, Vec::new());
        assert_eq!(loaded, todos);
    }

    #[test]
    fn test_load_absent_returns_default() {
        let persistence = Persistence::new(MemoryStore::new());
        let loaded: Vec<Todo> = persistence.load(KEY, vec![Todo::new(9, "fallback")]);
        assert_eq!(loaded, vec![Todo::new(9, "fallback")]);
        assert!(matches!(persistence.try_load::<Vec<Todo>>(KEY), Ok(None)));
    }

    #[test]
    fn test_load_corrupted_returns_default() {
        let persistence = Persistence::new(MemoryStore::new().with_entry(KEY, "{invalid json}"));
        let loaded: Vec<Todo> = persistence.load(KEY, Vec::new());
        assert!(loaded.is_empty());
        assert!(matches!(persistence.try_load::<Vec<Todo>>(KEY), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_from_unavailable_store_returns_default() {
        let persistence = Persistence::new(MemoryStore::unavailable());
        assert_eq!(persistence.load(KEY, 5u32), 5);
        assert!(matches!(persistence.try_load::<u32>(KEY), Err(LoadError::Read(_))));
    }

    #[test]
    fn test_save_quota_exceeded() {
        let mut persistence = Persistence::new(MemoryStore::new().with_quota(16));
        let todos = vec![Todo::new(1, "a task that does not fit")];
        assert_eq!(persistence.save(KEY, &todos), Err(SaveError::QuotaExceeded));
        assert!(persistence.store().raw(KEY).is_none());
    }

    #[test]
    fn test_save_write_failure_carries_message() {
        let mut store = MemoryStore::new();
        store.fail_writes("device busy");
        let mut persistence = Persistence::new(store);
        let err = persistence.save(KEY, &Vec::<Todo>::new()).unwrap_err();
        assert_eq!(err, SaveError::WriteFailed("device busy".to_string()));
        assert_eq!(err.to_string(), "Failed to save to localStorage: device busy");
    }

    #[test]
    fn test_overwrite_counts_against_quota_once() {
        let mut store = MemoryStore::new().with_quota(10);
        store.set("k", "12345678").unwrap();
        store.set("k", "87654321").unwrap();
        assert_eq!(store.raw("k"), Some("87654321"));
    }
}
