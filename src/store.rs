//! Local Content Cache
//!
//! A string key-value store behind a trait, with typed per-section access
//! on top. `LocalStore` is the browser's `localStorage`; `MemoryStore`
//! backs tests and browsers with storage disabled.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::content::Section;
use crate::error::{js_error_string, ContentError};

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ContentError>;
}

/// `window.localStorage`
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// `None` when the browser has storage disabled (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError> {
        self.storage
            .get_item(key)
            .map_err(|e| ContentError::Storage(js_error_string(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ContentError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ContentError::Storage(js_error_string(&e)))
    }
}

/// In-memory store; lives as long as the page
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ContentError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>, ContentError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ContentError> {
        (**self).set(key, value)
    }
}

/// Typed view over a store: one slot per section, holding the bare record list
pub struct ContentCache<K> {
    store: K,
}

impl<K: KeyValueStore> ContentCache<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Cached records for `S`; `Ok(None)` when nothing was cached yet
    pub fn read<S: Section>(&self) -> Result<Option<Vec<S::Record>>, ContentError> {
        let Some(raw) = self.store.get(S::CACHE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| ContentError::CacheRead { key: S::CACHE_KEY, source })
    }

    /// Overwrite the slot for `S`
    pub fn write<S: Section>(&self, records: &[S::Record]) -> Result<(), ContentError> {
        let raw = serde_json::to_string(records)
            .map_err(|e| ContentError::Storage(format!("cannot serialise {}: {}", S::NAME, e)))?;
        self.store.set(S::CACHE_KEY, &raw)
    }
}
