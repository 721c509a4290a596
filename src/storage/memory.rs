//! In-memory text store
//!
//! A key/value map of text: each collection is kept as a
//! serialized JSON string under its key. Clones share the same underlying map,
//! so a second tracker built from a clone sees what the first one saved.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{de::DeserializeOwned, Serialize};

use super::Repository;
use crate::error::TrackifyError;

/// Shared key/value map of serialized collections
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text stored under `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Overwrite the raw text under `key`
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.into());
    }
}

/// Repository storing one collection under a key of a [`MemoryStore`]
pub struct MemoryRepository<T> {
    store: MemoryStore,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryRepository<T> {
    pub fn new(store: MemoryStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Repository<T> for MemoryRepository<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, TrackifyError> {
        match self.store.get(&self.key) {
            None => Ok(Vec::new()),
            Some(text) => serde_json::from_str(&text).map_err(|e| {
                TrackifyError::Storage(format!("Failed to parse entry '{}': {}", self.key, e))
            }),
        }
    }

    fn save(&self, items: &[T]) -> Result<(), TrackifyError> {
        let text = serde_json::to_string(items)?;
        self.store.set(&self.key, text);
        Ok(())
    }
}
