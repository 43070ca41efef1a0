//! In-process key-value store.

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

/// In-memory implementation of [`KeyValueStore`] using DashMap.
///
/// State lives only as long as the process and is not shared with other
/// instances. Increments hold the shard lock of their key for the whole
/// read-modify-write, so a single increment is indivisible just like `INCR`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    storage: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (state is not persisted)");
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.storage.contains_key(key))
    }

    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut entry = self
            .storage
            .entry(key.to_owned())
            .or_insert_with(|| "0".to_string());

        let current: i64 = entry.parse().map_err(|_| {
            StoreError::InvalidData(format!("value at {key} is not an integer"))
        })?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| StoreError::InvalidData(format!("increment of {key} would overflow")))?;

        *entry = next.to_string();
        Ok(next)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
