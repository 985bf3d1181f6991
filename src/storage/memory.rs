//! In-memory store.

use rustc_hash::FxHashMap;

use super::store::KeyValueStore;
use crate::error::StoreError;

/// Key-value store held in memory.
///
/// An optional byte quota (keys plus values) makes writes fail with
/// [`StoreError::QuotaExceeded`], the way browser session storage does
/// when full.
///
/// ```
/// use puzzle_hunt::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::with_quota(8);
/// assert!(store.set("k", "short").is_ok());
/// assert!(store.set("k", "much too long").is_err());
/// assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that holds at most `bytes` of keys and values.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            quota: Some(bytes),
        }
    }

    /// Bytes currently used by keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Fail if writing `batch` would exceed the quota. Keys already held
    /// count only once, with their new value.
    fn check_quota(&self, batch: &[(&str, &str)]) -> Result<(), StoreError> {
        let Some(quota) = self.quota else {
            return Ok(());
        };

        let mut seen: Vec<&str> = Vec::with_capacity(batch.len());
        let mut replaced = 0;
        let mut needed = 0;
        for (key, value) in batch {
            if seen.contains(key) {
                continue;
            }
            seen.push(*key);
            replaced += self.entries.get(*key).map_or(0, |old| key.len() + old.len());
            needed += key.len() + value.len();
        }

        let available = quota.saturating_sub(self.used_bytes() - replaced);
        if needed > available {
            return Err(StoreError::QuotaExceeded { needed, available });
        }
        Ok(())
    }

    /// Number of keys held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_quota(&[(key, value)])?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let batch: Vec<(&str, &str)> = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.check_quota(&batch)?;
        for (key, value) in batch {
            self.entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}
