//! Persistence layer for the expense tracker
//!
//! The tracker never talks to a concrete storage API directly; everything
//! goes through the [`KeyValueStore`] port so callers can plug in the
//! file-backed store, the in-memory store, or their own backend.

pub mod file_store;

pub use file_store::FileStore;

use std::collections::HashMap;

use crate::error::TrackerResult;

/// Key under which the transaction array is persisted
pub const DATA_KEY: &str = "expense-tracker-data";

/// Key under which the migration marker is persisted
pub const MIGRATION_KEY: &str = "expense-tracker-migration-v1";

/// Value of the migration marker once migration has run
pub const MIGRATION_DONE: &str = "true";

/// String key-value persistence port
///
/// Values are opaque strings; the transaction store and the migration pass
/// put JSON in them, but the port itself does not care.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove the value stored under `key`; absent keys are a no-op
    fn remove(&mut self, key: &str) -> TrackerResult<()>;
}

/// In-memory key-value store
///
/// Backs tests and embedders that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries
    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TrackerResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
