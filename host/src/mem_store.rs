//! In-memory store for testing.
//!
//! `MemStore` implements `Store` using nested `BTreeMap`s (table → key →
//! value) for deterministic ordering. Useful for unit and integration tests
//! where a real storage backend is not needed.

use std::collections::BTreeMap;

use crate::error::HostResult;
use crate::store::Store;

/// In-memory multi-table store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }

    /// Create a store pre-populated with data.
    pub fn with_data(tables: BTreeMap<String, BTreeMap<String, String>>) -> Self {
        Self { tables }
    }

    /// Insert an entry directly, bypassing the host. For seeding tests.
    pub fn insert(
        &mut self,
        table: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.tables
            .entry(table.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Remove an entry directly, bypassing the host.
    pub fn remove(&mut self, table: &str, key: &str) {
        if let Some(entries) = self.tables.get_mut(table) {
            entries.remove(key);
        }
    }

    /// Returns the total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    /// Returns true if no table holds any entry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemStore {
    fn get(&self, table: &str, key: &str) -> HostResult<Option<String>> {
        Ok(self
            .tables
            .get(table)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn put(&mut self, table: &str, key: &str, value: &str) -> HostResult<()> {
        self.insert(table, key, value);
        Ok(())
    }

    fn has(&self, table: &str, key: &str) -> HostResult<bool> {
        Ok(self
            .tables
            .get(table)
            .is_some_and(|entries| entries.contains_key(key)))
    }

    fn del(&mut self, table: &str, key: &str) -> HostResult<()> {
        self.remove(table, key);
        Ok(())
    }
}
