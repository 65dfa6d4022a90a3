//! Flat key-value backend abstraction.
//!
//! `Store` is the seam between the host and whatever persistence engine the
//! surrounding node runs. The host only ever issues scalar `get`/`put`/
//! `has`/`del` calls against a `(table, key)` pair; everything richer — the
//! namespacing, the map emulation, the cost accounting — is built above
//! this trait.
//!
//! Implementations:
//! - `MemStore` (this crate) — in-memory BTreeMap tables for testing
//! - the node's durable backend (production, supplied by the embedder)

use crate::error::HostResult;

/// Table holding contract state entries.
pub const STATE_TABLE: &str = "state";

/// Table holding account balance entries.
pub const BALANCE_TABLE: &str = "balance";

/// Abstraction over the flat multi-table key-value backend.
///
/// Implementations must be deterministic within one execution: the same key
/// returns the same value until the host itself writes it. Atomicity and
/// durability across executions are the embedder's responsibility.
pub trait Store: Send {
    /// Get the value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, table: &str, key: &str) -> HostResult<Option<String>>;

    /// Write a key-value pair.
    fn put(&mut self, table: &str, key: &str, value: &str) -> HostResult<()>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn has(&self, table: &str, key: &str) -> HostResult<bool> {
        Ok(self.get(table, key)?.is_some())
    }

    /// Delete a key. Deleting an absent key is not an error.
    fn del(&mut self, table: &str, key: &str) -> HostResult<()>;
}
