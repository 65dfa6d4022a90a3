//! Shared test helpers for integration tests.
//!
//! Provides context and host factories plus balance seeding used across
//! all integration test files.

#![allow(dead_code)]

use std::collections::BTreeMap;

use keystone_host::{Host, MemStore, BALANCE_TABLE, STATE_TABLE};
use keystone_primitives::{Context, Value};

/// Contract name used across all tests.
pub const CONTRACT: &str = "contractName";

// ── Context Builders ──

/// Context with no authorized principals.
pub fn contract_context() -> Context {
    Context::new("abc", CONTRACT, BTreeMap::new())
}

/// Context authorizing `hello` (level 1) and `b` (level 0).
pub fn auth_context() -> Context {
    let mut auth = BTreeMap::new();
    auth.insert("hello".to_string(), 1);
    auth.insert("b".to_string(), 0);
    Context::new("abc", CONTRACT, auth)
}

// ── Host Builders ──

/// Host over an empty in-memory store, no authorized principals.
pub fn empty_host() -> Host<MemStore> {
    Host::new(MemStore::new(), contract_context())
}

/// Host over a store pre-seeded with raw state entries.
pub fn seeded_host(entries: &[(&str, &str)]) -> Host<MemStore> {
    let mut store = MemStore::new();
    for (key, value) in entries {
        store.insert(STATE_TABLE, *key, *value);
    }
    Host::new(store, contract_context())
}

/// Host with the transfer auth list and the given account balances.
pub fn funded_host(balances: &[(&str, i64)]) -> Host<MemStore> {
    let mut store = MemStore::new();
    for (account, amount) in balances {
        store.insert(
            BALANCE_TABLE,
            format!("i-{account}"),
            Value::Int(*amount).encode(),
        );
    }
    Host::new(store, auth_context())
}
