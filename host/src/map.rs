//! Ordered map emulation over the flat store.
//!
//! The backend only supports scalar operations on opaque keys, so a
//! logical map is persisted as one element entry per map key plus a single
//! index record at the map's base key. The index payload is a raw
//! `@`-delimited sequence of member keys (`@a@b@c` for members `a`, `b`,
//! `c`) in first-insertion order. It is the sole source of truth for
//! `map_keys`; element entries never enumerate themselves.
//!
//! The index record is stored raw, not through the value codec.

use keystone_primitives::{encoded_len, Value};
use tracing::debug;

use crate::error::{HostError, HostResult};
use crate::host::Host;
use crate::keys::{self, Kind};
use crate::store::{Store, STATE_TABLE};

/// Delimiter preceding each member key in an index record.
const INDEX_DELIM: char = '@';

impl<S: Store> Host<S> {
    /// Write one element of a logical map.
    ///
    /// A first write under a new map key registers it in the map's index;
    /// overwrites leave the index untouched. The charge is the same
    /// formula as a scalar put over the element's full suffix — index
    /// maintenance is not charged separately.
    pub fn map_put(
        &mut self,
        key: &str,
        map_key: &str,
        value: &Value,
        owner: Option<&str>,
    ) -> HostResult<()> {
        let element = keys::element_key(&self.ctx.contract_name, owner, key, map_key);
        let is_new = !self.store.has(STATE_TABLE, &element)?;
        // An absent old element reads as an empty baseline.
        let old_len = self
            .store
            .get(STATE_TABLE, &element)?
            .as_deref()
            .map(encoded_len)
            .unwrap_or(0);

        let tagged = value.encode();
        self.store.put(STATE_TABLE, &element, &tagged)?;

        if is_new {
            let index = keys::state_key(Kind::Map, &self.ctx.contract_name, owner, key);
            let mut members = self.store.get(STATE_TABLE, &index)?.unwrap_or_default();
            members.push(INDEX_DELIM);
            members.push_str(map_key);
            self.store.put(STATE_TABLE, &index, &members)?;
        }

        let delta = if is_new {
            keys::charged_len(&element) + encoded_len(&tagged)
        } else {
            encoded_len(&tagged) - old_len
        };
        let payer = owner.unwrap_or(&self.ctx.contract_name);
        self.costs.charge(payer, delta);
        debug!(key = %element, payer, delta, is_new, "map put");
        Ok(())
    }

    /// Read one element of a logical map. Fails with `NotFound` if the
    /// element is absent. Free of charge.
    pub fn map_get(&self, key: &str, map_key: &str, owner: Option<&str>) -> HostResult<Value> {
        let element = keys::element_key(&self.ctx.contract_name, owner, key, map_key);
        let raw = self
            .store
            .get(STATE_TABLE, &element)?
            .ok_or(HostError::NotFound(element))?;
        Ok(Value::decode(&raw)?)
    }

    /// Check whether a map element exists. Free of charge.
    pub fn map_has(&self, key: &str, map_key: &str, owner: Option<&str>) -> HostResult<bool> {
        let element = keys::element_key(&self.ctx.contract_name, owner, key, map_key);
        self.store.has(STATE_TABLE, &element)
    }

    /// The map's member keys in first-insertion order.
    ///
    /// Fails with `NotFound` if the map has never been written. Free of
    /// charge.
    pub fn map_keys(&self, key: &str, owner: Option<&str>) -> HostResult<Vec<String>> {
        let raw = self.index_record(key, owner)?;
        Ok(raw
            .split(INDEX_DELIM)
            .skip(1)
            .map(str::to_string)
            .collect())
    }

    /// Number of member keys in the map. Fails with `NotFound` if the map
    /// has never been written. Free of charge.
    pub fn map_len(&self, key: &str, owner: Option<&str>) -> HostResult<usize> {
        let raw = self.index_record(key, owner)?;
        Ok(raw.matches(INDEX_DELIM).count())
    }

    fn index_record(&self, key: &str, owner: Option<&str>) -> HostResult<String> {
        let index = keys::state_key(Kind::Map, &self.ctx.contract_name, owner, key);
        self.store
            .get(STATE_TABLE, &index)?
            .ok_or(HostError::NotFound(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mem_store::MemStore;
    use keystone_primitives::Context;
    use std::collections::BTreeMap;

    fn test_host() -> Host<MemStore> {
        let ctx = Context::new("abc", "contractName", BTreeMap::new());
        Host::new(MemStore::new(), ctx)
    }

    #[test]
    fn test_map_put_writes_element_and_index() {
        let mut host = test_host();
        host.map_put("hello", "1", &Value::from("world"), None).unwrap();

        let store = host.store();
        assert_eq!(
            store.get(STATE_TABLE, "m-contractName-hello-1").unwrap(),
            Some("sworld".to_string())
        );
        assert_eq!(
            store.get(STATE_TABLE, "m-contractName-hello").unwrap(),
            Some("@1".to_string())
        );
    }

    #[test]
    fn test_map_overwrite_keeps_index_single() {
        let mut host = test_host();
        host.map_put("hello", "1", &Value::from("a"), None).unwrap();
        host.map_put("hello", "1", &Value::from("b"), None).unwrap();

        assert_eq!(host.map_keys("hello", None).unwrap(), vec!["1"]);
        assert_eq!(host.map_get("hello", "1", None).unwrap(), Value::from("b"));
    }

    #[test]
    fn test_map_keys_never_written() {
        let host = test_host();
        let err = host.map_keys("hello", None).unwrap_err();
        assert_eq!(
            err,
            HostError::NotFound("m-contractName-hello".to_string())
        );
    }

    #[test]
    fn test_map_has_and_len() {
        let mut host = test_host();
        host.map_put("hello", "a", &Value::from("1"), None).unwrap();
        host.map_put("hello", "b", &Value::from("2"), None).unwrap();

        assert!(host.map_has("hello", "a", None).unwrap());
        assert!(!host.map_has("hello", "z", None).unwrap());
        assert_eq!(host.map_len("hello", None).unwrap(), 2);
    }
}
