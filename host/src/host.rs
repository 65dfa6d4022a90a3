//! State host facade.
//!
//! A `Host` is created fresh for each contract execution and mediates every
//! state access the contract performs. It resolves the authoritative
//! namespaced key for each operation and posts the storage byte delta of
//! each write to the cost ledger. Dropped when the execution ends; the
//! store handle is the only thing that outlives it.

use keystone_primitives::{encoded_len, Context, Value};
use tracing::debug;

use crate::cost::{CostLedger, CostReport};
use crate::error::{HostError, HostResult};
use crate::keys::{self, Kind};
use crate::store::{Store, STATE_TABLE};

/// Cost delta for writing `new` where the entry previously held `old`.
///
/// An overwrite is charged only for the change in value size; a fresh
/// insertion is charged for the key's cost-bearing suffix plus the value.
pub(crate) fn write_delta(full_key: &str, old: Option<&str>, new: &str) -> i64 {
    match old {
        Some(old) => encoded_len(new) - encoded_len(old),
        None => keys::charged_len(full_key) + encoded_len(new),
    }
}

/// Per-execution state access and cost metering facade.
///
/// Composes the key scheme, the backend store, the value codec, and the
/// cost ledger. All scalar operations live here; map emulation and balance
/// transfers are in their own modules against the same type.
pub struct Host<S: Store> {
    pub(crate) store: S,
    pub(crate) ctx: Context,
    pub(crate) costs: CostLedger,
}

impl<S: Store> Host<S> {
    /// Create a host for one execution.
    pub fn new(store: S, ctx: Context) -> Self {
        Self {
            store,
            ctx,
            costs: CostLedger::new(),
        }
    }

    /// The execution context this host was created with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The cost ledger accumulated so far in this execution.
    pub fn costs(&self) -> &CostLedger {
        &self.costs
    }

    /// Serializable snapshot of the ledger.
    pub fn cost_report(&self) -> CostReport {
        self.costs.report()
    }

    /// Read access to the backend store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the host and return the store handle, discarding the
    /// context and ledger. Used by the embedder at execution end.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Write a scalar value under the executing contract's namespace.
    ///
    /// The payer is `owner` when given, the executing contract otherwise.
    pub fn put(&mut self, key: &str, value: &Value, owner: Option<&str>) -> HostResult<()> {
        let full_key = keys::state_key(Kind::Basic, &self.ctx.contract_name, owner, key);
        let old = self.store.get(STATE_TABLE, &full_key)?;
        let tagged = value.encode();
        self.store.put(STATE_TABLE, &full_key, &tagged)?;

        let delta = write_delta(&full_key, old.as_deref(), &tagged);
        let payer = owner.unwrap_or(&self.ctx.contract_name);
        self.costs.charge(payer, delta);
        debug!(key = %full_key, payer, delta, "state put");
        Ok(())
    }

    /// Read a scalar value. Fails with `NotFound` if the entry is absent.
    /// Reads are free of charge.
    pub fn get(&self, key: &str, owner: Option<&str>) -> HostResult<Value> {
        let full_key = keys::state_key(Kind::Basic, &self.ctx.contract_name, owner, key);
        let raw = self
            .store
            .get(STATE_TABLE, &full_key)?
            .ok_or(HostError::NotFound(full_key))?;
        Ok(Value::decode(&raw)?)
    }

    /// Check whether a scalar entry exists. Free of charge.
    pub fn has(&self, key: &str, owner: Option<&str>) -> HostResult<bool> {
        let full_key = keys::state_key(Kind::Basic, &self.ctx.contract_name, owner, key);
        self.store.has(STATE_TABLE, &full_key)
    }

    /// Delete a scalar entry, refunding its full allocation to the payer.
    ///
    /// Deleting an entry that does not exist is a silent no-op with zero
    /// cost.
    pub fn del(&mut self, key: &str, owner: Option<&str>) -> HostResult<()> {
        let full_key = keys::state_key(Kind::Basic, &self.ctx.contract_name, owner, key);
        let old = match self.store.get(STATE_TABLE, &full_key)? {
            Some(old) => old,
            None => return Ok(()),
        };
        self.store.del(STATE_TABLE, &full_key)?;

        let delta = -(keys::charged_len(&full_key) + encoded_len(&old));
        let payer = owner.unwrap_or(&self.ctx.contract_name);
        self.costs.charge(payer, delta);
        debug!(key = %full_key, payer, delta, "state del");
        Ok(())
    }
}
