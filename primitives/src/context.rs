//! Per-execution context consumed by the state host.
//!
//! A `Context` is built once by the surrounding execution engine before a
//! contract runs and stays immutable for the execution's lifetime. The host
//! reads the executing contract's name for key namespacing and cost payer
//! resolution, and the authorization list for transfer checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable metadata for one contract execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Opaque commit/block identifier for this execution.
    pub committer: String,
    /// Name of the currently executing contract.
    pub contract_name: String,
    /// Principals authorized in this execution, with their authorization
    /// level. Populated by the engine from the transaction's signers.
    pub auth_list: BTreeMap<String, i32>,
}

impl Context {
    /// Build a context for one execution.
    pub fn new(
        committer: impl Into<String>,
        contract_name: impl Into<String>,
        auth_list: BTreeMap<String, i32>,
    ) -> Self {
        Self {
            committer: committer.into(),
            contract_name: contract_name.into(),
            auth_list,
        }
    }

    /// The authorization level of `principal`, if it is listed.
    pub fn auth_level(&self, principal: &str) -> Option<i32> {
        self.auth_list.get(principal).copied()
    }

    /// Returns true if `principal` appears in the authorization list.
    pub fn is_authorized(&self, principal: &str) -> bool {
        self.auth_list.contains_key(principal)
    }
}
