//! `keystone-host` — state access and storage-cost metering for contract
//! execution.
//!
//! The host sits between deterministic contract execution and a flat
//! key-value backend, and owns three concerns:
//!
//! - a collision-free key-namespacing scheme isolating per-contract and
//!   per-owner state inside one global keyspace (`keys`)
//! - incremental cost accounting that charges each payer exactly the net
//!   storage bytes its operations allocated or freed (`cost`)
//! - an ordered, keyed map abstraction emulated over scalar store
//!   operations via linked index records (`map`)
//!
//! plus balance transfers with authorization enforcement (`teller`). The
//! backend itself is abstract (`Store`); `MemStore` is the in-memory
//! implementation used in tests.

pub mod cost;
pub mod error;
pub mod host;
pub mod keys;
pub mod mem_store;
pub mod store;

mod map;
mod teller;

// Re-export commonly used types at the crate root.
pub use cost::{CostLedger, CostRecord, CostReport};
pub use error::{HostError, HostResult};
pub use host::Host;
pub use keys::Kind;
pub use mem_store::MemStore;
pub use store::{Store, BALANCE_TABLE, STATE_TABLE};
