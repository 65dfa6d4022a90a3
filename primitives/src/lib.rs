//! `keystone-primitives` — foundational types for the keystone state host.
//!
//! This crate provides the types shared by the host and any embedding
//! execution engine:
//!
//! - `Value` — the closed tagged union of storable contract values, with
//!   the persisted one-character-tag string codec
//! - `DecodeError` — codec failure type
//! - `Context` — immutable per-execution metadata (committer, executing
//!   contract, authorization list)

pub mod context;
pub mod value;

// Re-export commonly used types at the crate root for convenience.
pub use context::Context;
pub use value::{encoded_len, DecodeError, Value};
