//! Host error taxonomy.
//!
//! Every failure is local to the invoking call: the host never retries a
//! store round trip and never suppresses a backend error. The few places
//! where absence is tolerated (deleting a missing entry, the baseline reads
//! inside a map write) do not produce `NotFound` — they treat absence as an
//! empty baseline and proceed.

use keystone_primitives::DecodeError;

/// Convenience result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Failure of a host operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The target key or map index is absent.
    #[error("state entry not found: {0}")]
    NotFound(String),

    /// A stored value could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The transfer sender is not in the execution's authorization list.
    #[error("'{0}' is not authorized to move funds")]
    Unauthorized(String),

    /// The sender's balance does not cover the transfer.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientFunds { have: i64, need: i64 },

    /// Transfer amounts must be non-negative.
    #[error("transfer amount must not be negative, got {0}")]
    NegativeTransfer(i64),

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow crediting '{0}'")]
    BalanceOverflow(String),

    /// Backend store failure, propagated verbatim.
    #[error("store error: {0}")]
    Store(String),
}
