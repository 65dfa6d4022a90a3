//! Namespaced key construction for the flat state keyspace.
//!
//! Every state entry lives in one global flat keyspace, so isolation
//! between contracts and owners is carried entirely by the key layout:
//!
//! ```text
//! <kind>-<contract>[@<owner>]-<key>[-<mapKey>]
//! ```
//!
//! with kind `b` for basic scalars and `m` for map elements and indices.
//! Account balances sit outside the contract namespaces as `i-<account>`.
//! The layout is a persisted format; it must stay byte-exact.
//!
//! Segments are concatenated raw. A `-` or `@` inside a contract name,
//! owner, or key would collide with the separators — callers are expected
//! to validate identifiers before they reach the host.

/// Key namespace discriminator, persisted as the single-character prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Basic scalar entry (`b`).
    Basic,
    /// Map element or map index entry (`m`).
    Map,
    /// Account balance entry (`i`).
    Balance,
}

impl Kind {
    /// The persisted prefix character.
    pub fn prefix(self) -> char {
        match self {
            Self::Basic => 'b',
            Self::Map => 'm',
            Self::Balance => 'i',
        }
    }
}

/// Build the full key for a scalar entry or a map's index record.
///
/// With an owner the namespace segment is `contract@owner`, otherwise the
/// contract name alone.
pub fn state_key(kind: Kind, contract: &str, owner: Option<&str>, key: &str) -> String {
    match owner {
        Some(owner) => format!("{}-{}@{}-{}", kind.prefix(), contract, owner, key),
        None => format!("{}-{}-{}", kind.prefix(), contract, key),
    }
}

/// Build the full key for one element of a logical map.
pub fn element_key(contract: &str, owner: Option<&str>, key: &str, map_key: &str) -> String {
    format!("{}-{}", state_key(Kind::Map, contract, owner, key), map_key)
}

/// Build the key for an account's balance. Account identities key the
/// balance table directly, without contract namespacing.
pub fn balance_key(account: &str) -> String {
    format!("{}-{}", Kind::Balance.prefix(), account)
}

/// Byte length of the cost-bearing portion of a full key: everything after
/// the kind prefix and its separator.
///
/// A new insertion is charged for this suffix plus the stored value, and a
/// deletion refunds the same amount.
pub fn charged_len(full_key: &str) -> i64 {
    full_key.len().saturating_sub(2) as i64
}
