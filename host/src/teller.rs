//! Balance transfers between accounts.
//!
//! Balances live in their own store table under `i-<account>` keys,
//! outside the contract namespaces: they belong to account identities,
//! not to contract state. A transfer debits the sender and credits the
//! recipient in one call; every failure check precedes the first write, so
//! the caller observes either both mutations or neither.

use keystone_primitives::{DecodeError, Value};
use tracing::{debug, warn};

use crate::error::{HostError, HostResult};
use crate::host::{write_delta, Host};
use crate::keys;
use crate::store::{Store, BALANCE_TABLE};

impl<S: Store> Host<S> {
    /// Current balance of `account`. Absent entries read as zero; a stored
    /// entry that is not an integer is corrupt and fails to decode.
    pub fn balance(&self, account: &str) -> HostResult<i64> {
        let key = keys::balance_key(account);
        match self.store.get(BALANCE_TABLE, &key)? {
            Some(raw) => {
                let value = Value::decode(&raw)?;
                value.as_int().ok_or_else(|| {
                    HostError::Decode(DecodeError::WrongType {
                        expected: "integer",
                        found: value.tag(),
                    })
                })
            }
            None => Ok(0),
        }
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// The sender must appear in the execution's authorization list and
    /// hold at least `amount`. The recipient's balance entry is created at
    /// a zero baseline if absent. Each balance update is charged to the
    /// account it belongs to.
    pub fn transfer(&mut self, from: &str, to: &str, amount: i64) -> HostResult<()> {
        if amount < 0 {
            return Err(HostError::NegativeTransfer(amount));
        }
        if !self.ctx.is_authorized(from) {
            warn!(from, "transfer rejected: sender not in auth list");
            return Err(HostError::Unauthorized(from.to_string()));
        }

        let from_balance = self.balance(from)?;
        if from_balance < amount {
            return Err(HostError::InsufficientFunds {
                have: from_balance,
                need: amount,
            });
        }
        let to_balance = self.balance(to)?;
        let credited = to_balance
            .checked_add(amount)
            .ok_or_else(|| HostError::BalanceOverflow(to.to_string()))?;

        // Debit and credit cancel; leave the entries untouched.
        if from == to {
            return Ok(());
        }

        // All checks passed; from here on both writes must land.
        self.write_balance(from, from_balance - amount)?;
        self.write_balance(to, credited)?;
        debug!(from, to, amount, "transfer");
        Ok(())
    }

    /// Write an account balance, charging the account itself for the
    /// storage delta through the same path as a scalar put.
    fn write_balance(&mut self, account: &str, amount: i64) -> HostResult<()> {
        let key = keys::balance_key(account);
        let old = self.store.get(BALANCE_TABLE, &key)?;
        let tagged = Value::Int(amount).encode();
        self.store.put(BALANCE_TABLE, &key, &tagged)?;
        self.costs
            .charge(account, write_delta(&key, old.as_deref(), &tagged));
        Ok(())
    }
}
