//! Per-payer storage cost accounting.
//!
//! Every write through the host posts a signed byte delta against a payer
//! identity: the explicit owner when one is given, otherwise the executing
//! contract (the account itself for balance updates). The ledger
//! accumulates the net bytes of storage each payer holds responsibility
//! for within one execution. Reads are free.
//!
//! One ledger lives inside each `Host` for exactly one execution; it is
//! never shared across executions and never persisted.

use std::collections::BTreeMap;

use serde::Serialize;

/// Net storage bytes charged to one payer within one execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostRecord {
    /// Net byte delta. Negative when the payer freed more than it
    /// allocated.
    pub data: i64,
}

/// Accumulates net storage-byte charges per payer identity.
#[derive(Debug, Clone, Default)]
pub struct CostLedger {
    costs: BTreeMap<String, CostRecord>,
}

impl CostLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signed byte delta to the payer's record, creating the record
    /// at zero on first charge. Saturating at the i64 bounds.
    pub fn charge(&mut self, payer: &str, delta: i64) {
        let record = self.costs.entry(payer.to_string()).or_default();
        record.data = record.data.saturating_add(delta);
    }

    /// Net bytes charged to `payer` so far; zero if never charged.
    pub fn charged(&self, payer: &str) -> i64 {
        self.costs.get(payer).map(|r| r.data).unwrap_or(0)
    }

    /// Returns true if `payer` has a record, even one netting to zero.
    pub fn has_record(&self, payer: &str) -> bool {
        self.costs.contains_key(payer)
    }

    /// Iterate over `(payer, record)` pairs in payer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CostRecord)> {
        self.costs.iter().map(|(payer, record)| (payer.as_str(), record))
    }

    /// Number of payers with a record.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Returns true if nothing has been charged yet.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Drop all records. Used when an execution is restarted.
    pub fn clear(&mut self) {
        self.costs.clear();
    }

    /// Serializable snapshot of the ledger for reporting.
    pub fn report(&self) -> CostReport {
        CostReport {
            charges: self
                .costs
                .iter()
                .map(|(payer, record)| (payer.clone(), record.data))
                .collect(),
        }
    }
}

/// Snapshot of per-payer charges for one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostReport {
    /// Payer identity → net storage bytes.
    pub charges: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_record_creation() {
        let mut ledger = CostLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.charged("contractName"), 0);
        assert!(!ledger.has_record("contractName"));

        ledger.charge("contractName", 24);
        assert!(ledger.has_record("contractName"));
        assert_eq!(ledger.charged("contractName"), 24);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_accumulation() {
        let mut ledger = CostLedger::new();
        ledger.charge("a", 24);
        ledger.charge("a", 4);
        ledger.charge("a", -24);
        assert_eq!(ledger.charged("a"), 4);
    }

    #[test]
    fn test_negative_net() {
        let mut ledger = CostLedger::new();
        ledger.charge("a", -24);
        assert_eq!(ledger.charged("a"), -24);
    }

    #[test]
    fn test_payers_are_independent() {
        let mut ledger = CostLedger::new();
        ledger.charge("contractName", -24);
        ledger.charge("abc", 4);
        assert_eq!(ledger.charged("contractName"), -24);
        assert_eq!(ledger.charged("abc"), 4);
    }

    #[test]
    fn test_saturation() {
        let mut ledger = CostLedger::new();
        ledger.charge("a", i64::MAX);
        ledger.charge("a", 1);
        assert_eq!(ledger.charged("a"), i64::MAX);

        ledger.charge("b", i64::MIN);
        ledger.charge("b", -1);
        assert_eq!(ledger.charged("b"), i64::MIN);
    }

    #[test]
    fn test_zero_charge_creates_record() {
        let mut ledger = CostLedger::new();
        ledger.charge("a", 0);
        assert!(ledger.has_record("a"));
        assert_eq!(ledger.charged("a"), 0);
    }

    #[test]
    fn test_clear() {
        let mut ledger = CostLedger::new();
        ledger.charge("a", 24);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.charged("a"), 0);
    }

    #[test]
    fn test_iter_order() {
        let mut ledger = CostLedger::new();
        ledger.charge("c", 1);
        ledger.charge("a", 2);
        ledger.charge("b", 3);
        let payers: Vec<&str> = ledger.iter().map(|(p, _)| p).collect();
        assert_eq!(payers, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_report() {
        let mut ledger = CostLedger::new();
        ledger.charge("contractName", 24);
        ledger.charge("abc", -4);
        let report = ledger.report();
        assert_eq!(report.charges["contractName"], 24);
        assert_eq!(report.charges["abc"], -4);
    }
}
