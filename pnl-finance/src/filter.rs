//! Transaction-type toggles.

use std::collections::{BTreeMap, BTreeSet};

use pnl_ingest::Transaction;
use serde::{Deserialize, Serialize};

/// Distinct `type` labels, sorted lexicographically.
pub fn distinct_types(txns: &[Transaction]) -> Vec<String> {
    txns.iter()
        .map(|t| t.kind())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Enabled/disabled flag per transaction type.
///
/// A type that was never seen counts as enabled; only an explicit `false`
/// hides it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFilter {
    enabled: BTreeMap<String, bool>,
}

impl TypeFilter {
    /// Filter with every type in `types` enabled.
    pub fn seeded<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: types.into_iter().map(|t| (t.into(), true)).collect(),
        }
    }

    /// Seed from the distinct types of a parsed set.
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        Self::seeded(distinct_types(txns))
    }

    /// Register a type as enabled unless it already has a setting.
    pub fn observe(&mut self, kind: &str) {
        self.enabled.entry(kind.to_string()).or_insert(true);
    }

    pub fn is_enabled(&self, kind: &str) -> bool {
        self.enabled.get(kind).copied() != Some(false)
    }

    pub fn set_enabled(&mut self, kind: &str, enabled: bool) {
        self.enabled.insert(kind.to_string(), enabled);
    }

    /// Flip a type; returns the new state.
    pub fn toggle(&mut self, kind: &str) -> bool {
        let next = !self.is_enabled(kind);
        self.set_enabled(kind, next);
        next
    }

    /// Known types with their state, in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.enabled.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn disabled(&self) -> Vec<&str> {
        self.entries().filter(|(_, on)| !on).map(|(k, _)| k).collect()
    }

    /// Transactions whose type is not disabled, in their original order.
    pub fn active<'a>(&self, txns: &'a [Transaction]) -> Vec<&'a Transaction> {
        txns.iter().filter(|t| self.is_enabled(t.kind())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnl_ingest::SourceFields;

    fn txn(kind: &str, amount: f64) -> Transaction {
        Transaction::new("", kind, amount, "", SourceFields::Generic)
    }

    #[test]
    fn test_distinct_types_sorted_and_deduped() {
        let txns = vec![txn("Sale", -1.0), txn("Payment", 5.0), txn("Sale", -2.0), txn("", 1.0)];
        assert_eq!(distinct_types(&txns), vec!["", "Payment", "Sale"]);
    }

    #[test]
    fn test_seeded_types_start_enabled() {
        let filter = TypeFilter::seeded(["Sale", "Payment"]);
        assert!(filter.is_enabled("Sale"));
        assert!(filter.is_enabled("Payment"));
        assert!(filter.disabled().is_empty());
    }

    #[test]
    fn test_unknown_type_is_enabled() {
        let filter = TypeFilter::default();
        assert!(filter.is_enabled("Anything"));
    }

    #[test]
    fn test_toggle_and_active_subset() {
        let txns = vec![txn("Sale", -1.0), txn("Payment", 5.0), txn("Sale", -2.0)];
        let mut filter = TypeFilter::from_transactions(&txns);

        assert!(!filter.toggle("Sale"));
        assert_eq!(filter.disabled(), vec!["Sale"]);

        let active = filter.active(&txns);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind(), "Payment");

        assert!(filter.toggle("Sale"));
        assert_eq!(filter.active(&txns).len(), 3);
    }

    #[test]
    fn test_observe_keeps_existing_setting() {
        let mut filter = TypeFilter::default();
        filter.set_enabled("Fee", false);
        filter.observe("Fee");
        filter.observe("Sale");
        assert!(!filter.is_enabled("Fee"));
        assert_eq!(filter.entries().collect::<Vec<_>>(), vec![("Fee", false), ("Sale", true)]);
    }
}
