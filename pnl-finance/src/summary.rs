//! Revenue / expense / net totals over a set of transactions.

use std::collections::BTreeMap;

use pnl_ingest::Transaction;
use serde::{Deserialize, Serialize};

/// Totals over a transaction set. `expense` is reported as a positive number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub revenue: f64,
    pub expense: f64,
    pub net: f64,
    pub count: usize,
}

impl Summary {
    pub fn from_transactions<'a, I>(txns: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut revenue = 0.0;
        let mut expense = 0.0;
        let mut count = 0;

        for t in txns {
            count += 1;
            if t.is_income() {
                revenue += t.amount();
            } else if t.is_expense() {
                expense += t.amount().abs();
            }
        }

        Self {
            revenue,
            expense,
            net: revenue - expense,
            count,
        }
    }
}

/// Totals for one transaction type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub kind: String,
    pub summary: Summary,
}

impl TypeBreakdown {
    /// One entry per distinct type, sorted by type label.
    pub fn by_type(txns: &[Transaction]) -> Vec<TypeBreakdown> {
        let mut groups: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
        for t in txns {
            groups.entry(t.kind()).or_default().push(t);
        }

        groups
            .into_iter()
            .map(|(kind, items)| TypeBreakdown {
                kind: kind.to_string(),
                summary: Summary::from_transactions(items),
            })
            .collect()
    }
}
