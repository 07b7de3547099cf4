use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Normalized output of statement parsing (layout-agnostic).
///
/// `amount` keeps the sign used by the source statement; nothing re-signs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    description: String,
    #[serde(rename = "type")]
    kind: String,
    amount: f64,
    /// Chosen per schema from the source columns; may be empty.
    date: String,
    #[serde(flatten)]
    source: SourceFields,
}

/// Columns retained only by a specific layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", rename_all = "kebab-case")]
pub enum SourceFields {
    #[serde(rename_all = "camelCase")]
    CreditCard {
        transaction_date: String,
        post_date: String,
        category: String,
        memo: String,
    },
    #[serde(rename_all = "camelCase")]
    DepositAccount {
        details: String,
        posting_date: String,
        balance: String,
        check_or_slip: String,
    },
    Generic,
}

impl SourceFields {
    pub fn schema(&self) -> Schema {
        match self {
            SourceFields::CreditCard { .. } => Schema::CreditCard,
            SourceFields::DepositAccount { .. } => Schema::DepositAccount,
            SourceFields::Generic => Schema::Generic,
        }
    }
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        kind: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
        source: SourceFields,
    ) -> Self {
        Self {
            description: description.into(),
            kind: kind.into(),
            amount,
            date: date.into(),
            source,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Classification label from the statement's `Type` column.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn source(&self) -> &SourceFields {
        &self.source
    }

    pub fn schema(&self) -> Schema {
        self.source.schema()
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}
