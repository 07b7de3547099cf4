//! Statement layout detection from the header row.

use serde::{Deserialize, Serialize};

use crate::header::HeaderIndex;

/// Known statement column layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schema {
    /// Card export: `Transaction Date`, `Post Date`, `Description`,
    /// `Category`, `Type`, `Amount`, `Memo`.
    #[serde(rename = "credit-card")]
    CreditCard,
    /// Checking/savings export: `Details`, `Posting Date`, `Description`,
    /// `Amount`, `Type`, `Balance`, `Check or Slip #`.
    #[serde(rename = "deposit-account")]
    DepositAccount,
    /// Anything else carrying at least `Amount` and `Type`.
    #[serde(rename = "generic")]
    Generic,
}

impl Schema {
    /// Pick a schema for a header set, or `None` if no layout applies.
    pub fn classify(headers: &HeaderIndex) -> Option<Schema> {
        if headers.contains("transaction date") && headers.contains("post date") {
            Some(Schema::CreditCard)
        } else if headers.contains("posting date") && headers.contains("details") {
            Some(Schema::DepositAccount)
        } else if headers.contains("amount") && headers.contains("type") {
            Some(Schema::Generic)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Schema::CreditCard => "credit-card",
            Schema::DepositAccount => "deposit-account",
            Schema::Generic => "generic",
        }
    }
}
