//! Statement CSV parser.
//!
//! The first non-blank line is the header row. Its column set picks one
//! [`Schema`] for the whole file and every following line is mapped through
//! that schema. Lines that cannot be mapped (bad amount, no layout) are
//! dropped; parsing never fails.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::header::{HeaderIndex, strip_outer_quote};
use crate::schema::Schema;
use crate::tokenizer::tokenize_line;
use crate::transaction::{SourceFields, Transaction};

/// Label used when a deposit statement has no check/slip column.
const CHECK_OR_SLIP_LABEL: &str = "Check or Slip #";

/// One data line, addressable by canonical header name.
struct Row<'a> {
    values: HashMap<&'a str, String>,
}

impl<'a> Row<'a> {
    fn new(headers: &'a HeaderIndex, line: &str) -> Self {
        let mut cells: Vec<String> = tokenize_line(line)
            .iter()
            .map(|v| strip_outer_quote(v.trim()).to_string())
            .collect();
        // Exporters sometimes omit trailing blank columns.
        cells.resize(headers.len(), String::new());

        let values = headers
            .headers()
            .iter()
            .map(String::as_str)
            .zip(cells)
            .collect();
        Self { values }
    }

    fn get(&self, header: &str) -> &str {
        self.values.get(header).map(String::as_str).unwrap_or("")
    }

    /// Value of the column `name` resolves to, falling back to `fallback`
    /// as a literal header name.
    fn lookup(&self, headers: &HeaderIndex, name: &str, fallback: &str) -> &str {
        self.get(headers.resolve(name).unwrap_or(fallback))
    }
}

/// Parse a statement amount: thousands separators removed, surrounding
/// whitespace ignored. Non-finite or empty input is rejected.
///
/// The whole value must be a number: `12.50 USD` or `$12` return `None`
/// rather than a prefix parse, so such rows are dropped, not guessed at.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Split text into trimmed, non-blank logical lines.
fn logical_lines(text: &str) -> Vec<&str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse raw statement text into normalized transactions, in line order.
pub fn parse_statement(text: &str) -> Vec<Transaction> {
    let lines = logical_lines(text);
    if lines.len() < 2 {
        debug!(lines = lines.len(), "statement has no data rows");
        return Vec::new();
    }

    let headers = HeaderIndex::from_raw(&tokenize_line(lines[0]));
    debug!(headers = ?headers.headers(), "parsed header row");

    let Some(schema) = Schema::classify(&headers) else {
        debug!(headers = ?headers.headers(), "no known statement layout; skipping file");
        return Vec::new();
    };
    debug!(schema = schema.label(), "detected statement layout");

    let mut out = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let row = Row::new(&headers, line);
        match map_row(schema, &headers, &row) {
            Some(txn) => {
                trace!(
                    line = idx + 1,
                    description = txn.description(),
                    kind = txn.kind(),
                    amount = txn.amount(),
                    "accepted row"
                );
                out.push(txn);
            }
            None => debug!(line = idx + 1, "skipping row with unparseable amount"),
        }
    }

    debug!(count = out.len(), "parsed statement");
    out
}

fn map_row(schema: Schema, headers: &HeaderIndex, row: &Row<'_>) -> Option<Transaction> {
    match schema {
        Schema::CreditCard => map_credit_card(headers, row),
        Schema::DepositAccount => map_deposit_account(headers, row),
        Schema::Generic => map_generic(headers, row),
    }
}

fn map_credit_card(headers: &HeaderIndex, row: &Row<'_>) -> Option<Transaction> {
    let amount = parse_amount(row.lookup(headers, "amount", "Amount"))?;
    let transaction_date = row.lookup(headers, "transaction date", "Transaction Date");
    let post_date = row.lookup(headers, "post date", "Post Date");
    let date = if transaction_date.is_empty() { post_date } else { transaction_date };

    Some(Transaction::new(
        row.lookup(headers, "description", "Description"),
        row.lookup(headers, "type", "Type"),
        amount,
        date,
        SourceFields::CreditCard {
            transaction_date: transaction_date.to_string(),
            post_date: post_date.to_string(),
            category: row.lookup(headers, "category", "Category").to_string(),
            memo: row.lookup(headers, "memo", "Memo").to_string(),
        },
    ))
}

fn map_deposit_account(headers: &HeaderIndex, row: &Row<'_>) -> Option<Transaction> {
    let amount = parse_amount(row.lookup(headers, "amount", "Amount"))?;
    let posting_date = row.lookup(headers, "posting date", "Posting Date");
    let check_or_slip_key = headers
        .headers()
        .iter()
        .find(|h| {
            let lower = h.to_lowercase();
            lower.contains("check") || lower.contains("slip")
        })
        .map(String::as_str)
        .unwrap_or(CHECK_OR_SLIP_LABEL);

    Some(Transaction::new(
        row.lookup(headers, "description", "Description"),
        row.lookup(headers, "type", "Type"),
        amount,
        posting_date,
        SourceFields::DepositAccount {
            details: row.lookup(headers, "details", "Details").to_string(),
            posting_date: posting_date.to_string(),
            balance: row.lookup(headers, "balance", "Balance").to_string(),
            check_or_slip: row.get(check_or_slip_key).to_string(),
        },
    ))
}

fn map_generic(headers: &HeaderIndex, row: &Row<'_>) -> Option<Transaction> {
    let amount = parse_amount(row.lookup(headers, "amount", "Amount"))?;
    let date = headers.first_containing("date").map(|h| row.get(h)).unwrap_or("");
    let description = row.get(headers.first_containing("description").unwrap_or("Description"));

    Some(Transaction::new(
        description,
        row.lookup(headers, "type", "Type"),
        amount,
        date,
        SourceFields::Generic,
    ))
}
