//! Terminal formatting for amounts, dates and the transaction table.

use chrono::NaiveDate;
use pnl_ingest::Transaction;

const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];
const DESCRIPTION_WIDTH: usize = 40;

/// `-$1,234.56` style amount.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{:02}", cents % 100)
}

/// Display a statement date as MM/DD/YYYY when it parses; otherwise verbatim.
pub fn display_date(raw: &str) -> String {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn print_table(rows: &[&Transaction], symbol: &str) {
    println!(
        "{:<10}  {:<w$}  {:<16}  {:>14}",
        "Date",
        "Description",
        "Type",
        "Amount",
        w = DESCRIPTION_WIDTH
    );
    println!("{}", "-".repeat(10 + 2 + DESCRIPTION_WIDTH + 2 + 16 + 2 + 14));
    for t in rows {
        println!(
            "{:<10}  {:<w$}  {:<16}  {:>14}",
            display_date(t.date()),
            clip(t.description(), DESCRIPTION_WIDTH),
            clip(t.kind(), 16),
            format_currency(t.amount(), symbol),
            w = DESCRIPTION_WIDTH
        );
    }
}
