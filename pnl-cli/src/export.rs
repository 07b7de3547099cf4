use anyhow::{Context, Result};
use pnl_ingest::Transaction;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    amount: f64,
    schema: &'static str,
}

impl<'a> From<&'a Transaction> for ExportRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            date: t.date(),
            description: t.description(),
            kind: t.kind(),
            amount: t.amount(),
            schema: t.schema().label(),
        }
    }
}

/// Write transactions as `date,description,type,amount,schema` CSV.
pub fn write_csv(rows: &[&Transaction], out: &Path) -> Result<usize> {
    let mut wtr =
        csv::Writer::from_path(out).with_context(|| format!("create {}", out.display()))?;
    for t in rows {
        wtr.serialize(ExportRow::from(*t))
            .with_context(|| format!("write {}", out.display()))?;
    }
    wtr.flush().with_context(|| format!("flush {}", out.display()))?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnl_ingest::parse_statement;
    use tempfile::TempDir;

    #[test]
    fn test_export_quotes_commas_and_keeps_order() {
        let txns = parse_statement(
            "Amount,Type,Description,Date\n-3.5,Fee,\"Wire, intl\",2024-01-02\n10,Refund,Shop,2024-01-03\n",
        );
        let rows: Vec<&Transaction> = txns.iter().collect();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.csv");
        assert_eq!(write_csv(&rows, &out).unwrap(), 2);

        let written = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "date,description,type,amount,schema");
        assert_eq!(lines[1], "2024-01-02,\"Wire, intl\",Fee,-3.5,generic");
        assert_eq!(lines[2], "2024-01-03,Shop,Refund,10.0,generic");
    }
}
