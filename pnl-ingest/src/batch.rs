//! Multi-file ingestion.
//!
//! Every file is read concurrently, then parsed and concatenated in the
//! order it was submitted. One failed read fails the whole batch; bytes
//! that are not valid UTF-8 are replaced, never treated as a read failure.

use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::error::{IngestError, Result};
use crate::statement::parse_statement;
use crate::transaction::Transaction;

/// A statement file whose contents are already in memory.
#[derive(Debug, Clone)]
pub struct StatementFile {
    pub name: String,
    pub text: String,
}

impl StatementFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Combined result of a batch.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub transactions: Vec<Transaction>,
    /// Files that had content and were parsed (even if they yielded nothing).
    pub files_loaded: usize,
}

/// True if the file name carries a `.csv` extension (any case).
pub fn is_csv_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

fn is_csv_path(path: &Path) -> bool {
    path.file_name()
        .map(|n| is_csv_name(&n.to_string_lossy()))
        .unwrap_or(false)
}

/// Parse already-read files and concatenate their transactions in order.
pub fn parse_batch(files: impl IntoIterator<Item = StatementFile>) -> Result<Batch> {
    let mut batch = Batch::default();

    for file in files {
        if file.text.trim().is_empty() {
            warn!(file = %file.name, "file is empty");
            continue;
        }
        let parsed = parse_statement(&file.text);
        info!(file = %file.name, count = parsed.len(), "parsed statement file");
        batch.transactions.extend(parsed);
        batch.files_loaded += 1;
    }

    if batch.transactions.is_empty() {
        return Err(IngestError::NoTransactions);
    }
    Ok(batch)
}

/// Decode file contents, replacing invalid UTF-8 sequences (legacy
/// Windows-1252 exports) instead of rejecting the file.
fn decode_text(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(file = %path.display(), "file is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Read and parse every CSV file among `paths`.
///
/// Non-CSV names are dropped before any read is issued.
pub async fn load_batch(paths: &[PathBuf]) -> Result<Batch> {
    let csv_paths: Vec<&PathBuf> = paths.iter().filter(|p| is_csv_path(p)).collect();
    if csv_paths.is_empty() {
        return Err(IngestError::NoCsvFiles);
    }
    if csv_paths.len() < paths.len() {
        warn!(skipped = paths.len() - csv_paths.len(), "ignoring non-CSV files");
    }

    let reads = csv_paths.into_iter().map(|path| async move {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| IngestError::Read {
                path: path.clone(),
                source,
            })?;
        let text = decode_text(path, bytes);
        Ok::<_, IngestError>(StatementFile::new(path.display().to_string(), text))
    });
    let files = try_join_all(reads).await?;

    parse_batch(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv_name_ignores_case() {
        assert!(is_csv_name("activity.CSV"));
        assert!(is_csv_name("a.csv"));
        assert!(!is_csv_name("a.csv.txt"));
        assert!(!is_csv_name("statement.pdf"));
    }

    #[test]
    fn test_decode_text_replaces_invalid_bytes() {
        let text = decode_text(Path::new("card.csv"), b"Caf\xE9,ok".to_vec());
        assert_eq!(text, "Caf\u{FFFD},ok");
        assert_eq!(decode_text(Path::new("card.csv"), "Café".as_bytes().to_vec()), "Café");
    }

    #[test]
    fn test_empty_file_is_skipped_not_counted() {
        let files = vec![
            StatementFile::new("empty.csv", "   \n"),
            StatementFile::new("ok.csv", "Amount,Type\n5,Fee\n"),
        ];
        let batch = parse_batch(files).unwrap();
        assert_eq!(batch.files_loaded, 1);
        assert_eq!(batch.transactions.len(), 1);
    }

    #[test]
    fn test_unrecognized_file_does_not_block_others() {
        let files = vec![
            StatementFile::new("junk.csv", "Foo,Bar\n1,2\n"),
            StatementFile::new("ok.csv", "Amount,Type\n5,Fee\n"),
        ];
        let batch = parse_batch(files).unwrap();
        assert_eq!(batch.files_loaded, 2);
        assert_eq!(batch.transactions.len(), 1);
    }

    #[test]
    fn test_all_empty_is_no_transactions() {
        let files = vec![StatementFile::new("junk.csv", "Foo,Bar\n1,2\n")];
        assert!(matches!(parse_batch(files), Err(IngestError::NoTransactions)));
        assert!(matches!(parse_batch(Vec::new()), Err(IngestError::NoTransactions)));
    }
}
