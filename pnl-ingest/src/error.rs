use std::path::PathBuf;

use thiserror::Error;

/// Batch-level ingestion failures. Per-line parse problems never surface here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("No CSV files found. Please select CSV files.")]
    NoCsvFiles,

    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No transactions found in CSV files. Please check the file format.")]
    NoTransactions,
}

pub type Result<T> = std::result::Result<T, IngestError>;
