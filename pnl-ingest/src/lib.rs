//! pnl-ingest: bank/card CSV statement tokenizing, layout detection and normalization.

pub mod batch;
pub mod error;
pub mod header;
pub mod schema;
pub mod statement;
pub mod tokenizer;
pub mod transaction;

pub use batch::{Batch, StatementFile, is_csv_name, load_batch, parse_batch};
pub use error::IngestError;
pub use header::HeaderIndex;
pub use schema::Schema;
pub use statement::{parse_amount, parse_statement};
pub use tokenizer::tokenize_line;
pub use transaction::{SourceFields, Transaction};
