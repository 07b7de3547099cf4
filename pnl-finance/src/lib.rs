//! pnl-finance: type filtering, revenue/expense totals and paging over parsed statements

pub mod filter;
pub mod pagination;
pub mod summary;

pub use filter::{TypeFilter, distinct_types};
pub use pagination::{DEFAULT_PAGE_SIZE, page, total_pages};
pub use summary::{Summary, TypeBreakdown};
