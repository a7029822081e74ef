//! Reports module (sales, purchase and sales-return summaries, cash book).
//!
//! Pure transforms over already-fetched backend rows.

pub mod cash_book;
pub mod report;

pub use cash_book::{CashBook, CashBookAccount};
pub use report::{ReportKind, ReportRow, ReportSummary};
