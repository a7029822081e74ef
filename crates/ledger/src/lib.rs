//! Ledger module (running-balance reconstruction over fetched entries).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod balance;
pub mod convention;
pub mod day;
pub mod entry;
pub mod filter;

pub use balance::{BalancePoint, RunningBalances, compute_running_balances, sort_chronologically};
pub use convention::{AccountKind, BalanceConvention, compute_net_balance};
pub use day::DaySummary;
pub use entry::{LedgerEntry, entries_from_records};
pub use filter::{Totals, aggregate_totals, filter_by_date};
