//! Parties module (debtors, customers and suppliers with their balances).
//!
//! Turns backend party rows into sorted, searchable listings. Pure logic only
//! (no IO, no HTTP, no storage).

pub mod directory;
pub mod party;

pub use directory::{PartyDirectory, PartyTotals, totals_of};
pub use party::{PartyKind, PartySummary, normalize_display_name};
