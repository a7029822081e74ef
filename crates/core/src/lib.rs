//! `taskprime-core`: shared building blocks for the ledger toolkit.
//!
//! This crate contains **pure** primitives (no IO): the error model, account
//! identifiers, and the coercion rules that turn loosely-typed backend fields
//! into typed values.

pub mod amount;
pub mod date;
pub mod error;
pub mod id;
pub mod record;

pub use amount::{MAX_AMOUNT, coerce_amount, coerce_amount_field};
pub use date::parse_entry_date;
pub use error::{DomainError, DomainResult};
pub use id::{AccountCode, ClientId};
pub use record::{first_present, text_field};
