//! `taskprime-client`
//!
//! **Responsibility:** the shared fetch + transform pipeline behind every view.
//!
//! This crate provides:
//! - Backend endpoints and their response envelopes
//! - The `LedgerSource` fetch boundary (file-backed and in-memory sources)
//! - An explicit screen state machine (`Idle -> Loading -> Loaded | Failed`)
//! - Pure view transforms over the domain crates

pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod screen;
pub mod source;
pub mod view;

pub use config::ClientConfig;
pub use endpoint::{Endpoint, LedgerBook};
pub use envelope::{Envelope, decode_envelope};
pub use error::{Alert, ClientError};
pub use screen::{Screen, ScreenState, Ticket};
pub use source::{FileSource, InMemorySource, LedgerSource};
pub use view::{LedgerView, cash_book_view, ledger_view, party_view, report_view};
