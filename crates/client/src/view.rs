//! Pure transforms from decoded envelopes to view data.
//!
//! One transform per kind of view; each is what a [`crate::Screen`] applies to
//! a successfully decoded body.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use taskprime_core::{AccountCode, ClientId};
use taskprime_ledger::{
    BalancePoint, DaySummary, RunningBalances, Totals, aggregate_totals, compute_running_balances,
    entries_from_records,
};
use taskprime_parties::{PartyDirectory, PartyKind};
use taskprime_reports::{CashBook, ReportKind, ReportSummary};

use crate::endpoint::LedgerBook;
use crate::envelope::Envelope;
use crate::error::ClientError;

/// A ledger scoped to one day (or all days), with balances over the full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerView {
    pub book: LedgerBook,
    pub account: AccountCode,
    pub opening_balance: Decimal,
    pub closing_balance: Decimal,
    /// The selected day, or the latest day present when none was selected.
    pub day: Option<DaySummary>,
    /// Visible points, newest first.
    pub visible: Vec<BalancePoint>,
    /// Totals over the visible points.
    pub totals: Totals,
    /// `totals` netted under the book's sign convention.
    pub net: Decimal,
}

/// Build a ledger view from decoded rows.
///
/// `closing_balance` anchors the reconstruction; `day` narrows what is visible
/// without changing any balance.
pub fn ledger_view(
    book: LedgerBook,
    account: AccountCode,
    envelope: Envelope,
    closing_balance: Decimal,
    day: Option<NaiveDate>,
) -> LedgerView {
    let entries = entries_from_records(&envelope.rows);
    let balances: RunningBalances = compute_running_balances(&entries, closing_balance);

    let visible: Vec<BalancePoint> = match day {
        Some(date) => balances.on_date(date).rev().cloned().collect(),
        None => balances.newest_first().cloned().collect(),
    };
    let totals = aggregate_totals(visible.iter().map(|p| &p.entry));
    let summary = match day {
        Some(date) => Some(balances.day_summary(date)),
        None => balances.latest_day(),
    };

    tracing::debug!(
        book = book.as_str(),
        %account,
        entries = entries.len(),
        visible = visible.len(),
        opening = %balances.opening_balance(),
        "built ledger view"
    );

    LedgerView {
        book,
        account,
        opening_balance: balances.opening_balance(),
        closing_balance: balances.closing_balance(),
        day: summary,
        net: totals.net(book.account_kind().convention()),
        visible,
        totals,
    }
}

pub fn party_view(kind: PartyKind, envelope: Envelope) -> PartyDirectory {
    PartyDirectory::from_records(kind, &envelope.rows)
}

/// Build a report summary.
///
/// Reports that must echo the requesting client are rejected when the echoed
/// id is missing or different.
pub fn report_view(
    kind: ReportKind,
    client: Option<&ClientId>,
    envelope: Envelope,
) -> Result<ReportSummary, ClientError> {
    if kind.requires_client_echo() {
        let expected = client.map(ClientId::as_str);
        if expected.is_none() || envelope.client_id.as_deref() != expected {
            return Err(ClientError::Rejected(format!(
                "{kind}: client id mismatch (expected {:?}, got {:?})",
                expected, envelope.client_id
            )));
        }
    }
    Ok(ReportSummary::from_rows(kind, &envelope.rows))
}

pub fn cash_book_view(envelope: Envelope) -> CashBook {
    CashBook::from_rows(&envelope.rows)
}
