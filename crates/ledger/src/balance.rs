//! Running-balance reconstruction anchored at a known closing balance.
//!
//! The backend only reports the balance *after* the newest entry, so balances
//! are derived by walking the chronologically sorted entries backwards and
//! undoing each entry's effect:
//!
//! `balance_before(e) = balance_after(e) + credit(e) - debit(e)`
//!
//! Debits increase the balance, credits decrease it. Arithmetic saturates at
//! `Decimal`'s range instead of panicking.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::day::DaySummary;
use crate::entry::LedgerEntry;
use crate::filter::aggregate_totals;

/// An entry together with the balance immediately after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    pub entry: LedgerEntry,
    pub running_balance: Decimal,
}

/// Result of [`compute_running_balances`]: points oldest first plus both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningBalances {
    points: Vec<BalancePoint>,
    opening_balance: Decimal,
    closing_balance: Decimal,
}

/// Sort entries into chronological order in place.
///
/// Undated entries come first, then by day, then by voucher number (entries
/// without a voucher before those with one). The sort is stable, so anything
/// else keeps its relative input order.
pub fn sort_chronologically(entries: &mut [LedgerEntry]) {
    entries.sort_by_key(LedgerEntry::sort_key);
}

/// Compute the running balance of every entry given the closing balance.
///
/// `closing_balance` is the balance immediately after the chronologically
/// latest entry. Input order does not matter.
pub fn compute_running_balances(entries: &[LedgerEntry], closing_balance: Decimal) -> RunningBalances {
    let mut sorted = entries.to_vec();
    sort_chronologically(&mut sorted);

    let mut balances = vec![Decimal::ZERO; sorted.len()];
    let mut after = closing_balance;
    for (i, entry) in sorted.iter().enumerate().rev() {
        balances[i] = after;
        after = after.saturating_sub(entry.debit).saturating_add(entry.credit);
    }

    let points = sorted
        .into_iter()
        .zip(balances)
        .map(|(entry, running_balance)| BalancePoint { entry, running_balance })
        .collect();

    RunningBalances {
        points,
        opening_balance: after,
        closing_balance,
    }
}

impl RunningBalances {
    /// Points in chronological order (oldest first).
    pub fn points(&self) -> &[BalancePoint] {
        &self.points
    }

    /// Points newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &BalancePoint> {
        self.points.iter().rev()
    }

    /// Balance before the very first entry.
    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Balance after the latest entry (the anchor the walk started from).
    pub fn closing_balance(&self) -> Decimal {
        self.closing_balance
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Walk forward from the opening balance, returning the final balance.
    pub fn replay(&self) -> Decimal {
        self.points
            .iter()
            .fold(self.opening_balance, |balance, p| balance.saturating_add(p.entry.net_effect()))
    }

    /// Points whose entry falls on `date`. Undated entries never match.
    pub fn on_date(&self, date: NaiveDate) -> impl DoubleEndedIterator<Item = &BalancePoint> {
        self.points.iter().filter(move |p| p.entry.date == Some(date))
    }

    /// Balance at the start of `date`: after every entry dated strictly earlier.
    ///
    /// Undated entries count as earliest.
    pub fn balance_at_start_of(&self, date: NaiveDate) -> Decimal {
        self.points
            .iter()
            .take_while(|p| p.entry.date < Some(date))
            .last()
            .map_or(self.opening_balance, |p| p.running_balance)
    }

    /// Opening/closing/totals for a single day.
    ///
    /// A day without entries has zero totals and `opening == closing`.
    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        let opening = self.balance_at_start_of(date);
        let day: Vec<&BalancePoint> = self.on_date(date).collect();
        let totals = aggregate_totals(day.iter().map(|p| &p.entry));
        let closing = day.last().map_or(opening, |p| p.running_balance);

        DaySummary {
            date: Some(date),
            opening,
            closing,
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
            entry_count: day.len(),
        }
    }

    /// One summary per distinct day present, oldest first.
    ///
    /// Undated entries form their own leading group with `date: None`.
    pub fn day_summaries(&self) -> Vec<DaySummary> {
        let mut summaries = Vec::new();
        let mut opening = self.opening_balance;

        for group in self.points.chunk_by(|a, b| a.entry.date == b.entry.date) {
            let totals = aggregate_totals(group.iter().map(|p| &p.entry));
            let closing = group.last().map_or(opening, |p| p.running_balance);
            summaries.push(DaySummary {
                date: group[0].entry.date,
                opening,
                closing,
                total_debit: totals.total_debit,
                total_credit: totals.total_credit,
                entry_count: group.len(),
            });
            opening = closing;
        }

        summaries
    }

    /// Summary of the newest day present, if any.
    pub fn latest_day(&self) -> Option<DaySummary> {
        self.day_summaries().pop()
    }
}
