//! Day scoping and totals over (possibly filtered) entry subsets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::convention::BalanceConvention;
use crate::entry::LedgerEntry;

/// Plain debit/credit sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

impl Totals {
    /// Net of the totals under the given sign convention.
    pub fn net(&self, convention: BalanceConvention) -> Decimal {
        convention.net(self.total_debit, self.total_credit)
    }
}

/// Entries dated exactly `target` (day resolution). Undated entries never match.
pub fn filter_by_date(entries: &[LedgerEntry], target: NaiveDate) -> Vec<&LedgerEntry> {
    entries.iter().filter(|e| e.date == Some(target)).collect()
}

/// Sum debits and credits over `entries`.
pub fn aggregate_totals<'a, I>(entries: I) -> Totals
where
    I: IntoIterator<Item = &'a LedgerEntry>,
{
    entries.into_iter().fold(Totals::default(), |acc, e| Totals {
        total_debit: acc.total_debit.saturating_add(e.debit),
        total_credit: acc.total_credit.saturating_add(e.credit),
    })
}
