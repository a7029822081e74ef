use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taskprime_core::{coerce_amount_field, first_present, parse_entry_date, text_field};

/// One dated debit/credit line of an account ledger (immutable once built).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Calendar day of the entry; `None` when missing or unreadable.
    pub date: Option<NaiveDate>,
    pub debit: Decimal,
    pub credit: Decimal,
    pub particulars: String,
    pub narration: String,
    /// Backend voucher number, the secondary sort key within a day.
    pub voucher_no: Option<i64>,
}

impl LedgerEntry {
    pub fn new(date: Option<NaiveDate>, debit: Decimal, credit: Decimal) -> Self {
        Self {
            date,
            debit,
            credit,
            particulars: String::new(),
            narration: String::new(),
            voucher_no: None,
        }
    }

    pub fn with_voucher(mut self, voucher_no: i64) -> Self {
        self.voucher_no = Some(voucher_no);
        self
    }

    /// Build an entry from a backend ledger row, coercing every field.
    ///
    /// Unreadable amounts become zero, unreadable dates become `None`.
    pub fn from_record(row: &Value) -> Self {
        let raw_date = text_field(row, &["entry_date"]);
        let date = raw_date.as_deref().and_then(parse_entry_date);
        if date.is_none() {
            tracing::debug!(entry_date = ?raw_date, "ledger row without a readable date");
        }

        Self {
            date,
            debit: coerce_amount_field("debit", first_present(row, &["debit"])),
            credit: coerce_amount_field("credit", first_present(row, &["credit"])),
            particulars: text_field(row, &["particulars", "account_name"]).unwrap_or_default(),
            narration: text_field(row, &["narration"]).unwrap_or_default(),
            voucher_no: voucher_number(first_present(row, &["voucher_no"])),
        }
    }

    /// Effect of this entry on a debit-normal balance.
    pub fn net_effect(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }

    /// Chronological key: undated first, then by day, then by voucher.
    pub(crate) fn sort_key(&self) -> (Option<NaiveDate>, Option<i64>) {
        (self.date, self.voucher_no)
    }
}

fn voucher_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a batch of backend rows into entries (input order preserved).
pub fn entries_from_records(rows: &[Value]) -> Vec<LedgerEntry> {
    rows.iter().map(LedgerEntry::from_record).collect()
}
