//! Cash book listing: one row per bank/cash account with its opening figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taskprime_core::{coerce_amount_field, first_present, text_field};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBookAccount {
    pub code: Option<String>,
    pub name: String,
    pub opening_balance: Decimal,
    /// Raw backend text; the field is not always a date.
    pub opening_date: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
}

impl CashBookAccount {
    pub fn from_record(row: &Value) -> Self {
        Self {
            code: text_field(row, &["code", "id"]),
            name: text_field(row, &["name", "account_name", "bank_name"])
                .unwrap_or_else(|| "-".to_string()),
            opening_balance: coerce_amount_field(
                "opening_balance",
                first_present(row, &["opening_balance", "openingbal", "opening_balance_amount"]),
            ),
            opening_date: text_field(row, &["opening_date", "opening_dt", "date", "created_at"]),
            debit: coerce_amount_field("debit", first_present(row, &["debit", "total_debit", "master_debit"])),
            credit: coerce_amount_field(
                "credit",
                first_present(row, &["credit", "total_credit", "master_credit"]),
            ),
        }
    }

    /// Case-insensitive match over the row's joined text.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {} {} {}",
            self.name,
            self.opening_balance,
            self.opening_date.as_deref().unwrap_or("-"),
            self.debit,
            self.credit
        );
        haystack.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashBook {
    pub accounts: Vec<CashBookAccount>,
}

impl CashBook {
    pub fn from_rows(rows: &[Value]) -> Self {
        let accounts: Vec<CashBookAccount> = rows.iter().map(CashBookAccount::from_record).collect();
        tracing::debug!(accounts = accounts.len(), "built cash book");
        Self { accounts }
    }

    pub fn search(&self, query: &str) -> Vec<&CashBookAccount> {
        self.accounts.iter().filter(|a| a.matches(query)).collect()
    }
}
