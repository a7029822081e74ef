use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance movement over one calendar day.
///
/// `date` is `None` for the group of undated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: Option<NaiveDate>,
    /// Balance before the day's first entry.
    pub opening: Decimal,
    /// Balance after the day's last entry.
    pub closing: Decimal,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub entry_count: usize,
}

impl DaySummary {
    /// Net movement over the day (`closing - opening`).
    pub fn movement(&self) -> Decimal {
        self.closing.saturating_sub(self.opening)
    }
}
