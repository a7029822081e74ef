use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taskprime_core::{coerce_amount_field, first_present, parse_entry_date, text_field};

/// Report views offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    SalesToday,
    ItemReport,
    PurchaseToday,
    PurchaseMonth,
    PurchaseOverall,
    SalesReturn,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::SalesToday,
        ReportKind::ItemReport,
        ReportKind::PurchaseToday,
        ReportKind::PurchaseMonth,
        ReportKind::PurchaseOverall,
        ReportKind::SalesReturn,
    ];

    /// Row field holding the amount the report totals.
    pub fn amount_field(self) -> &'static str {
        match self {
            ReportKind::SalesReturn => "net",
            _ => "nettotal",
        }
    }

    /// Whether the backend must echo the requesting client id in the body.
    pub fn requires_client_echo(self) -> bool {
        matches!(self, ReportKind::SalesReturn)
    }

    /// Stable kebab-case name (CLI value, file key).
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::SalesToday => "sales-today",
            ReportKind::ItemReport => "item-report",
            ReportKind::PurchaseToday => "purchase-today",
            ReportKind::PurchaseMonth => "purchase-month",
            ReportKind::PurchaseOverall => "purchase-overall",
            ReportKind::SalesReturn => "sales-return",
        }
    }
}

impl core::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One report line: the coerced figures plus the untouched backend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
    pub invoice_no: Option<String>,
    pub fields: Value,
}

impl ReportRow {
    pub fn from_record(kind: ReportKind, row: &Value) -> Self {
        let field = kind.amount_field();
        Self {
            amount: coerce_amount_field(field, first_present(row, &[field])),
            date: text_field(row, &["date"]).as_deref().and_then(parse_entry_date),
            invoice_no: text_field(row, &["invno", "invoice_no"]),
            fields: row.clone(),
        }
    }
}

/// Rows of one report with their total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub kind: ReportKind,
    pub rows: Vec<ReportRow>,
    pub total: Decimal,
}

impl ReportSummary {
    pub fn from_rows(kind: ReportKind, rows: &[Value]) -> Self {
        let rows: Vec<ReportRow> = rows.iter().map(|r| ReportRow::from_record(kind, r)).collect();
        let total = rows
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount));

        tracing::debug!(%kind, rows = rows.len(), %total, "built report summary");

        Self { kind, rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn sales_total_sums_nettotal() {
        let rows = vec![
            json!({"invno": 101, "date": "2024-06-01", "nettotal": "1200.50"}),
            json!({"invno": 102, "date": "2024-06-01", "nettotal": 99.5}),
            json!({"invno": 103, "date": "2024-06-01"}),
        ];
        let summary = ReportSummary::from_rows(ReportKind::SalesToday, &rows);
        assert_eq!(summary.total, dec!(1300));
        assert_eq!(summary.rows[0].invoice_no.as_deref(), Some("101"));
        assert_eq!(summary.rows[2].amount, Decimal::ZERO);
    }

    #[test]
    fn sales_returns_sum_net() {
        let rows = vec![
            json!({"invno": "SR-1", "date": "2024-06-03T10:00:00", "net": 40, "nettotal": 999}),
            json!({"invno": "SR-2", "net": "10.25"}),
        ];
        let summary = ReportSummary::from_rows(ReportKind::SalesReturn, &rows);
        assert_eq!(summary.total, dec!(50.25));
        assert_eq!(summary.rows[0].date, NaiveDate::from_ymd_opt(2024, 6, 3));
        assert_eq!(summary.rows[1].date, None);
    }

    #[test]
    fn kinds_round_trip_through_their_names() {
        for kind in ReportKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, json!(kind.as_str()));
        }
        assert!(ReportSummary::from_rows(ReportKind::PurchaseMonth, &[]).is_empty());
    }
}
