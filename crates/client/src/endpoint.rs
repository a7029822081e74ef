//! Backend endpoints.
//!
//! Paths are relative to the API base URL (see [`crate::ClientConfig`]).

use serde::{Deserialize, Serialize};

use taskprime_core::{AccountCode, ClientId};
use taskprime_ledger::AccountKind;
use taskprime_parties::PartyKind;
use taskprime_reports::ReportKind;

/// Which per-account ledger endpoint to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerBook {
    Customer,
    Bank,
    Cash,
}

impl LedgerBook {
    pub fn account_kind(self) -> AccountKind {
        match self {
            LedgerBook::Customer => AccountKind::Customer,
            LedgerBook::Bank => AccountKind::Bank,
            LedgerBook::Cash => AccountKind::Cash,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedgerBook::Customer => "customer",
            LedgerBook::Bank => "bank",
            LedgerBook::Cash => "cash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ledger { book: LedgerBook, account: AccountCode },
    Parties(PartyKind),
    CashBook,
    Report { kind: ReportKind, client: Option<ClientId> },
}

impl Endpoint {
    /// Path (with query) relative to the API base.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Ledger { book, account } => {
                let base = match book {
                    LedgerBook::Customer => "get-ledger-details",
                    LedgerBook::Bank => "get-bank-ledger-details/",
                    LedgerBook::Cash => "get-cash-ledger-details/",
                };
                format!("{base}?account_code={account}")
            }
            Endpoint::Parties(kind) => match kind {
                PartyKind::Debtor => "get-debtors-data/",
                PartyKind::Customer => "debtors/get-debtors/",
                // sic: the backend route is misspelled
                PartyKind::Supplier => "suppiers_api/suppliers/",
            }
            .to_string(),
            Endpoint::CashBook => "get-cash-book-data/".to_string(),
            Endpoint::Report { kind, client } => {
                let base = match kind {
                    ReportKind::SalesToday => "salestoday/",
                    ReportKind::ItemReport => "get-item-report/",
                    ReportKind::PurchaseToday => "purchasetoday/",
                    ReportKind::PurchaseMonth => "purchasemonth/",
                    ReportKind::PurchaseOverall => "purchaseoverall/",
                    ReportKind::SalesReturn => "sales-return/get-data/",
                };
                match client {
                    Some(client) => format!("{base}?client_id={client}"),
                    None => base.to_string(),
                }
            }
        }
    }

    /// Absolute URL under `api_base`.
    pub fn url(&self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path())
    }

    /// File-safe key naming the saved response for this endpoint.
    pub fn key(&self) -> String {
        match self {
            Endpoint::Ledger { book, account } => {
                format!("ledger-{}-{}", book.as_str(), sanitize(account.as_str()))
            }
            Endpoint::Parties(kind) => match kind {
                PartyKind::Debtor => "parties-debtors",
                PartyKind::Customer => "parties-customers",
                PartyKind::Supplier => "parties-suppliers",
            }
            .to_string(),
            Endpoint::CashBook => "cash-book".to_string(),
            Endpoint::Report { kind, .. } => format!("report-{kind}"),
        }
    }
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.key())
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AccountCode {
        s.parse().unwrap()
    }

    #[test]
    fn ledger_endpoints_carry_the_account_code() {
        let ep = Endpoint::Ledger { book: LedgerBook::Bank, account: code("1201") };
        assert_eq!(ep.path(), "get-bank-ledger-details/?account_code=1201");
        assert_eq!(
            ep.url("https://taskprime.app/api/"),
            "https://taskprime.app/api/get-bank-ledger-details/?account_code=1201"
        );
        assert_eq!(ep.key(), "ledger-bank-1201");
    }

    #[test]
    fn keys_are_file_safe() {
        let ep = Endpoint::Ledger { book: LedgerBook::Customer, account: code("A/01 x") };
        assert_eq!(ep.key(), "ledger-customer-A_01_x");
        assert_eq!(ep.to_string(), ep.key());
    }

    #[test]
    fn reports_scope_by_client() {
        let ep = Endpoint::Report {
            kind: ReportKind::PurchaseMonth,
            client: Some("SYSMAC".parse().unwrap()),
        };
        assert_eq!(ep.path(), "purchasemonth/?client_id=SYSMAC");
        assert_eq!(ep.key(), "report-purchase-month");

        let unscoped = Endpoint::Report { kind: ReportKind::SalesToday, client: None };
        assert_eq!(unscoped.path(), "salestoday/");
    }

    #[test]
    fn party_and_book_kinds_map_to_accounts() {
        assert_eq!(Endpoint::Parties(PartyKind::Supplier).path(), "suppiers_api/suppliers/");
        assert_eq!(Endpoint::CashBook.key(), "cash-book");
        assert_eq!(LedgerBook::Cash.account_kind(), AccountKind::Cash);
    }
}
