//! Sign conventions per account kind.
//!
//! The backend's account kinds do not share one natural sign: receivables grow
//! with debits, payables and the bank/cash book views grow with credits. Each
//! kind carries exactly one convention and the sign is always kept.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the ledger increases the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceConvention {
    /// `debit - credit`
    DebitNormal,
    /// `credit - debit`
    CreditNormal,
}

impl BalanceConvention {
    pub fn net(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            BalanceConvention::DebitNormal => debit.saturating_sub(credit),
            BalanceConvention::CreditNormal => credit.saturating_sub(debit),
        }
    }
}

/// Documented account kinds exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Debtor,
    Customer,
    Supplier,
    Bank,
    Cash,
}

impl AccountKind {
    pub fn convention(self) -> BalanceConvention {
        match self {
            AccountKind::Debtor | AccountKind::Customer => BalanceConvention::DebitNormal,
            AccountKind::Supplier | AccountKind::Bank | AccountKind::Cash => {
                BalanceConvention::CreditNormal
            }
        }
    }
}

/// Net balance of an account of `kind` from its debit and credit totals.
pub fn compute_net_balance(kind: AccountKind, debit: Decimal, credit: Decimal) -> Decimal {
    kind.convention().net(debit, credit)
}
