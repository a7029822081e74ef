use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taskprime_core::{coerce_amount_field, first_present, text_field};
use taskprime_ledger::{AccountKind, compute_net_balance};

/// Which party listing a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    /// Receivable parties derived from master debit/credit totals.
    Debtor,
    /// Receivable parties whose balance the backend precomputes.
    Customer,
    /// Payable parties.
    Supplier,
}

impl PartyKind {
    pub fn account_kind(self) -> AccountKind {
        match self {
            PartyKind::Debtor => AccountKind::Debtor,
            PartyKind::Customer => AccountKind::Customer,
            PartyKind::Supplier => AccountKind::Supplier,
        }
    }

    /// Whether a party with this balance belongs in the listing.
    ///
    /// Debtors are listed only while they owe something, suppliers while the
    /// account is not settled, customers always.
    pub fn is_listed(self, balance: Decimal) -> bool {
        match self {
            PartyKind::Debtor => balance > Decimal::ZERO,
            PartyKind::Supplier => !balance.is_zero(),
            PartyKind::Customer => true,
        }
    }
}

/// One row of a party listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySummary {
    pub code: Option<String>,
    pub name: String,
    pub place: String,
    pub phone: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
}

impl PartySummary {
    /// Build a summary from a backend party row.
    ///
    /// A precomputed `balance` field wins; otherwise the balance is derived
    /// from debit/credit under the kind's sign convention.
    pub fn from_record(kind: PartyKind, row: &Value) -> Self {
        let debit = coerce_amount_field("debit", first_present(row, &["debit", "master_debit"]));
        let credit = coerce_amount_field("credit", first_present(row, &["credit", "master_credit"]));
        let balance = match first_present(row, &["balance"]) {
            Value::Null => compute_net_balance(kind.account_kind(), debit, credit),
            precomputed => coerce_amount_field("balance", precomputed),
        };

        Self {
            code: text_field(row, &["code", "id"]),
            name: text_field(row, &["name"])
                .map(|n| normalize_display_name(&n))
                .unwrap_or_else(|| "-".to_string()),
            place: text_field(row, &["place"]).unwrap_or_else(|| "-".to_string()),
            phone: text_field(row, &["phone", "phone2"]).unwrap_or_else(|| "-".to_string()),
            debit,
            credit,
            balance,
        }
    }

    /// Case-insensitive substring match over name, place and phone.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.place, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Normalize a backend party name for display.
///
/// Drops one leading parenthesised tag (`"(A12) ACME"`), trims, and title-cases
/// every word. An empty result becomes `"-"`.
pub fn normalize_display_name(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let without_tag = match trimmed.strip_prefix('(').and_then(|rest| rest.split_once(')')) {
        Some((_, rest)) => rest,
        None => trimmed,
    };

    let mut out = String::with_capacity(without_tag.len());
    let mut at_word_start = true;
    for c in without_tag.trim().chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !is_word;
    }

    if out.is_empty() { "-".to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn names_lose_their_tag_and_are_title_cased() {
        assert_eq!(normalize_display_name("(S001) CRAFT SUPER MARKET"), "Craft Super Market");
        assert_eq!(normalize_display_name("  in and out "), "In And Out");
        assert_eq!(normalize_display_name("O'BRIEN & SONS"), "O'Brien & Sons");
        assert_eq!(normalize_display_name("(TAG)"), "-");
        assert_eq!(normalize_display_name("(unclosed ACME"), "(Unclosed Acme");
    }

    #[test]
    fn debtor_balance_comes_from_master_totals() {
        let row = json!({
            "code": "00918",
            "name": "ARUN KUMAR",
            "place": "KALPETTA",
            "phone2": "9946545535",
            "master_debit": "1500.00",
            "master_credit": 250
        });

        let party = PartySummary::from_record(PartyKind::Debtor, &row);
        assert_eq!(party.code.as_deref(), Some("00918"));
        assert_eq!(party.name, "Arun Kumar");
        assert_eq!(party.phone, "9946545535");
        assert_eq!(party.balance, dec!(1250));
        assert!(PartyKind::Debtor.is_listed(party.balance));
    }

    #[test]
    fn supplier_balance_is_credit_normal() {
        let row = json!({"id": 7, "name": "ACME", "debit": 100, "credit": "40.5"});
        let party = PartySummary::from_record(PartyKind::Supplier, &row);
        assert_eq!(party.code.as_deref(), Some("7"));
        assert_eq!(party.balance, dec!(-59.5));
        assert!(PartyKind::Supplier.is_listed(party.balance));
        assert!(!PartyKind::Supplier.is_listed(Decimal::ZERO));
    }

    #[test]
    fn precomputed_balance_wins() {
        let row = json!({"code": "C1", "name": "X", "balance": "-12.40", "debit": 999});
        let party = PartySummary::from_record(PartyKind::Customer, &row);
        assert_eq!(party.balance, dec!(-12.40));
        assert!(PartyKind::Customer.is_listed(party.balance));
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let party = PartySummary::from_record(PartyKind::Customer, &json!({}));
        assert_eq!(party.code, None);
        assert_eq!(party.name, "-");
        assert_eq!(party.place, "-");
        assert_eq!(party.phone, "-");
        assert_eq!(party.balance, Decimal::ZERO);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let party = PartySummary::from_record(
            PartyKind::Customer,
            &json!({"name": "IN AND OUT", "place": "FRAZER TOWN", "phone": "25448355"}),
        );
        assert!(party.matches("frazer"));
        assert!(party.matches("In And"));
        assert!(party.matches("5448"));
        assert!(party.matches("  "));
        assert!(!party.matches("kalpetta"));
    }
}
