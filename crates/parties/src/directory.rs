//! Sorted party listings with search and totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::party::{PartyKind, PartySummary};

/// Count and summed balance of a set of parties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTotals {
    pub count: usize,
    pub total_balance: Decimal,
}

/// Totals over any subset of a listing (e.g. search results).
pub fn totals_of<'a, I>(parties: I) -> PartyTotals
where
    I: IntoIterator<Item = &'a PartySummary>,
{
    parties.into_iter().fold(PartyTotals::default(), |acc, p| PartyTotals {
        count: acc.count + 1,
        total_balance: acc.total_balance.saturating_add(p.balance),
    })
}

/// A party listing of one kind, sorted by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyDirectory {
    kind: PartyKind,
    parties: Vec<PartySummary>,
}

impl PartyDirectory {
    /// Build the listing from backend rows, dropping parties the kind does not list.
    pub fn from_records(kind: PartyKind, rows: &[Value]) -> Self {
        let mut parties: Vec<PartySummary> = rows
            .iter()
            .map(|row| PartySummary::from_record(kind, row))
            .filter(|p| kind.is_listed(p.balance))
            .collect();
        parties.sort_by_cached_key(|p| p.name.to_lowercase());

        tracing::debug!(?kind, rows = rows.len(), listed = parties.len(), "built party directory");

        Self { kind, parties }
    }

    pub fn kind(&self) -> PartyKind {
        self.kind
    }

    pub fn parties(&self) -> &[PartySummary] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    /// Parties matching `query` (see [`PartySummary::matches`]), in listing order.
    pub fn search(&self, query: &str) -> Vec<&PartySummary> {
        self.parties.iter().filter(|p| p.matches(query)).collect()
    }

    pub fn totals(&self) -> PartyTotals {
        totals_of(&self.parties)
    }
}
