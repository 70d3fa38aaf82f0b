//! Append-only transaction ledger with spending aggregation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::merchant::MerchantDirectory;

/// Status of a recorded transaction. Failed payment attempts are never
/// recorded, so `Completed` is the only state a ledger entry can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A completed payment, immutable once recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id, `txn_` prefixed
    pub id: String,
    /// Merchant name as typed by the caller, not normalized
    pub merchant: String,
    /// Amount in USD
    pub amount: f64,
    /// Local timestamp, "YYYY-MM-DD HH:MM:SS"
    pub date: String,
    pub status: TransactionStatus,
    /// Card display string, e.g. "Visa ****1234"
    pub card_info: String,
}

/// Ordered record of completed transactions.
///
/// Entries are appended in chronological order and never removed; "recent"
/// queries read from the tail.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. No dedup, no size cap.
    pub fn record(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// The last `limit` transactions, most recent first. A `limit` past the
    /// ledger size returns everything; `limit == 0` returns nothing.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Sum of all recorded amounts, regardless of merchant category
    pub fn total_spent(&self) -> f64 {
        self.entries.iter().map(|txn| txn.amount).sum()
    }

    /// Spending totals per merchant category, in first-occurrence order.
    ///
    /// Each transaction's merchant is normalized and looked up in the
    /// directory; transactions whose merchant is unknown are left out of
    /// the breakdown (they still count toward [`Ledger::total_spent`]).
    pub fn spending_by_category(&self, merchants: &MerchantDirectory) -> IndexMap<String, f64> {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for txn in &self.entries {
            if let Some(entry) = merchants.lookup(&txn.merchant) {
                *totals.entry(entry.category.clone()).or_insert(0.0) += txn.amount;
            }
        }
        totals
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any transactions have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All transactions in insertion order
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }
}
