//! The ordered collection of every recorded transaction.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Transactions ordered newest-inserted first.
///
/// Serializes as a bare JSON array so the stored layout stays a plain list of
/// records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps transactions that are already in newest-first order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Inserts a transaction ahead of every existing one.
    pub fn push_front(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The `limit` most recently inserted transactions.
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn max_id(&self) -> Option<i64> {
        self.transactions.iter().map(|txn| txn.id).max()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
