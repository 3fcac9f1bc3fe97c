//! The ledger store: owns the transaction list and keeps storage in sync.

use chrono::NaiveDate;
use pocket_domain::{Ledger, Transaction};

use crate::{
    ids::MonotonicIds,
    storage::LedgerStorage,
    time::Clock,
    transaction_service::{TransactionDraft, TransactionService},
    CoreError,
};

/// Result of adding a transaction.
///
/// The transaction is always part of the in-memory ledger. `warning` carries
/// the persistence failure, if the full rewrite of the store did not succeed.
#[derive(Debug)]
pub struct AppendReceipt {
    pub transaction: Transaction,
    pub warning: Option<CoreError>,
}

impl AppendReceipt {
    pub fn is_persisted(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owns the ledger, the storage handle it is persisted to, and the id source.
pub struct LedgerBook {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
    clock: Box<dyn Clock>,
    ids: MonotonicIds,
    set_aside: Option<String>,
    saves_blocked: bool,
}

impl LedgerBook {
    /// Reads the stored ledger, falling back to an empty one when nothing is
    /// stored or the stored data cannot be read.
    pub fn load(storage: &dyn LedgerStorage) -> Ledger {
        Self::read(storage).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "stored ledger unreadable, starting empty");
            Ledger::new()
        })
    }

    fn read(storage: &dyn LedgerStorage) -> Result<Ledger, CoreError> {
        match storage.load_ledger()? {
            Some(ledger) => {
                tracing::debug!(transactions = ledger.len(), "ledger loaded");
                Ok(ledger)
            }
            None => {
                tracing::debug!("no stored ledger, starting empty");
                Ok(Ledger::new())
            }
        }
    }

    /// Loads the ledger like [`LedgerBook::load`]. Unreadable stored data is
    /// moved aside first; if that fails, saves stay disabled for this book so
    /// the original bytes are never overwritten.
    pub fn open(storage: Box<dyn LedgerStorage>, clock: Box<dyn Clock>) -> Self {
        let mut set_aside = None;
        let mut saves_blocked = false;
        let ledger = match Self::read(storage.as_ref()) {
            Ok(ledger) => ledger,
            Err(err) => {
                tracing::warn!(error = %err, "stored ledger unreadable, starting empty");
                match storage.set_aside_unreadable() {
                    Ok(location) => {
                        if let Some(location) = &location {
                            tracing::warn!(%location, "unreadable ledger kept aside");
                        }
                        set_aside = location;
                    }
                    Err(move_err) => {
                        tracing::warn!(error = %move_err, "could not move unreadable ledger aside, saves disabled");
                        saves_blocked = true;
                    }
                }
                Ledger::new()
            }
        };
        let ids = MonotonicIds::seeded(ledger.max_id());
        Self {
            ledger,
            storage,
            clock,
            ids,
            set_aside,
            saves_blocked,
        }
    }

    /// Where unreadable stored data was moved when the book was opened.
    pub fn set_aside(&self) -> Option<&str> {
        self.set_aside.as_deref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn next_id(&mut self) -> i64 {
        self.ids.next(self.clock.now_millis())
    }

    /// Puts `transaction` at the front of the ledger, then rewrites storage.
    pub fn append(&mut self, transaction: Transaction) -> AppendReceipt {
        self.ids.observe(transaction.id);
        self.ledger.push_front(transaction.clone());
        let saved = if self.saves_blocked {
            Err(CoreError::Storage(
                "stored ledger is unreadable and was not moved aside; refusing to overwrite it".into(),
            ))
        } else {
            self.storage.save_ledger(&self.ledger)
        };
        let warning = match saved {
            Ok(()) => {
                tracing::info!(id = transaction.id, kind = %transaction.kind, "transaction recorded");
                None
            }
            Err(err) => {
                tracing::warn!(id = transaction.id, error = %err, "transaction kept in memory but not persisted");
                Some(err)
            }
        };
        AppendReceipt {
            transaction,
            warning,
        }
    }

    /// Validates a draft, assigns it the next id and appends it.
    pub fn record(&mut self, draft: TransactionDraft) -> Result<AppendReceipt, CoreError> {
        draft.validate()?;
        let id = self.next_id();
        let transaction = TransactionService::build(draft, id)?;
        Ok(self.append(transaction))
    }
}
