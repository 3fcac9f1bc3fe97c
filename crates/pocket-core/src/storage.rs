use std::sync::Mutex;

use pocket_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing the ledger.
///
/// `load_ledger` returns `Ok(None)` when nothing has been stored yet.
pub trait LedgerStorage: Send + Sync {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError>;
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError>;

    /// Moves a stored value that failed to load out of the way so the next
    /// save cannot overwrite it. Returns where the bytes now live, or `None`
    /// when there was nothing to keep.
    fn set_aside_unreadable(&self) -> Result<Option<String>, CoreError> {
        Ok(None)
    }
}

/// Keeps the ledger in process memory. Used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryLedgerStorage {
    ledger: Mutex<Option<Ledger>>,
}

impl MemoryLedgerStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(Some(ledger)),
        }
    }

    /// A copy of whatever was last saved.
    pub fn snapshot(&self) -> Option<Ledger> {
        self.ledger
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl LedgerStorage for MemoryLedgerStorage {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError> {
        let guard = self
            .ledger
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let mut guard = self
            .ledger
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        *guard = Some(ledger.clone());
        Ok(())
    }
}

/// Detects records that aggregation will skip: unknown accounts and
/// categories outside the taxonomy for their type.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();
    for txn in ledger {
        if txn.known_account().is_none() {
            warnings.push(format!(
                "transaction {} references unknown account `{}`",
                txn.id, txn.account
            ));
        }
        if !txn.has_known_category() {
            warnings.push(format!(
                "transaction {} uses category `{}` outside the {} categories",
                txn.id, txn.category, txn.kind
            ));
        }
    }
    warnings
}
