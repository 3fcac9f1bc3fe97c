use chrono::NaiveDate;
use pocket_domain::{Ledger, Transaction, TransactionFilter, TransactionKind};

use crate::CoreError;

/// Raw input for a new transaction before an id has been assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub kind: Option<TransactionKind>,
    pub amount: Option<f64>,
    pub category: String,
    pub account: String,
    pub description: String,
    pub date: Option<NaiveDate>,
}

impl TransactionDraft {
    /// Checks that every required field is present. Category and account
    /// labels are not checked against the fixed sets.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.kind.is_none() {
            return Err(CoreError::Validation("transaction type is required".into()));
        }
        match self.amount {
            None => return Err(CoreError::Validation("amount is required".into())),
            Some(amount) if !amount.is_finite() || amount < 0.0 => {
                return Err(CoreError::Validation(format!(
                    "amount must be a non-negative number, got {amount}"
                )))
            }
            Some(_) => {}
        }
        if self.category.trim().is_empty() {
            return Err(CoreError::Validation("category is required".into()));
        }
        if self.account.trim().is_empty() {
            return Err(CoreError::Validation("account is required".into()));
        }
        if self.date.is_none() {
            return Err(CoreError::Validation("date is required".into()));
        }
        Ok(())
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Turns a validated draft into a transaction with the given id.
    pub fn build(draft: TransactionDraft, id: i64) -> Result<Transaction, CoreError> {
        draft.validate()?;
        let TransactionDraft {
            kind: Some(kind),
            amount: Some(amount),
            category,
            account,
            description,
            date: Some(date),
        } = draft
        else {
            return Err(CoreError::Validation("incomplete transaction".into()));
        };
        Ok(Transaction::new(id, kind, amount, category.trim(), account.trim(), date)
            .with_description(description.trim()))
    }

    /// Transactions matching `filter`, in ledger order.
    pub fn filter<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        ledger.iter().filter(|txn| filter.matches(txn)).collect()
    }
}
