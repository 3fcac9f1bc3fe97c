use chrono::NaiveDate;
use serde::Serialize;

use crate::transaction::{Transaction, TransactionKind};

/// Criteria for selecting part of the transaction history.
///
/// Every criterion is optional. `kind` and `category` match exactly, the date
/// bounds are inclusive.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the category criterion. An empty label clears it.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    pub fn date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.as_deref().map_or(true, str::is_empty)
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |category| category.is_empty() || txn.category == category)
            && self.date_from.map_or(true, |from| txn.date >= from)
            && self.date_to.map_or(true, |to| txn.date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: TransactionKind, category: &str, day: u32) -> Transaction {
        Transaction::new(
            day as i64,
            kind,
            1.0,
            category,
            "Cash",
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TransactionFilter::new().category("");
        assert!(filter.is_empty());
        assert!(filter.matches(&sample(TransactionKind::Income, "Gift", 1)));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        let filter = TransactionFilter::new().date_from(d(5)).date_to(d(10));
        assert!(!filter.matches(&sample(TransactionKind::Expense, "Food", 4)));
        assert!(filter.matches(&sample(TransactionKind::Expense, "Food", 5)));
        assert!(filter.matches(&sample(TransactionKind::Expense, "Food", 10)));
        assert!(!filter.matches(&sample(TransactionKind::Expense, "Food", 11)));
    }

    #[test]
    fn clear_resets_all_criteria() {
        let mut filter = TransactionFilter::new()
            .kind(TransactionKind::Expense)
            .category("Bills");
        assert!(!filter.is_empty());
        assert!(!filter.matches(&sample(TransactionKind::Expense, "Food", 1)));
        filter.clear();
        assert!(filter.is_empty());
    }
}
