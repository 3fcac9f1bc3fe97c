//! Dashboard totals computed over a ledger snapshot.

use chrono::NaiveDate;
use pocket_domain::{same_month, Ledger, Transaction, TransactionKind};

/// Income and expense sums for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    pub income: f64,
    pub expenses: f64,
}

impl PeriodTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Everything the dashboard shows, computed in one pass over the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    pub overall: PeriodTotals,
    pub monthly: PeriodTotals,
    pub total_balance: f64,
    pub total_assets: f64,
    pub recent: Vec<Transaction>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn total_income(ledger: &Ledger) -> f64 {
        sum_kind(ledger, TransactionKind::Income, |_| true)
    }

    pub fn total_expenses(ledger: &Ledger) -> f64 {
        sum_kind(ledger, TransactionKind::Expense, |_| true)
    }

    pub fn total_balance(ledger: &Ledger) -> f64 {
        Self::total_income(ledger) - Self::total_expenses(ledger)
    }

    pub fn monthly_income(ledger: &Ledger, as_of: NaiveDate) -> f64 {
        sum_kind(ledger, TransactionKind::Income, |txn| same_month(txn.date, as_of))
    }

    pub fn monthly_expenses(ledger: &Ledger, as_of: NaiveDate) -> f64 {
        sum_kind(ledger, TransactionKind::Expense, |txn| same_month(txn.date, as_of))
    }

    /// The overall balance, floored at zero.
    pub fn total_assets(ledger: &Ledger) -> f64 {
        Self::total_balance(ledger).max(0.0)
    }

    pub fn dashboard(ledger: &Ledger, as_of: NaiveDate, recent_limit: usize) -> DashboardSummary {
        let mut overall = PeriodTotals::default();
        let mut monthly = PeriodTotals::default();
        for txn in ledger {
            let in_month = same_month(txn.date, as_of);
            match txn.kind {
                TransactionKind::Income => {
                    overall.income += txn.amount;
                    if in_month {
                        monthly.income += txn.amount;
                    }
                }
                TransactionKind::Expense => {
                    overall.expenses += txn.amount;
                    if in_month {
                        monthly.expenses += txn.amount;
                    }
                }
            }
        }
        let total_balance = overall.net();
        DashboardSummary {
            as_of,
            overall,
            monthly,
            total_balance,
            total_assets: total_balance.max(0.0),
            recent: ledger.recent(recent_limit).to_vec(),
        }
    }
}

fn sum_kind(ledger: &Ledger, kind: TransactionKind, include: impl Fn(&Transaction) -> bool) -> f64 {
    ledger
        .iter()
        .filter(|txn| txn.kind == kind && include(txn))
        .map(|txn| txn.amount)
        .sum()
}
