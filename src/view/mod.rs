//! View models: plain data built from core outputs, rendered by a [`Renderer`].

mod labels;
mod render;

use chrono::NaiveDate;
use pocket_core::{AccountService, CategoryService, DashboardSummary, TransactionService};
use pocket_domain::{Account, Ledger, Locale, Transaction, TransactionFilter, TransactionKind};
use serde::Serialize;

pub use labels::Labels;
pub use render::{JsonRenderer, Renderer, TextRenderer};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub as_of: NaiveDate,
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_assets: f64,
    pub recent: Vec<Transaction>,
}

impl From<DashboardSummary> for DashboardView {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            as_of: summary.as_of,
            total_balance: summary.total_balance,
            monthly_income: summary.monthly.income,
            monthly_expenses: summary.monthly.expenses,
            total_assets: summary.total_assets,
            recent: summary.recent,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountLine {
    pub account: Account,
    pub label: &'static str,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountsView {
    pub lines: Vec<AccountLine>,
    pub liquid_assets: f64,
    pub net_worth: f64,
    /// Transactions whose account label is not one of the fixed accounts.
    pub unattributed: usize,
}

impl AccountsView {
    pub fn build(ledger: &Ledger, locale: Locale) -> Self {
        let balances = AccountService::balances(ledger);
        Self {
            lines: balances
                .iter()
                .map(|(account, balance)| AccountLine {
                    account,
                    label: account.label(locale),
                    balance,
                })
                .collect(),
            liquid_assets: balances.liquid_assets(),
            net_worth: balances.net_worth(),
            unattributed: AccountService::unattributed_count(ledger),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HistoryView {
    pub filter: TransactionFilter,
    pub transactions: Vec<Transaction>,
    pub ledger_len: usize,
}

impl HistoryView {
    pub fn build(ledger: &Ledger, filter: &TransactionFilter) -> Self {
        Self {
            filter: filter.clone(),
            transactions: TransactionService::filter(ledger, filter)
                .into_iter()
                .cloned()
                .collect(),
            ledger_len: ledger.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryView {
    /// `None` lists the union used by the history filter.
    pub kind: Option<TransactionKind>,
    pub categories: Vec<&'static str>,
}

impl CategoryView {
    pub fn build(kind: Option<TransactionKind>, locale: Locale) -> Self {
        let categories = match kind {
            Some(kind) => CategoryService::choices(kind, locale),
            None => CategoryService::filter_choices(locale),
        };
        Self { kind, categories }
    }
}
