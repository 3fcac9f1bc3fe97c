use std::fmt::Write as _;

use pocket_core::{CurrencyFormatter, DateFormatter};
use pocket_domain::{Locale, Transaction, TransactionFilter, TransactionKind};
use serde::Serialize;

use super::{AccountsView, CategoryView, DashboardView, HistoryView, Labels};

/// Turns view models into printable text.
pub trait Renderer {
    fn dashboard(&self, view: &DashboardView) -> String;
    fn accounts(&self, view: &AccountsView) -> String;
    fn history(&self, view: &HistoryView) -> String;
    fn categories(&self, view: &CategoryView) -> String;
}

/// Human-readable tables using the session's formatting rules.
pub struct TextRenderer<F> {
    formatter: F,
    labels: &'static Labels,
}

impl<F> TextRenderer<F>
where
    F: CurrencyFormatter + DateFormatter,
{
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            labels: Labels::for_locale(Locale::English),
        }
    }

    /// Switches headings and messages to `locale`.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.labels = Labels::for_locale(locale);
        self
    }

    /// Amount in the session currency (an empty code selects it).
    fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount, "")
    }

    fn row(&self, out: &mut String, txn: &Transaction) {
        let sign = match txn.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        let _ = write!(
            out,
            "  {:<13} {:<8} {:<14} {:<10} {:>18}",
            self.formatter.format_date(txn.date),
            txn.kind,
            txn.category,
            txn.account,
            format!("{sign}{}", self.money(txn.amount)),
        );
        if !txn.description.is_empty() {
            let _ = write!(out, "  {}", txn.description);
        }
        out.push('\n');
    }
}

impl<F> Renderer for TextRenderer<F>
where
    F: CurrencyFormatter + DateFormatter,
{
    fn dashboard(&self, view: &DashboardView) -> String {
        let labels = self.labels;
        let width = labels.summary_width();
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== {} ({}) ===",
            labels.dashboard,
            self.formatter.format_date(view.as_of)
        );
        for (label, amount) in [
            (labels.total_balance, view.total_balance),
            (labels.monthly_income, view.monthly_income),
            (labels.monthly_expenses, view.monthly_expenses),
            (labels.total_assets, view.total_assets),
        ] {
            let _ = writeln!(out, "  {label:<width$} : {}", self.money(amount));
        }
        out.push('\n');
        let _ = writeln!(out, "{}", labels.recent);
        if view.recent.is_empty() {
            let _ = writeln!(out, "  {}", labels.empty_ledger);
        }
        for txn in &view.recent {
            self.row(&mut out, txn);
        }
        out
    }

    fn accounts(&self, view: &AccountsView) -> String {
        let labels = self.labels;
        let mut out = format!("=== {} ===\n", labels.accounts);
        for line in &view.lines {
            let _ = writeln!(out, "  {:<14}: {}", line.label, self.money(line.balance));
        }
        let _ = writeln!(out, "  {:<14}: {}", labels.liquid_assets, self.money(view.liquid_assets));
        let _ = writeln!(out, "  {:<14}: {}", labels.net_worth, self.money(view.net_worth));
        if view.unattributed > 0 {
            let _ = writeln!(out, "  {}", labels.unattributed(view.unattributed));
        }
        out
    }

    fn history(&self, view: &HistoryView) -> String {
        let labels = self.labels;
        let mut out = format!("=== {} ===\n", labels.history);
        let _ = writeln!(
            out,
            "  {}: {}",
            labels.filter,
            describe_filter(&view.filter, labels.no_filter)
        );
        if view.transactions.is_empty() {
            let _ = writeln!(out, "  {}", labels.no_matches);
            return out;
        }
        for txn in &view.transactions {
            self.row(&mut out, txn);
        }
        let _ = writeln!(
            out,
            "  {}",
            labels.showing(view.transactions.len(), view.ledger_len)
        );
        out
    }

    fn categories(&self, view: &CategoryView) -> String {
        let title = match view.kind {
            Some(kind) => format!("=== {} ({kind}) ===\n", self.labels.categories),
            None => format!("=== {} ===\n", self.labels.categories),
        };
        let mut out = title;
        for category in &view.categories {
            let _ = writeln!(out, "  - {category}");
        }
        out
    }
}

/// Pretty-printed JSON of the view models, for piping into other tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn encode<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
    }
}

impl Renderer for JsonRenderer {
    fn dashboard(&self, view: &DashboardView) -> String {
        Self::encode(view)
    }

    fn accounts(&self, view: &AccountsView) -> String {
        Self::encode(view)
    }

    fn history(&self, view: &HistoryView) -> String {
        Self::encode(view)
    }

    fn categories(&self, view: &CategoryView) -> String {
        Self::encode(view)
    }
}

fn describe_filter(filter: &TransactionFilter, none: &str) -> String {
    if filter.is_empty() {
        return none.into();
    }
    let mut parts = Vec::new();
    if let Some(kind) = filter.kind {
        parts.push(format!("type={kind}"));
    }
    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("category={category}"));
    }
    if let Some(from) = filter.date_from {
        parts.push(format!("from={from}"));
    }
    if let Some(to) = filter.date_to {
        parts.push(format!("to={to}"));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pocket_domain::{Ledger, Locale};

    use super::*;
    use crate::cli::formatters::LocaleFormatter;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn renderer() -> TextRenderer<LocaleFormatter> {
        TextRenderer::new(LocaleFormatter::new(Locale::English, "USD"))
    }

    #[test]
    fn empty_dashboard_says_so() {
        let view = DashboardView {
            as_of: d(2024, 5, 1),
            total_balance: 0.0,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            total_assets: 0.0,
            recent: Vec::new(),
        };
        let text = renderer().dashboard(&view);
        assert!(text.contains("May 1, 2024"));
        assert!(text.contains("No transactions yet."));
        assert!(text.contains("  Monthly income   : $0.00"));
    }

    #[test]
    fn history_lists_rows_with_signed_amounts() {
        let ledger = Ledger::from_transactions(vec![
            Transaction::new(2, TransactionKind::Expense, 12.5, "Food", "Cash", d(2024, 5, 2))
                .with_description("lunch"),
            Transaction::new(1, TransactionKind::Income, 100.0, "Salary", "Checking", d(2024, 5, 1)),
        ]);
        let view = HistoryView::build(&ledger, &TransactionFilter::new());
        let text = renderer().history(&view);
        assert!(text.contains("Filter: none"));
        assert!(text.contains("-$12.50"));
        assert!(text.contains("+$100.00"));
        assert!(text.contains("lunch"));
        assert!(text.contains("Showing 2 of 2 transactions"));
    }

    #[test]
    fn empty_history_result_uses_no_matches_message() {
        let ledger = Ledger::new();
        let filter = TransactionFilter::new().category("Food");
        let text = renderer().history(&HistoryView::build(&ledger, &filter));
        assert!(text.contains("category=Food"));
        assert!(text.contains("No matching transactions."));
    }

    #[test]
    fn indonesian_renderer_localizes_headings_and_messages() {
        let renderer = TextRenderer::new(LocaleFormatter::new(Locale::Indonesian, "IDR"))
            .with_locale(Locale::Indonesian);
        let ledger = Ledger::new();
        let history = renderer.history(&HistoryView::build(&ledger, &TransactionFilter::new()));
        assert!(history.contains("Riwayat transaksi"));
        assert!(history.contains("Filter: tidak ada"));
        assert!(history.contains("Tidak ada transaksi yang cocok."));

        let view = DashboardView {
            as_of: d(2024, 5, 1),
            total_balance: 5_000_000.0,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            total_assets: 0.0,
            recent: Vec::new(),
        };
        let dashboard = renderer.dashboard(&view);
        assert!(dashboard.contains("=== Dasbor (1 Mei 2024) ==="));
        assert!(dashboard.contains("Total saldo           : Rp 5.000.000"));
        assert!(dashboard.contains("Belum ada transaksi."));
    }

    #[test]
    fn json_renderer_emits_wire_field_names() {
        let ledger = Ledger::from_transactions(vec![Transaction::new(
            1,
            TransactionKind::Income,
            10.0,
            "Gift",
            "Cash",
            d(2024, 5, 1),
        )]);
        let json = JsonRenderer.history(&HistoryView::build(&ledger, &TransactionFilter::new()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["transactions"][0]["type"], "income");
        assert_eq!(value["ledger_len"], 1);
        assert!(value["filter"]["kind"].is_null());
    }
}
