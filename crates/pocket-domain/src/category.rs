//! The fixed category taxonomy, keyed by transaction type.

use crate::{locale::Locale, transaction::TransactionKind};

/// English and Indonesian labels for each income category.
const INCOME_CATEGORIES: [(&str, &str); 6] = [
    ("Salary", "Gaji"),
    ("Freelance", "Freelance"),
    ("Business", "Bisnis"),
    ("Investment", "Investasi"),
    ("Gift", "Hadiah"),
    ("Other", "Lainnya"),
];

/// English and Indonesian labels for each expense category.
const EXPENSE_CATEGORIES: [(&str, &str); 8] = [
    ("Food", "Makanan"),
    ("Transport", "Transportasi"),
    ("Shopping", "Belanja"),
    ("Entertainment", "Hiburan"),
    ("Bills", "Tagihan"),
    ("Health", "Kesehatan"),
    ("Education", "Pendidikan"),
    ("Other", "Lainnya"),
];

fn table(kind: TransactionKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

fn pick(entry: &(&'static str, &'static str), locale: Locale) -> &'static str {
    match locale {
        Locale::English => entry.0,
        Locale::Indonesian => entry.1,
    }
}

/// Category labels offered for a transaction type, in taxonomy order.
pub fn categories_for(kind: TransactionKind, locale: Locale) -> Vec<&'static str> {
    table(kind).iter().map(|entry| pick(entry, locale)).collect()
}

/// Sorted union of income and expense categories. Labels shared by both
/// types (`Other`) appear once.
pub fn all_categories(locale: Locale) -> Vec<&'static str> {
    let mut labels: Vec<_> = TransactionKind::ALL
        .into_iter()
        .flat_map(|kind| categories_for(kind, locale))
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels
}

/// Returns `true` when `label` names a category of `kind` in any locale.
pub fn is_known_category(kind: TransactionKind, label: &str) -> bool {
    table(kind)
        .iter()
        .any(|entry| Locale::ALL.into_iter().any(|locale| pick(entry, locale) == label))
}
