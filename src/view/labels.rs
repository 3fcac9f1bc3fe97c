//! Fixed interface text per locale.

use pocket_domain::Locale;

#[derive(Debug)]
pub struct Labels {
    locale: Locale,
    pub dashboard: &'static str,
    pub total_balance: &'static str,
    pub monthly_income: &'static str,
    pub monthly_expenses: &'static str,
    pub total_assets: &'static str,
    pub recent: &'static str,
    pub empty_ledger: &'static str,
    pub accounts: &'static str,
    pub liquid_assets: &'static str,
    pub net_worth: &'static str,
    pub history: &'static str,
    pub filter: &'static str,
    pub no_filter: &'static str,
    pub no_matches: &'static str,
    pub categories: &'static str,
    pub transaction_added: &'static str,
}

static ENGLISH: Labels = Labels {
    locale: Locale::English,
    dashboard: "Dashboard",
    total_balance: "Total balance",
    monthly_income: "Monthly income",
    monthly_expenses: "Monthly expenses",
    total_assets: "Total assets",
    recent: "Recent transactions",
    empty_ledger: "No transactions yet.",
    accounts: "Accounts",
    liquid_assets: "Liquid assets",
    net_worth: "Net worth",
    history: "Transaction history",
    filter: "Filter",
    no_filter: "none",
    no_matches: "No matching transactions.",
    categories: "Categories",
    transaction_added: "Transaction added",
};

static INDONESIAN: Labels = Labels {
    locale: Locale::Indonesian,
    dashboard: "Dasbor",
    total_balance: "Total saldo",
    monthly_income: "Pemasukan bulan ini",
    monthly_expenses: "Pengeluaran bulan ini",
    total_assets: "Total aset",
    recent: "Transaksi terbaru",
    empty_ledger: "Belum ada transaksi.",
    accounts: "Akun",
    liquid_assets: "Aset likuid",
    net_worth: "Kekayaan bersih",
    history: "Riwayat transaksi",
    filter: "Filter",
    no_filter: "tidak ada",
    no_matches: "Tidak ada transaksi yang cocok.",
    categories: "Kategori",
    transaction_added: "Transaksi berhasil ditambahkan",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Indonesian => &INDONESIAN,
        }
    }

    pub fn showing(&self, shown: usize, total: usize) -> String {
        match self.locale {
            Locale::English => format!("Showing {shown} of {total} transactions"),
            Locale::Indonesian => format!("Menampilkan {shown} dari {total} transaksi"),
        }
    }

    pub fn unattributed(&self, count: usize) -> String {
        match self.locale {
            Locale::English => {
                let noun = if count == 1 { "transaction" } else { "transactions" };
                format!("({count} {noun} with an unknown account not included)")
            }
            Locale::Indonesian => {
                format!("({count} transaksi dengan akun tidak dikenal tidak dihitung)")
            }
        }
    }

    /// Width that lines up the dashboard figures.
    pub(crate) fn summary_width(&self) -> usize {
        [
            self.total_balance,
            self.monthly_income,
            self.monthly_expenses,
            self.total_assets,
        ]
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indonesian_messages_follow_the_locale() {
        let labels = Labels::for_locale(Locale::Indonesian);
        assert_eq!(labels.empty_ledger, "Belum ada transaksi.");
        assert_eq!(labels.no_matches, "Tidak ada transaksi yang cocok.");
        assert_eq!(labels.showing(1, 3), "Menampilkan 1 dari 3 transaksi");
    }

    #[test]
    fn english_pluralizes_unattributed_count() {
        let labels = Labels::for_locale(Locale::English);
        assert!(labels.unattributed(1).contains("1 transaction with"));
        assert!(labels.unattributed(2).contains("2 transactions with"));
        assert_eq!(labels.summary_width(), "Monthly expenses".len());
    }
}
