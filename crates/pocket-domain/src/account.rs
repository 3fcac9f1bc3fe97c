//! The fixed set of money-holding accounts a transaction can be attributed to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Enumerates the supported account buckets.
///
/// Transactions store the account as a free-form label, so an [`Account`] is
/// recovered from the stored text with [`Account::parse`]. Labels that do not
/// belong to any locale are not accounts and are left out of balances.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Account {
    Checking,
    Savings,
    Credit,
    Cash,
}

impl Account {
    pub const ALL: [Account; 4] = [
        Account::Checking,
        Account::Savings,
        Account::Credit,
        Account::Cash,
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Account::Checking) => "Checking",
            (Locale::English, Account::Savings) => "Savings",
            (Locale::English, Account::Credit) => "Credit",
            (Locale::English, Account::Cash) => "Cash",
            (Locale::Indonesian, Account::Checking) => "Rekening",
            (Locale::Indonesian, Account::Savings) => "Tabungan",
            (Locale::Indonesian, Account::Credit) => "Kredit",
            (Locale::Indonesian, Account::Cash) => "Tunai",
        }
    }

    /// Matches a stored label exactly against every supported locale.
    pub fn parse(label: &str) -> Option<Account> {
        Account::ALL.into_iter().find(|account| {
            Locale::ALL
                .into_iter()
                .any(|locale| account.label(locale) == label)
        })
    }

    /// Credit behaves as a liability and is excluded from liquid assets.
    pub fn is_liquid(self) -> bool {
        !matches!(self, Account::Credit)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::English))
    }
}
