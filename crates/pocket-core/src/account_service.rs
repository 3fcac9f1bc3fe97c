use pocket_domain::{Account, Ledger};

/// Income minus expenses per account bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccountBalances {
    pub checking: f64,
    pub savings: f64,
    pub credit: f64,
    pub cash: f64,
}

impl AccountBalances {
    pub fn get(&self, account: Account) -> f64 {
        match account {
            Account::Checking => self.checking,
            Account::Savings => self.savings,
            Account::Credit => self.credit,
            Account::Cash => self.cash,
        }
    }

    fn slot(&mut self, account: Account) -> &mut f64 {
        match account {
            Account::Checking => &mut self.checking,
            Account::Savings => &mut self.savings,
            Account::Credit => &mut self.credit,
            Account::Cash => &mut self.cash,
        }
    }

    /// Balances in the fixed account order.
    pub fn iter(&self) -> impl Iterator<Item = (Account, f64)> + '_ {
        Account::ALL
            .into_iter()
            .map(move |account| (account, self.get(account)))
    }

    /// Checking, savings and cash. Credit is a liability and stays out.
    pub fn liquid_assets(&self) -> f64 {
        self.iter()
            .filter(|(account, _)| account.is_liquid())
            .map(|(_, balance)| balance)
            .sum()
    }

    pub fn net_worth(&self) -> f64 {
        self.liquid_assets() + self.credit
    }
}

pub struct AccountService;

impl AccountService {
    /// Per-account balances. Transactions whose account label is not one of
    /// the fixed accounts contribute nothing.
    pub fn balances(ledger: &Ledger) -> AccountBalances {
        let mut balances = AccountBalances::default();
        for txn in ledger {
            if let Some(account) = txn.known_account() {
                *balances.slot(account) += txn.signed_amount();
            }
        }
        balances
    }

    /// Number of transactions left out of [`AccountService::balances`].
    pub fn unattributed_count(ledger: &Ledger) -> usize {
        ledger
            .iter()
            .filter(|txn| txn.known_account().is_none())
            .count()
    }
}
