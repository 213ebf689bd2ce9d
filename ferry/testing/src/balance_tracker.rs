use {
    crate::TestSuite,
    ferry_types::{Addr, ChainId},
    std::cmp::Ordering,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceChange {
    Increased(u128),
    Decreased(u128),
    Unchanged,
}

/// Records account balances, to assert later on how operations moved them.
pub struct BalanceTracker<'a> {
    pub(crate) suite: &'a mut TestSuite,
}

impl BalanceTracker<'_> {
    /// Record the current balance of an account on a chain.
    pub fn record(&mut self, chain_id: ChainId, account: Addr) {
        let balance = self.suite.query_balance(chain_id, account).unwrap();
        self.suite.balances.insert((chain_id, account), balance);
    }

    /// Record the current balance of several accounts on a chain.
    pub fn record_many<I>(&mut self, chain_id: ChainId, accounts: I)
    where
        I: IntoIterator<Item = Addr>,
    {
        for account in accounts {
            self.record(chain_id, account);
        }
    }

    /// Refresh all recorded balances.
    pub fn refresh_all(&mut self) {
        // Need to collect the keys first to avoid borrowing issues.
        let keys: Vec<_> = self.suite.balances.keys().copied().collect();
        for (chain_id, account) in keys {
            self.record(chain_id, account);
        }
    }

    /// Clear all recorded balances.
    pub fn clear(&mut self) {
        self.suite.balances.clear();
    }

    /// How an account's balance on a chain has moved since it was recorded.
    pub fn change(&self, chain_id: ChainId, account: Addr) -> BalanceChange {
        let old_balance = self
            .suite
            .balances
            .get(&(chain_id, account))
            .unwrap_or_else(|| {
                panic!("balance of {account} on chain {chain_id} was never recorded");
            });
        let new_balance = self.suite.query_balance(chain_id, account).unwrap();

        match new_balance.cmp(old_balance) {
            Ordering::Greater => BalanceChange::Increased(new_balance - old_balance),
            Ordering::Less => BalanceChange::Decreased(old_balance - new_balance),
            Ordering::Equal => BalanceChange::Unchanged,
        }
    }

    /// Assert how an account's balance on a chain has moved.
    pub fn should_change(&self, chain_id: ChainId, account: Addr, expected: BalanceChange) {
        let actual = self.change(chain_id, account);
        if expected != actual {
            panic!(
                "incorrect balance! account: {account}, chain: {chain_id}, expected: {expected:?}, actual: {actual:?}"
            );
        }
    }
}
