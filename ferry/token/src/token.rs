use {
    crate::ledger,
    ferry_storage::MockStorage,
    ferry_types::{Addr, FerryResult, StdResult},
};

/// A plain fungible token with its own ledger, independent of any bridge.
/// Plays the part of the collateral asset a locking bridge escrows.
#[derive(Debug, Clone)]
pub struct FungibleToken {
    addr: Addr,
    name: String,
    symbol: String,
    decimals: u8,
    storage: MockStorage,
}

impl FungibleToken {
    pub fn new<N, S>(addr: Addr, name: N, symbol: S, decimals: u8) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            addr,
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            storage: MockStorage::new(),
        }
    }

    pub fn addr(&self) -> Addr {
        self.addr
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn balance_of(&self, address: Addr) -> StdResult<u128> {
        ledger::balance_of(&self.storage, address)
    }

    pub fn total_supply(&self) -> StdResult<u128> {
        ledger::total_supply(&self.storage)
    }

    pub fn allowance(&self, owner: Addr, spender: Addr) -> StdResult<u128> {
        ledger::allowance(&self.storage, owner, spender)
    }

    /// Mint new tokens to an account.
    ///
    /// NOTE: anyone can mint. The token exists so tests have balances to move
    /// around, and gatekeeping would only get in their way.
    pub fn mint(&mut self, to: Addr, amount: u128) -> StdResult<()> {
        ledger::increase_supply(&mut self.storage, amount)?;
        ledger::increase_balance(&mut self.storage, to, amount)?;

        Ok(())
    }

    /// Set the allowance the owner grants the spender, replacing any previous
    /// value.
    pub fn approve(&mut self, owner: Addr, spender: Addr, amount: u128) -> StdResult<()> {
        ledger::set_allowance(&mut self.storage, owner, spender, amount)
    }

    pub fn transfer(&mut self, from: Addr, to: Addr, amount: u128) -> FerryResult<()> {
        ledger::transfer(&mut self.storage, from, to, amount)
    }

    /// Move tokens on behalf of another account, drawing down the spender's
    /// allowance first.
    pub fn transfer_from(
        &mut self,
        spender: Addr,
        from: Addr,
        to: Addr,
        amount: u128,
    ) -> FerryResult<()> {
        // Stage the changes on a scratch copy, so that if the allowance covers
        // the amount but the balance does not, the allowance is not drawn down.
        let mut storage = self.storage.clone();

        ledger::spend_allowance(&mut storage, from, spender, amount)?;
        ledger::transfer(&mut storage, from, to, amount)?;

        self.storage = storage;

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, ferry_types::ResultExt};

    fn setup() -> FungibleToken {
        let mut token = FungibleToken::new(Addr::mock(100), "Test Token", "TEST", 18);
        token.mint(Addr::mock(1), 1_000).unwrap();
        token
    }

    #[test]
    fn minting() {
        let token = setup();

        token.balance_of(Addr::mock(1)).should_succeed_and_equal(1_000);
        token.total_supply().should_succeed_and_equal(1_000);
    }

    #[test]
    fn transferring_requires_balance() {
        let mut token = setup();

        token.transfer(Addr::mock(1), Addr::mock(2), 400).should_succeed();

        token.balance_of(Addr::mock(1)).should_succeed_and_equal(600);
        token.balance_of(Addr::mock(2)).should_succeed_and_equal(400);

        token
            .transfer(Addr::mock(2), Addr::mock(1), 401)
            .should_fail_with_error("insufficient balance");
    }

    #[test]
    fn transferring_on_behalf_requires_allowance() {
        let mut token = setup();

        token
            .transfer_from(Addr::mock(3), Addr::mock(1), Addr::mock(2), 100)
            .should_fail_with_error("insufficient allowance");

        token.approve(Addr::mock(1), Addr::mock(3), 250).unwrap();

        token
            .transfer_from(Addr::mock(3), Addr::mock(1), Addr::mock(2), 100)
            .should_succeed();

        token.balance_of(Addr::mock(1)).should_succeed_and_equal(900);
        token.balance_of(Addr::mock(2)).should_succeed_and_equal(100);
        token
            .allowance(Addr::mock(1), Addr::mock(3))
            .should_succeed_and_equal(150);
    }

    #[test]
    fn failed_transfer_leaves_the_allowance_intact() {
        let mut token = setup();

        // Allowance far exceeds the balance.
        token.approve(Addr::mock(1), Addr::mock(3), 1_000_000).unwrap();

        token
            .transfer_from(Addr::mock(3), Addr::mock(1), Addr::mock(2), 2_000)
            .should_fail_with_error("insufficient balance");

        // The failed transfer must not have drawn the allowance down.
        token
            .allowance(Addr::mock(1), Addr::mock(3))
            .should_succeed_and_equal(1_000_000);
        token.balance_of(Addr::mock(1)).should_succeed_and_equal(1_000);
    }
}
