use {
    crate::{TestSuite, setup_tracing_subscriber},
    anyhow::{bail, ensure},
    ferry_endpoint::MockEndpoint,
    ferry_token::{Bridge, FungibleToken},
    ferry_types::{Addr, ChainId},
    std::collections::BTreeMap,
    tracing::Level,
};

pub const DEFAULT_TRACING_LEVEL: Level = Level::INFO;

/// Owner of every bridge in the suite, unless overridden.
pub const DEFAULT_OWNER: Addr = Addr::mock(99);

#[derive(Debug)]
enum BridgePlan {
    Locking {
        name: String,
        symbol: String,
        decimals: u8,
        balances: BTreeMap<Addr, u128>,
    },
    Mirroring {
        name: String,
        symbol: String,
        decimals: u8,
    },
}

pub struct TestBuilder {
    tracing_level: Option<Level>,
    owner: Option<Addr>,
    chains: BTreeMap<ChainId, BridgePlan>,
}

impl TestBuilder {
    // We don't use `Default` trait here, because we need to set the default
    // tracing level to `Some(DEFAULT_TRACING_LEVEL)` instead of `None`.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            tracing_level: Some(DEFAULT_TRACING_LEVEL),
            owner: None,
            chains: BTreeMap::new(),
        }
    }

    /// Setting this to `None` means no tracing.
    pub fn set_tracing_level(mut self, level: Option<Level>) -> Self {
        self.tracing_level = level;
        self
    }

    pub fn set_owner(mut self, owner: Addr) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Add a chain whose bridge escrows a pre-existing collateral token.
    pub fn add_locking_chain<N, S>(
        self,
        chain_id: ChainId,
        name: N,
        symbol: S,
        decimals: u8,
    ) -> anyhow::Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
    {
        self.add_chain(chain_id, BridgePlan::Locking {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            balances: BTreeMap::new(),
        })
    }

    /// Add a chain whose bridge mints and burns on its own ledger.
    pub fn add_mirroring_chain<N, S>(
        self,
        chain_id: ChainId,
        name: N,
        symbol: S,
        decimals: u8,
    ) -> anyhow::Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
    {
        self.add_chain(chain_id, BridgePlan::Mirroring {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        })
    }

    fn add_chain(mut self, chain_id: ChainId, plan: BridgePlan) -> anyhow::Result<Self> {
        ensure!(
            !self.chains.contains_key(&chain_id),
            "chain with id {chain_id} already exists"
        );

        self.chains.insert(chain_id, plan);

        Ok(self)
    }

    /// Give an account an initial collateral balance on a locking chain.
    pub fn add_balance(
        mut self,
        chain_id: ChainId,
        account: Addr,
        amount: u128,
    ) -> anyhow::Result<Self> {
        let Some(BridgePlan::Locking { balances, .. }) = self.chains.get_mut(&chain_id) else {
            bail!("chain {chain_id} is not a locking chain, it has no collateral to assign");
        };

        ensure!(
            !balances.contains_key(&account),
            "account {account} on chain {chain_id} already has a balance"
        );

        balances.insert(account, amount);

        Ok(self)
    }

    pub fn build(self) -> anyhow::Result<TestSuite> {
        if let Some(tracing_level) = self.tracing_level {
            setup_tracing_subscriber(tracing_level);
        }

        let owner = self.owner.unwrap_or(DEFAULT_OWNER);

        let mut suite = TestSuite::new(owner);

        for (chain_id, plan) in self.chains {
            let endpoint = MockEndpoint::new(Addr::derive(b"endpoint", chain_id as u64), chain_id);
            let bridge_addr = Addr::derive(b"bridge", chain_id as u64);

            let bridge = match plan {
                BridgePlan::Locking {
                    name,
                    symbol,
                    decimals,
                    balances,
                } => {
                    let mut collateral = FungibleToken::new(
                        Addr::derive(b"collateral", chain_id as u64),
                        name,
                        symbol,
                        decimals,
                    );

                    for (account, amount) in balances {
                        collateral.mint(account, amount)?;
                    }

                    Bridge::new_locking(bridge_addr, owner, collateral)?
                },
                BridgePlan::Mirroring {
                    name,
                    symbol,
                    decimals,
                } => Bridge::new_mirroring(bridge_addr, owner, name, symbol, decimals)?,
            };

            suite.add_chain(chain_id, endpoint, bridge);
        }

        Ok(suite)
    }
}
