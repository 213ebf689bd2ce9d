use {
    crate::BalanceTracker,
    ferry_endpoint::{MockEndpoint, Packet},
    ferry_token::{Bridge, BridgeMode, SendOutcome},
    ferry_types::{Addr, CallParams, ChainId, Event, FerryResult, Route, SendFee, StdResult},
    std::collections::BTreeMap,
};

/// What a completed end-to-end transfer produced on both chains.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub packet: Packet,
    pub send_events: Vec<Event>,
    pub receive_events: Vec<Event>,
}

/// One simulated chain: its messaging endpoint and the bridge deployed on it.
#[derive(Debug, Clone)]
pub(crate) struct ChainInstance {
    pub endpoint: MockEndpoint,
    pub bridge: Bridge,
}

/// A set of simulated chains and the machinery to move tokens between them.
///
/// The suite plays the roles the chains themselves would: it carries packets
/// from the sending endpoint to the receiving one, and it rolls all chains
/// back if any leg of an operation fails, the way a transaction rollback
/// would on a real chain.
#[derive(Debug)]
pub struct TestSuite {
    /// The account that owns every bridge the suite deploys, used as the
    /// sender for administrative calls.
    pub owner: Addr,
    chains: BTreeMap<ChainId, ChainInstance>,
    pub(crate) balances: BTreeMap<(ChainId, Addr), u128>,
}

impl TestSuite {
    /// Create a new, empty test suite.
    ///
    /// It's not recommended to call this directly. Use [`TestBuilder`](crate::TestBuilder)
    /// instead.
    pub fn new(owner: Addr) -> Self {
        Self {
            owner,
            chains: BTreeMap::new(),
            balances: BTreeMap::new(),
        }
    }

    /// Install a chain: its endpoint and its bridge.
    pub fn add_chain(&mut self, chain_id: ChainId, endpoint: MockEndpoint, bridge: Bridge) {
        if self.chains.contains_key(&chain_id) {
            panic!("chain with id {chain_id} already exists");
        }

        self.chains.insert(chain_id, ChainInstance { endpoint, bridge });
    }

    fn instance(&self, chain_id: ChainId) -> &ChainInstance {
        self.chains
            .get(&chain_id)
            .unwrap_or_else(|| panic!("no chain with id {chain_id}"))
    }

    fn instance_mut(&mut self, chain_id: ChainId) -> &mut ChainInstance {
        self.chains
            .get_mut(&chain_id)
            .unwrap_or_else(|| panic!("no chain with id {chain_id}"))
    }

    pub fn endpoint(&self, chain_id: ChainId) -> &MockEndpoint {
        &self.instance(chain_id).endpoint
    }

    pub fn endpoint_mut(&mut self, chain_id: ChainId) -> &mut MockEndpoint {
        &mut self.instance_mut(chain_id).endpoint
    }

    pub fn bridge(&self, chain_id: ChainId) -> &Bridge {
        &self.instance(chain_id).bridge
    }

    pub fn bridge_mut(&mut self, chain_id: ChainId) -> &mut Bridge {
        &mut self.instance_mut(chain_id).bridge
    }

    /// Track balance changes across operations. See [`BalanceTracker`].
    pub fn balances(&mut self) -> BalanceTracker {
        BalanceTracker { suite: self }
    }

    // -------------------------------- wiring ---------------------------------

    /// Make the endpoint on `chain_id` route deliveries addressed to
    /// `dst_addr` to the endpoint on `dst_chain_id`.
    pub fn set_dest_endpoint(&mut self, chain_id: ChainId, dst_addr: Addr, dst_chain_id: ChainId) {
        let dst_endpoint = self.endpoint(dst_chain_id).addr();

        self.endpoint_mut(chain_id)
            .set_dest_endpoint(dst_addr, dst_endpoint)
            .unwrap_or_else(|err| {
                panic!("fatal error while configuring destination endpoint: {err}");
            });
    }

    /// Register the bridge on `remote_chain_id` as the trusted counterpart of
    /// the bridge on `chain_id`, signed by the suite owner.
    pub fn set_trusted_remote(&mut self, chain_id: ChainId, remote_chain_id: ChainId) {
        let remote = self.bridge(remote_chain_id).addr();
        let local = self.bridge(chain_id).addr();
        let owner = self.owner;

        self.bridge_mut(chain_id)
            .set_trusted_remote(owner, remote_chain_id, &Route::new(remote, local).encode())
            .unwrap_or_else(|err| {
                panic!("fatal error while registering trusted remote: {err}");
            });
    }

    /// Wire two chains together in both directions: each bridge trusts the
    /// other, and each endpoint knows where deliveries to the other's bridge
    /// go.
    pub fn link(&mut self, chain_a: ChainId, chain_b: ChainId) {
        let bridge_a = self.bridge(chain_a).addr();
        let bridge_b = self.bridge(chain_b).addr();

        self.set_trusted_remote(chain_a, chain_b);
        self.set_trusted_remote(chain_b, chain_a);
        self.set_dest_endpoint(chain_a, bridge_b, chain_b);
        self.set_dest_endpoint(chain_b, bridge_a, chain_a);
    }

    /// Tear down the bridge on a chain and deploy a fresh instance at a new
    /// address. A locking replacement fronts the same collateral token, with
    /// whatever the old instance escrowed stranded under its old address.
    /// Channels to and from the new instance start from scratch.
    pub fn redeploy_bridge(&mut self, chain_id: ChainId, new_addr: Addr) {
        let owner = self.owner;
        let mut instance = self
            .chains
            .remove(&chain_id)
            .unwrap_or_else(|| panic!("no chain with id {chain_id}"));

        instance.bridge = match instance.bridge.into_mode() {
            BridgeMode::Locking { collateral } => Bridge::new_locking(new_addr, owner, collateral),
            BridgeMode::Mirroring {
                name,
                symbol,
                decimals,
            } => Bridge::new_mirroring(new_addr, owner, name, symbol, decimals),
        }
        .unwrap_or_else(|err| {
            panic!("fatal error while redeploying bridge: {err}");
        });

        self.chains.insert(chain_id, instance);
    }

    // -------------------------------- queries --------------------------------

    /// Balance of an account on the ledger of the token the chain's bridge
    /// moves.
    pub fn query_balance(&self, chain_id: ChainId, account: Addr) -> StdResult<u128> {
        self.bridge(chain_id).token_balance_of(account)
    }

    pub fn query_total_supply(&self, chain_id: ChainId) -> StdResult<u128> {
        self.bridge(chain_id).token_total_supply()
    }

    /// The amount the chain's bridge holds in escrow. Zero on a mirroring
    /// chain, which holds nothing back.
    pub fn query_escrowed(&self, chain_id: ChainId) -> StdResult<u128> {
        let bridge = self.bridge(chain_id);
        bridge.token_balance_of(bridge.addr())
    }

    // ------------------------------- executes --------------------------------

    /// Mint collateral to an account. Panics on a mirroring chain, whose
    /// tokens only come into existence by delivery.
    pub fn mint(&mut self, chain_id: ChainId, to: Addr, amount: u128) {
        self.bridge_mut(chain_id)
            .collateral_mut()
            .unwrap_or_else(|| panic!("no collateral to mint on chain {chain_id}"))
            .mint(to, amount)
            .unwrap_or_else(|err| panic!("fatal error while minting: {err}"));
    }

    /// Set an allowance on the ledger of the chain's token.
    pub fn approve(&mut self, chain_id: ChainId, owner: Addr, spender: Addr, amount: u128) {
        self.bridge_mut(chain_id)
            .token_approve(owner, spender, amount)
            .unwrap_or_else(|err| panic!("fatal error while approving: {err}"));
    }

    /// Quote the fee for a transfer. Always zero under the mock messaging
    /// layer.
    pub fn estimate_send_fee(
        &self,
        chain_id: ChainId,
        dst_chain_id: ChainId,
        to: Addr,
        amount: u128,
    ) -> SendFee {
        let instance = self.instance(chain_id);

        instance.bridge.estimate_send_fee(
            &instance.endpoint,
            dst_chain_id,
            to.into(),
            amount,
            false,
            &[],
        )
    }

    /// Send tokens off a chain without delivering the resulting packet. The
    /// transfer stays in flight until the packet is passed to [`deliver`](Self::deliver).
    pub fn send(
        &mut self,
        chain_id: ChainId,
        sender: Addr,
        from: Addr,
        dst_chain_id: ChainId,
        to: Addr,
        amount: u128,
    ) -> FerryResult<SendOutcome> {
        let instance = self.instance_mut(chain_id);

        instance.bridge.send_from(
            &instance.endpoint,
            sender,
            from,
            dst_chain_id,
            to.into(),
            amount,
            CallParams::with_refund_to(sender),
        )
    }

    /// Walk a packet over to the endpoint instance it names, and deliver it to
    /// the bridge it is addressed to.
    pub fn deliver(&mut self, packet: &Packet) -> FerryResult<Vec<Event>> {
        let instance = self
            .chains
            .values_mut()
            .find(|instance| instance.endpoint.addr() == packet.dst_endpoint)
            .unwrap_or_else(|| panic!("no endpoint with address {}", packet.dst_endpoint));

        if instance.bridge.addr() != packet.dst_addr {
            panic!(
                "no bridge with address {} behind endpoint {}",
                packet.dst_addr, packet.dst_endpoint
            );
        }

        instance.endpoint.deliver(packet, &mut instance.bridge)
    }

    /// Send and deliver in one go, as one atomic action: if the delivery
    /// fails, the send rolls back with it and the whole transfer is a no-op.
    pub fn transfer(
        &mut self,
        chain_id: ChainId,
        sender: Addr,
        from: Addr,
        dst_chain_id: ChainId,
        to: Addr,
        amount: u128,
    ) -> FerryResult<TransferOutcome> {
        self.transact(|suite| {
            let sent = suite.send(chain_id, sender, from, dst_chain_id, to, amount)?;
            let receive_events = suite.deliver(&sent.packet)?;

            Ok(TransferOutcome {
                packet: sent.packet,
                send_events: sent.events,
                receive_events,
            })
        })
    }

    /// Run an action against the suite; if it errors, roll every chain back to
    /// its state from before the call.
    pub fn transact<F, T>(&mut self, action: F) -> FerryResult<T>
    where
        F: FnOnce(&mut Self) -> FerryResult<T>,
    {
        let snapshot = self.chains.clone();

        match action(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.chains = snapshot;
                Err(err)
            },
        }
    }
}
