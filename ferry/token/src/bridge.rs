use {
    crate::{
        FungibleToken, INBOUND_NONCES, OUTBOUND_NONCES, OWNER, TRUSTED_REMOTES, ledger,
    },
    ferry_endpoint::{MockEndpoint, Packet},
    ferry_storage::MockStorage,
    ferry_types::{
        Addr, Addr32, CallParams, ChainId, Event, FerryError, FerryResult, Message, Recipient,
        Route, SendFee, StdError, StdResult,
    },
};

/// How a bridge instance accounts for the tokens it moves.
#[derive(Debug, Clone)]
pub enum BridgeMode {
    /// The bridge fronts an existing token: outbound transfers pull the amount
    /// into escrow, inbound transfers release it.
    Locking { collateral: FungibleToken },
    /// The bridge's own ledger is the token: outbound transfers burn, inbound
    /// transfers mint.
    Mirroring {
        name: String,
        symbol: String,
        decimals: u8,
    },
}

/// What an accepted outbound transfer produced: the packet awaiting relay, and
/// the events emitted on the sending side.
#[must_use = "the packet must be delivered for the transfer to complete"]
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub packet: Packet,
    pub events: Vec<Event>,
}

/// One bridge instance on one chain.
///
/// A transfer between two chains runs through a pair of instances, one on each
/// end, that have registered each other as trusted remotes. Outbound transfers
/// debit the local ledger and hand a [`Message`] to the local endpoint; inbound
/// deliveries credit it. Each directed channel between two instances carries
/// its own nonce sequence, so deliveries are accepted exactly once and in send
/// order, and a freshly deployed instance starts clean channels rather than
/// inheriting its predecessor's positions.
#[derive(Debug, Clone)]
pub struct Bridge {
    addr: Addr,
    mode: BridgeMode,
    storage: MockStorage,
}

impl Bridge {
    /// Create a bridge that escrows the given collateral token.
    pub fn new_locking(addr: Addr, owner: Addr, collateral: FungibleToken) -> StdResult<Self> {
        Self::new(addr, owner, BridgeMode::Locking { collateral })
    }

    /// Create a bridge that is itself the token on its chain.
    pub fn new_mirroring<N, S>(
        addr: Addr,
        owner: Addr,
        name: N,
        symbol: S,
        decimals: u8,
    ) -> StdResult<Self>
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self::new(addr, owner, BridgeMode::Mirroring {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        })
    }

    fn new(addr: Addr, owner: Addr, mode: BridgeMode) -> StdResult<Self> {
        let mut storage = MockStorage::new();

        OWNER.save(&mut storage, &owner)?;

        Ok(Self {
            addr,
            mode,
            storage,
        })
    }

    pub fn addr(&self) -> Addr {
        self.addr
    }

    pub fn mode(&self) -> &BridgeMode {
        &self.mode
    }

    /// The collateral token, if this is a locking bridge.
    pub fn collateral(&self) -> Option<&FungibleToken> {
        match &self.mode {
            BridgeMode::Locking { collateral } => Some(collateral),
            BridgeMode::Mirroring { .. } => None,
        }
    }

    pub fn collateral_mut(&mut self) -> Option<&mut FungibleToken> {
        match &mut self.mode {
            BridgeMode::Locking { collateral } => Some(collateral),
            BridgeMode::Mirroring { .. } => None,
        }
    }

    /// The name of the token this bridge moves.
    pub fn token_name(&self) -> &str {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.name(),
            BridgeMode::Mirroring { name, .. } => name,
        }
    }

    pub fn token_symbol(&self) -> &str {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.symbol(),
            BridgeMode::Mirroring { symbol, .. } => symbol,
        }
    }

    pub fn token_decimals(&self) -> u8 {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.decimals(),
            BridgeMode::Mirroring { decimals, .. } => *decimals,
        }
    }

    /// Balance on the ledger of the token this bridge moves: the collateral's
    /// for a locking bridge, the bridge's own for a mirroring one.
    pub fn token_balance_of(&self, address: Addr) -> StdResult<u128> {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.balance_of(address),
            BridgeMode::Mirroring { .. } => ledger::balance_of(&self.storage, address),
        }
    }

    pub fn token_total_supply(&self) -> StdResult<u128> {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.total_supply(),
            BridgeMode::Mirroring { .. } => ledger::total_supply(&self.storage),
        }
    }

    pub fn token_allowance(&self, owner: Addr, spender: Addr) -> StdResult<u128> {
        match &self.mode {
            BridgeMode::Locking { collateral } => collateral.allowance(owner, spender),
            BridgeMode::Mirroring { .. } => ledger::allowance(&self.storage, owner, spender),
        }
    }

    /// Set an allowance on the ledger of the token this bridge moves.
    pub fn token_approve(&mut self, owner: Addr, spender: Addr, amount: u128) -> StdResult<()> {
        match &mut self.mode {
            BridgeMode::Locking { collateral } => collateral.approve(owner, spender, amount),
            BridgeMode::Mirroring { .. } => {
                ledger::set_allowance(&mut self.storage, owner, spender, amount)
            },
        }
    }

    /// Decompose the bridge into its accounting mode, dropping all other
    /// per-instance state.
    pub fn into_mode(self) -> BridgeMode {
        self.mode
    }

    // -------------------------------- queries --------------------------------

    pub fn owner(&self) -> StdResult<Addr> {
        OWNER.load(&self.storage)
    }

    pub fn trusted_remote(&self, chain_id: ChainId) -> StdResult<Option<Route>> {
        TRUSTED_REMOTES.may_load(&self.storage, chain_id)
    }

    /// The nonce most recently assigned to an outbound message on the channel
    /// to the given remote instance. Zero if none was ever sent.
    pub fn outbound_nonce(&self, chain_id: ChainId, remote: Addr) -> StdResult<u64> {
        OUTBOUND_NONCES.current(&self.storage, (chain_id, remote))
    }

    /// The nonce most recently accepted on the channel from the given remote
    /// instance. Zero if none was ever delivered.
    pub fn inbound_nonce(&self, chain_id: ChainId, remote: Addr) -> StdResult<u64> {
        INBOUND_NONCES.current(&self.storage, (chain_id, remote))
    }

    /// Balance on the bridge's own ledger. Always zero for a locking bridge,
    /// whose token lives in the collateral ledger instead.
    pub fn balance_of(&self, address: Addr) -> StdResult<u128> {
        ledger::balance_of(&self.storage, address)
    }

    pub fn total_supply(&self) -> StdResult<u128> {
        ledger::total_supply(&self.storage)
    }

    pub fn allowance(&self, owner: Addr, spender: Addr) -> StdResult<u128> {
        ledger::allowance(&self.storage, owner, spender)
    }

    // ------------------------------- executes --------------------------------

    /// Set the allowance the owner grants the spender on the bridge's own
    /// ledger.
    pub fn approve(&mut self, owner: Addr, spender: Addr, amount: u128) -> StdResult<()> {
        ledger::set_allowance(&mut self.storage, owner, spender, amount)
    }

    /// Register the counterpart instance for a remote chain, given the packed
    /// `remote | local` form of the path. Registering again replaces the
    /// previous route; there is no unregistering.
    ///
    /// Only the owner may call this.
    pub fn set_trusted_remote(
        &mut self,
        sender: Addr,
        chain_id: ChainId,
        packed: &[u8],
    ) -> FerryResult<Vec<Event>> {
        self.ensure_owner(sender)?;

        let route = Route::decode(packed)?;

        TRUSTED_REMOTES.save(&mut self.storage, chain_id, &route)?;

        tracing::info!(
            bridge = self.addr.to_string(),
            chain_id,
            remote = route.remote.to_string(),
            "Trusted remote set"
        );

        Ok(vec![Event::set_trusted_remote(self.addr, chain_id, route)])
    }

    /// Quote the fee for an outbound transfer. Reads and writes nothing; the
    /// mock messaging layer is free, so the quote is always zero.
    pub fn estimate_send_fee(
        &self,
        endpoint: &MockEndpoint,
        dst_chain_id: ChainId,
        to: Addr32,
        amount: u128,
        pay_in_zro: bool,
        adapter_params: &[u8],
    ) -> SendFee {
        let draft = Message {
            nonce: 0,
            recipient: to,
            amount,
        };

        endpoint.quote_fee(
            dst_chain_id,
            self.addr,
            &draft.encode(),
            pay_in_zro,
            adapter_params,
        )
    }

    /// Send tokens to an address on a remote chain.
    ///
    /// Debits `from` on the local side and hands the local endpoint a message
    /// for the trusted instance on the destination chain. A locking bridge
    /// pulls the amount into escrow, spending the allowance granted to the
    /// bridge itself, or to `sender` if someone other than `from` initiates.
    /// A mirroring bridge burns.
    ///
    /// The call either fully happens or fully doesn't: a failed debit consumes
    /// no nonce, and a send that cannot be routed debits nothing.
    pub fn send_from(
        &mut self,
        endpoint: &MockEndpoint,
        sender: Addr,
        from: Addr,
        dst_chain_id: ChainId,
        to: Addr32,
        amount: u128,
        _params: CallParams,
    ) -> FerryResult<SendOutcome> {
        let Some(route) = TRUSTED_REMOTES.may_load(&self.storage, dst_chain_id)? else {
            return Err(FerryError::UntrustedRemote {
                chain_id: dst_chain_id,
            });
        };

        // Stage bridge state on a scratch copy, committed only once the debit
        // has gone through.
        let mut storage = self.storage.clone();

        let (_, nonce) = OUTBOUND_NONCES.increment(&mut storage, (dst_chain_id, route.remote))?;

        let message = Message {
            nonce,
            recipient: to,
            amount,
        };
        let message_id = message.id();

        let packet = endpoint.send(self.addr, dst_chain_id, route.remote, message.encode().into())?;

        match &mut self.mode {
            BridgeMode::Locking { collateral } => {
                let spender = if sender == from { self.addr } else { sender };
                collateral.transfer_from(spender, from, self.addr, amount)?;
            },
            BridgeMode::Mirroring { .. } => {
                if sender != from {
                    ledger::spend_allowance(&mut storage, from, sender, amount)?;
                }
                ledger::decrease_balance(&mut storage, from, amount)?;
                ledger::decrease_supply(&mut storage, amount)?;
            },
        }

        self.storage = storage;

        tracing::info!(
            bridge = self.addr.to_string(),
            dst_chain_id,
            from = from.to_string(),
            amount,
            nonce,
            "Sent tokens to remote chain"
        );

        Ok(SendOutcome {
            packet,
            events: vec![Event::send_to_chain(
                self.addr,
                dst_chain_id,
                from,
                to,
                amount,
                nonce,
                message_id,
            )],
        })
    }

    fn ensure_owner(&self, sender: Addr) -> FerryResult<()> {
        let owner = OWNER.load(&self.storage)?;
        if sender != owner {
            return Err(FerryError::NotOwner { sender, owner });
        }

        Ok(())
    }
}

impl Recipient for Bridge {
    /// Credit a delivery from a remote chain.
    ///
    /// The source must match the trusted route registered for the source
    /// chain, and the message's nonce must be the next one on that channel.
    /// Accepted deliveries release escrow on a locking bridge and mint on a
    /// mirroring one. A rejected delivery changes nothing, not even the
    /// channel position.
    fn receive_payload(
        &mut self,
        src_chain_id: ChainId,
        src_route: Route,
        payload: &[u8],
    ) -> FerryResult<Vec<Event>> {
        let trusted = TRUSTED_REMOTES.may_load(&self.storage, src_chain_id)?;
        if trusted != Some(src_route) {
            return Err(FerryError::UntrustedRemote {
                chain_id: src_chain_id,
            });
        }

        let message = Message::decode(payload)?;

        let channel = (src_chain_id, src_route.remote);
        let current = INBOUND_NONCES.current(&self.storage, channel)?;
        let expect = current.checked_add(1).ok_or(StdError::OverflowAdd {
            a: current as u128,
            b: 1,
        })?;
        if message.nonce != expect {
            return Err(FerryError::NonceMismatch {
                expect,
                actual: message.nonce,
            });
        }

        let to = Addr::try_from(message.recipient)?;

        // Same staging as on the send side: the channel only advances if the
        // credit goes through.
        let mut storage = self.storage.clone();

        INBOUND_NONCES.increment(&mut storage, channel)?;

        match &mut self.mode {
            BridgeMode::Locking { collateral } => {
                collateral.transfer(self.addr, to, message.amount)?;
            },
            BridgeMode::Mirroring { .. } => {
                ledger::increase_supply(&mut storage, message.amount)?;
                ledger::increase_balance(&mut storage, to, message.amount)?;
            },
        }

        self.storage = storage;

        tracing::info!(
            bridge = self.addr.to_string(),
            src_chain_id,
            to = to.to_string(),
            amount = message.amount,
            nonce = message.nonce,
            "Received tokens from remote chain"
        );

        Ok(vec![Event::receive_from_chain(
            self.addr,
            src_chain_id,
            to,
            message.amount,
            message.nonce,
        )])
    }
}

// ----------------------------------- tests -----------------------------------
