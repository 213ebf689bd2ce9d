use {
    crate::Packet,
    ferry_storage::{Map, MockStorage},
    ferry_types::{
        Addr, ChainId, Event, FerryError, FerryResult, HexBinary, Recipient, Route, SendFee,
        StdResult,
    },
};

// destination contract => endpoint instance handling deliveries to it
const DEST_ENDPOINTS: Map<Addr, Addr> = Map::new("dest_endpoint");

/// A stand-in for one chain's messaging endpoint.
///
/// The real messaging layer hands outbound messages to an off-chain relay
/// network. This mock instead resolves, from its own configuration, which
/// endpoint instance serves the destination contract, and emits a [`Packet`]
/// for the harness to walk over to that instance. Sending and delivering stay
/// separate entry points, the same as they would be under a real relay.
#[derive(Debug, Clone)]
pub struct MockEndpoint {
    addr: Addr,
    chain_id: ChainId,
    storage: MockStorage,
}

impl MockEndpoint {
    pub fn new(addr: Addr, chain_id: ChainId) -> Self {
        Self {
            addr,
            chain_id,
            storage: MockStorage::new(),
        }
    }

    pub fn addr(&self) -> Addr {
        self.addr
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Register which endpoint instance handles deliveries addressed to the
    /// given contract. Registering again overwrites.
    pub fn set_dest_endpoint(&mut self, dst_addr: Addr, dst_endpoint: Addr) -> StdResult<()> {
        DEST_ENDPOINTS.save(&mut self.storage, dst_addr, &dst_endpoint)?;

        tracing::debug!(
            dst_addr = dst_addr.to_string(),
            dst_endpoint = dst_endpoint.to_string(),
            "Destination endpoint configured"
        );

        Ok(())
    }

    pub fn dest_endpoint(&self, dst_addr: Addr) -> StdResult<Option<Addr>> {
        DEST_ENDPOINTS.may_load(&self.storage, dst_addr)
    }

    /// Accept an outbound message from a local contract.
    ///
    /// There is no relay to fall back on: if no endpoint is configured for the
    /// destination contract, the send fails outright rather than queueing.
    pub fn send(
        &self,
        sender: Addr,
        dst_chain_id: ChainId,
        dst_addr: Addr,
        payload: HexBinary,
    ) -> FerryResult<Packet> {
        let Some(dst_endpoint) = DEST_ENDPOINTS.may_load(&self.storage, dst_addr)? else {
            return Err(FerryError::NoDestinationConfigured { addr: dst_addr });
        };

        tracing::debug!(
            sender = sender.to_string(),
            dst_chain_id,
            dst_addr = dst_addr.to_string(),
            "Message accepted for delivery"
        );

        Ok(Packet {
            src_chain_id: self.chain_id,
            src_route: Route::new(sender, dst_addr),
            dst_chain_id,
            dst_addr,
            dst_endpoint,
            payload,
        })
    }

    /// Hand an arriving packet to the contract it is addressed to.
    pub fn deliver(
        &self,
        packet: &Packet,
        recipient: &mut dyn Recipient,
    ) -> FerryResult<Vec<Event>> {
        tracing::debug!(
            src_chain_id = packet.src_chain_id,
            dst_addr = packet.dst_addr.to_string(),
            "Delivering message"
        );

        recipient
            .receive_payload(packet.src_chain_id, packet.src_route, &packet.payload)
            .inspect_err(|err| {
                tracing::warn!(
                    err = err.to_string(),
                    sender = packet.src_route.remote.to_string(),
                    "Failed to deliver message"
                );
            })
    }

    /// Quote the fee for sending the given payload. The mock charges nothing,
    /// whatever the payload or destination.
    pub fn quote_fee(
        &self,
        _dst_chain_id: ChainId,
        _sender: Addr,
        _payload: &[u8],
        _pay_in_zro: bool,
        _adapter_params: &[u8],
    ) -> SendFee {
        SendFee::ZERO
    }
}

// ----------------------------------- tests -----------------------------------
