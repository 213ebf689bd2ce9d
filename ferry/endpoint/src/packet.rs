use ferry_types::{Addr, ChainId, HexBinary, Route};

/// A message captured by the mock messaging layer, en route between two
/// chains.
///
/// In production these fields would travel through an off-chain relay; in the
/// harness, whoever holds both chain instances carries the packet from the
/// sending endpoint to the receiving one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    /// The chain the message originated from.
    pub src_chain_id: ChainId,
    /// The path as the receiving end sees it: the sender's address on the
    /// origin chain, paired with the contract it targeted locally.
    pub src_route: Route,
    pub dst_chain_id: ChainId,
    /// The contract the payload is addressed to.
    pub dst_addr: Addr,
    /// The endpoint instance configured to handle deliveries to `dst_addr`.
    pub dst_endpoint: Addr,
    pub payload: HexBinary,
}
