use {
    crate::{Addr, Addr32, ChainId, MessageId, Route},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Tokens left this chain, bound for another.
    SendToChain(EvtSendToChain),
    /// Tokens arrived from another chain.
    ReceiveFromChain(EvtReceiveFromChain),
    /// A trusted counterparty was registered for a chain.
    SetTrustedRemote(EvtSetTrustedRemote),
}

impl Event {
    pub fn send_to_chain(
        bridge: Addr,
        dst_chain_id: ChainId,
        from: Addr,
        to: Addr32,
        amount: u128,
        nonce: u64,
        message_id: MessageId,
    ) -> Self {
        Self::SendToChain(EvtSendToChain {
            bridge,
            dst_chain_id,
            from,
            to,
            amount,
            nonce,
            message_id,
        })
    }

    pub fn receive_from_chain(
        bridge: Addr,
        src_chain_id: ChainId,
        to: Addr,
        amount: u128,
        nonce: u64,
    ) -> Self {
        Self::ReceiveFromChain(EvtReceiveFromChain {
            bridge,
            src_chain_id,
            to,
            amount,
            nonce,
        })
    }

    pub fn set_trusted_remote(bridge: Addr, chain_id: ChainId, route: Route) -> Self {
        Self::SetTrustedRemote(EvtSetTrustedRemote {
            bridge,
            chain_id,
            route,
        })
    }
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtSendToChain {
    pub bridge: Addr,
    pub dst_chain_id: ChainId,
    pub from: Addr,
    pub to: Addr32,
    pub amount: u128,
    pub nonce: u64,
    pub message_id: MessageId,
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtReceiveFromChain {
    pub bridge: Addr,
    pub src_chain_id: ChainId,
    pub to: Addr,
    pub amount: u128,
    pub nonce: u64,
}

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtSetTrustedRemote {
    pub bridge: Addr,
    pub chain_id: ChainId,
    pub route: Route,
}
