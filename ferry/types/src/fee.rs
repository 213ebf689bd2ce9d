use {
    crate::{Addr, HexBinary},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// The cost of sending a message, quoted before dispatch. The mock messaging
/// layer charges nothing, so both components are always zero; the type exists
/// so callers exercise the same quote-then-send flow a fee-charging layer
/// would demand.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
)]
pub struct SendFee {
    /// Payable in the chain's native currency.
    pub native: u128,
    /// Payable in the messaging layer's own token.
    pub zro: u128,
}

impl SendFee {
    pub const ZERO: Self = Self { native: 0, zro: 0 };
}

/// Auxiliary parameters attached to an outbound transfer. The mock messaging
/// layer ignores all of them, but bridges accept and forward them so call
/// sites read the same as they would against a live layer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CallParams {
    /// Receiver of any unspent native fee.
    pub refund_to: Option<Addr>,
    /// Account paying the fee in the messaging layer's own token, if any.
    pub zro_payment: Option<Addr>,
    /// Opaque relayer instructions, e.g. destination gas limits.
    pub adapter_params: HexBinary,
}

impl CallParams {
    pub fn with_refund_to(refund_to: Addr) -> Self {
        Self {
            refund_to: Some(refund_to),
            ..Default::default()
        }
    }
}
