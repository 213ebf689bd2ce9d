use {
    crate::{Addr, ChainId},
    std::any::type_name,
};

/// Errors at the storage and wire-codec level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StdError {
    #[error("data not found! type: {ty}, storage key: {key}")]
    DataNotFound { ty: &'static str, key: String },

    #[error("invalid length! type: {ty}, expecting: {expect}, actual: {actual}")]
    InvalidLength {
        ty: &'static str,
        expect: usize,
        actual: usize,
    },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("addition overflow: {a} + {b}")]
    OverflowAdd { a: u128, b: u128 },

    #[error("subtraction overflow: {a} - {b}")]
    OverflowSub { a: u128, b: u128 },
}

impl StdError {
    pub fn data_not_found<T>(key: &[u8]) -> Self {
        Self::DataNotFound {
            ty: type_name::<T>(),
            key: format!("0x{}", hex::encode(key)),
        }
    }

    pub fn invalid_length<T>(expect: usize, actual: usize) -> Self {
        Self::InvalidLength {
            ty: type_name::<T>(),
            expect,
            actual,
        }
    }

    pub fn serialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;

/// Errors in the bridging protocol proper.
///
/// Every variant here is fatal to the call that raised it: the harness rolls
/// the whole call back, so no partial state change survives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FerryError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("sender is not the owner! sender: {sender}, owner: {owner}")]
    NotOwner { sender: Addr, owner: Addr },

    #[error(
        "insufficient allowance! owner: {owner}, spender: {spender}, allowance: {allowance}, amount: {amount}"
    )]
    InsufficientAllowance {
        owner: Addr,
        spender: Addr,
        allowance: u128,
        amount: u128,
    },

    #[error(
        "insufficient balance! account: {account}, balance: {balance}, amount: {amount}"
    )]
    InsufficientBalance {
        account: Addr,
        balance: u128,
        amount: u128,
    },

    #[error("untrusted remote! chain id: {chain_id}")]
    UntrustedRemote { chain_id: ChainId },

    #[error("incorrect nonce! expecting: {expect}, actual: {actual}")]
    NonceMismatch { expect: u64, actual: u64 },

    #[error("no destination endpoint configured! address: {addr}")]
    NoDestinationConfigured { addr: Addr },
}

pub type FerryResult<T> = core::result::Result<T, FerryError>;
