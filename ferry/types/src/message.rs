use {
    crate::{Addr32, StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    sha3::{Digest, Keccak256},
    std::fmt::{self, Debug, Display},
};

pub const MESSAGE_VERSION: u8 = 1;

// ----------------------------------- types -----------------------------------

/// A token transfer in flight between two chains.
///
/// Wire format, all integers big endian:
///
/// | field     | width | note                               |
/// | --------- | ----- | ---------------------------------- |
/// | version   | 1     | must be [`MESSAGE_VERSION`]        |
/// | nonce     | 8     | position on the delivery channel   |
/// | recipient | 32    | zero-padded address                |
/// | amount    | 32    | 256 bits on the wire, 128 in state |
#[derive(
    serde::Serialize,
    serde::Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
pub struct Message {
    pub nonce: u64,
    pub recipient: Addr32,
    pub amount: u128,
}

impl Message {
    pub const ENCODED_LENGTH: usize = 73;

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::ENCODED_LENGTH);
        buf.push(MESSAGE_VERSION);
        buf.extend(self.nonce.to_be_bytes());
        buf.extend_from_slice(self.recipient.as_ref());
        buf.extend([0; 16]);
        buf.extend(self.amount.to_be_bytes());
        buf
    }

    pub fn decode(buf: &[u8]) -> StdResult<Self> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(StdError::invalid_length::<Self>(
                Self::ENCODED_LENGTH,
                buf.len(),
            ));
        }

        if buf[0] != MESSAGE_VERSION {
            return Err(StdError::deserialize::<Self, _>(
                "wire",
                format!("unknown version: {}", buf[0]),
            ));
        }

        // The amount is 256 bits wide on the wire but only 128 in state. The
        // high half must be zero.
        if buf[41..57].iter().any(|byte| *byte != 0) {
            return Err(StdError::deserialize::<Self, _>(
                "wire",
                "amount exceeds 128 bits",
            ));
        }

        Ok(Self {
            nonce: u64::from_be_bytes(buf[1..9].try_into().unwrap()),
            recipient: Addr32::from_array(buf[9..41].try_into().unwrap()),
            amount: u128::from_be_bytes(buf[57..73].try_into().unwrap()),
        })
    }

    /// The globally unique identifier of this message: the Keccak-256 hash of
    /// its wire encoding.
    pub fn id(&self) -> MessageId {
        let mut hasher = Keccak256::new();
        hasher.update(self.encode());
        MessageId(hasher.finalize().into())
    }
}

#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct MessageId([u8; 32]);

impl MessageId {
    pub const fn from_array(array: [u8; 32]) -> Self {
        Self(array)
    }
}

impl AsRef<[u8]> for MessageId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MessageId({self})")
    }
}

impl ser::Serialize for MessageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(de::Error::custom("missing `0x` prefix"));
        };

        hex::decode(hex_str)
            .map_err(de::Error::custom)?
            .try_into()
            .map(Self)
            .map_err(|_| de::Error::custom("message id should be exactly 32 bytes"))
    }
}

// ----------------------------------- tests -----------------------------------
