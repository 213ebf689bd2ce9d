use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    sha2::{Digest, Sha256},
    std::{
        fmt::{self, Debug, Display},
        ops::Deref,
        str::FromStr,
    },
};

/// An account or contract address: 20 bytes, displayed as `0x`-prefixed
/// lowercase hex.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct Addr([u8; 20]);

impl Addr {
    pub const LENGTH: usize = 20;

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self(array)
    }

    /// Generate a mock address for use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }

    /// Derive a deterministic contract address as the first 20 bytes of
    /// `sha256(seed | seq)`, where `|` means byte concatenation.
    pub fn derive(seed: &[u8], seq: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(seq.to_be_bytes());
        let hash = hasher.finalize();

        let mut bytes = [0; Self::LENGTH];
        bytes.copy_from_slice(&hash[..Self::LENGTH]);
        Self(bytes)
    }

    pub const fn into_array(self) -> [u8; Self::LENGTH] {
        self.0
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for Addr {
    type Target = [u8; Self::LENGTH];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&[u8]> for Addr {
    type Error = StdError;

    fn try_from(slice: &[u8]) -> StdResult<Self> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_length::<Self>(Self::LENGTH, slice.len()))
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(StdError::deserialize::<Self, _>(
                "hex",
                "missing `0x` prefix",
            ));
        };

        hex::decode(hex_str)
            .map_err(|err| StdError::deserialize::<Self, _>("hex", err))
            .and_then(|bytes| bytes.as_slice().try_into())
    }
}

impl Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        Addr::from_str(&s).map_err(de::Error::custom)
    }
}

/// The 32-byte wire representation of an address: a 20-byte [`Addr`]
/// left-padded with 12 zero bytes, matching the width remote chains use.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize,
)]
pub struct Addr32([u8; 32]);

impl Addr32 {
    pub const LENGTH: usize = 32;

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self(array)
    }

    pub const fn into_array(self) -> [u8; Self::LENGTH] {
        self.0
    }
}

impl AsRef<[u8]> for Addr32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Addr> for Addr32 {
    fn from(addr: Addr) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[(Self::LENGTH - Addr::LENGTH)..].copy_from_slice(addr.as_ref());
        Self(bytes)
    }
}

impl TryFrom<Addr32> for Addr {
    type Error = StdError;

    /// Narrowing is only valid if the 12 padding bytes are zero. A recipient
    /// that doesn't fit a local address cannot be credited.
    fn try_from(addr: Addr32) -> StdResult<Self> {
        let (padding, addr_bytes) = addr.0.split_at(Addr32::LENGTH - Addr::LENGTH);

        if padding.iter().any(|byte| *byte != 0) {
            return Err(StdError::deserialize::<Addr, _>(
                "wire",
                "address is not zero-padded",
            ));
        }

        addr_bytes.try_into()
    }
}

impl TryFrom<&[u8]> for Addr32 {
    type Error = StdError;

    fn try_from(slice: &[u8]) -> StdResult<Self> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| StdError::invalid_length::<Self>(Self::LENGTH, slice.len()))
    }
}

impl Display for Addr32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for Addr32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr32({self})")
    }
}

impl ser::Serialize for Addr32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        let Some(hex_str) = s.strip_prefix("0x") else {
            return Err(de::Error::custom("missing `0x` prefix"));
        };

        hex::decode(hex_str)
            .map_err(de::Error::custom)
            .and_then(|bytes| bytes.as_slice().try_into().map_err(de::Error::custom))
    }
}

// ----------------------------------- tests -----------------------------------
