use {
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Debug, Display},
        ops::Deref,
        str::FromStr,
    },
};

/// A byte blob that serializes to `0x`-prefixed lowercase hex. Used for raw
/// payloads whose interpretation is up to the receiving end.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, BorshSerialize, BorshDeserialize)]
pub struct HexBinary(Vec<u8>);

impl HexBinary {
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for HexBinary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for HexBinary {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(vec: Vec<u8>) -> Self {
        Self(vec)
    }
}

impl From<&[u8]> for HexBinary {
    fn from(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for HexBinary {
    fn from(array: [u8; N]) -> Self {
        Self(array.to_vec())
    }
}

impl FromStr for HexBinary {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(hex_str).map(Self)
    }
}

impl Display for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Debug for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexBinary({self})")
    }
}

impl ser::Serialize for HexBinary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for HexBinary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        HexBinary::from_str(&s).map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stringify_roundtrip() {
        let blob = HexBinary::from(vec![0xde, 0xad, 0xbe, 0xef]);

        assert_eq!(blob.to_string(), "0xdeadbeef");
        assert_eq!(HexBinary::from_str("0xdeadbeef").unwrap(), blob);
        assert_eq!(HexBinary::from_str("deadbeef").unwrap(), blob);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let blob = HexBinary::from([1u8, 2, 3]);

        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, "\"0x010203\"");

        let back: HexBinary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, blob);
    }
}
