use {
    crate::{Addr, StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// A trusted path between two bridge instances: the counterparty's address on
/// the remote chain, paired with this instance's own local address. Packed on
/// the wire as `remote | local`, where `|` means byte concatenation.
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
pub struct Route {
    pub remote: Addr,
    pub local: Addr,
}

impl Route {
    pub const ENCODED_LENGTH: usize = 2 * Addr::LENGTH;

    pub fn new(remote: Addr, local: Addr) -> Self {
        Self { remote, local }
    }

    /// The same path as seen from the counterparty's end.
    pub fn flip(self) -> Self {
        Self {
            remote: self.local,
            local: self.remote,
        }
    }

    pub fn encode(&self) -> [u8; Self::ENCODED_LENGTH] {
        let mut buf = [0; Self::ENCODED_LENGTH];
        buf[..Addr::LENGTH].copy_from_slice(self.remote.as_ref());
        buf[Addr::LENGTH..].copy_from_slice(self.local.as_ref());
        buf
    }

    pub fn decode(buf: &[u8]) -> StdResult<Self> {
        if buf.len() != Self::ENCODED_LENGTH {
            return Err(StdError::invalid_length::<Self>(
                Self::ENCODED_LENGTH,
                buf.len(),
            ));
        }

        Ok(Self {
            remote: buf[..Addr::LENGTH].try_into()?,
            local: buf[Addr::LENGTH..].try_into()?,
        })
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::ResultExt, hex_literal::hex};

    #[test]
    fn encoding_roundtrip() {
        let route = Route::new(Addr::mock(1), Addr::mock(2));

        let buf = route.encode();
        assert_eq!(
            buf,
            hex!(
                "0000000000000000000000000000000000000001"
                "0000000000000000000000000000000000000002"
            )
        );

        assert_eq!(Route::decode(&buf).unwrap(), route);
    }

    #[test]
    fn decoding_wrong_length() {
        Route::decode(&[0; 39]).should_fail_with_error("invalid length");
    }

    #[test]
    fn flipping() {
        let route = Route::new(Addr::mock(1), Addr::mock(2));
        let flipped = route.flip();

        assert_eq!(flipped.remote, Addr::mock(2));
        assert_eq!(flipped.local, Addr::mock(1));
        assert_eq!(flipped.flip(), route);
    }
}
