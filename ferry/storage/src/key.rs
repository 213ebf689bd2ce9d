use {ferry_types::Addr, std::borrow::Cow};

/// A single component of a storage key, either borrowed from the typed key or
/// built on the fly.
pub type RawKey<'a> = Cow<'a, [u8]>;

/// Describes a type that can be used as a key in a [`Map`](crate::Map).
///
/// The key needs to be serialized to raw bytes; serde is deliberately not used
/// here because map keys must be compact and their encoding must preserve
/// ordering.
pub trait PrimaryKey {
    /// Convert the key into one or more raw keys.
    fn raw_keys(&self) -> Vec<RawKey>;

    /// Serialize the raw keys into bytes.
    ///
    /// Each raw key other than the last one is prefixed by its length, as a
    /// 16-bit big endian number, so that a reader can tell where one raw key
    /// ends and the next starts.
    fn joined_key(&self) -> Vec<u8> {
        let mut raw_keys = self.raw_keys();
        let last_raw_key = raw_keys.pop();
        nested_namespaces_with_key(None, &raw_keys, last_raw_key)
    }
}

impl PrimaryKey for Addr {
    fn raw_keys(&self) -> Vec<RawKey> {
        vec![Cow::Borrowed(self.as_ref())]
    }
}

impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey,
    B: PrimaryKey,
{
    fn raw_keys(&self) -> Vec<RawKey> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }
}

macro_rules! impl_unsigned_integer_key {
    ($($t:ty),+ $(,)?) => {
        $(impl PrimaryKey for $t {
            fn raw_keys(&self) -> Vec<RawKey> {
                vec![Cow::Owned(self.to_be_bytes().to_vec())]
            }
        })*
    };
}

impl_unsigned_integer_key!(u8, u16, u32, u64, u128);

/// Combine a namespace and one or more keys into a full byte path.
///
/// The namespace and all keys other than the last one are prefixed with their
/// lengths (2 bytes big endian):
///
/// ```plain
/// len(namespace) | namespace | len(key1) | key1 | len(key2) | key2 | key3
/// ```
///
/// Panics if any key is longer than `u16::MAX` bytes.
pub fn nested_namespaces_with_key(
    maybe_namespace: Option<&[u8]>,
    prefixes: &[RawKey],
    maybe_key: Option<RawKey>,
) -> Vec<u8> {
    let mut size = 0;
    if let Some(namespace) = maybe_namespace {
        size += namespace.len() + 2;
    }
    for prefix in prefixes {
        size += prefix.as_ref().len() + 2;
    }
    if let Some(key) = &maybe_key {
        size += key.as_ref().len();
    }

    let mut out = Vec::with_capacity(size);
    if let Some(namespace) = maybe_namespace {
        out.extend_from_slice(&encode_length(namespace));
        out.extend_from_slice(namespace);
    }
    for prefix in prefixes {
        out.extend_from_slice(&encode_length(prefix));
        out.extend_from_slice(prefix.as_ref());
    }
    if let Some(key) = maybe_key {
        out.extend_from_slice(&key);
    }
    out
}

fn encode_length<B>(bytes: B) -> [u8; 2]
where
    B: AsRef<[u8]>,
{
    let len = bytes.as_ref().len();
    assert!(
        len <= u16::MAX as usize,
        "key is too long to be length-prefixed: {len} > {}",
        u16::MAX
    );

    (len as u16).to_be_bytes()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_keys_have_no_length_prefix() {
        assert_eq!(Addr::mock(1).joined_key(), Addr::mock(1).as_ref());
        assert_eq!(42u16.joined_key(), 42u16.to_be_bytes());
    }

    #[test]
    fn tuple_keys_prefix_all_but_the_last() {
        let joined = (101u16, Addr::mock(9)).joined_key();

        // 2 bytes of length, 2 bytes of chain id, then the bare address.
        assert_eq!(&joined[..2], [0, 2]);
        assert_eq!(&joined[2..4], 101u16.to_be_bytes());
        assert_eq!(&joined[4..], Addr::mock(9).as_ref());
    }

    #[test]
    fn tuple_keys_do_not_collide() {
        // Same concatenated bytes, different boundaries, must join differently.
        assert_ne!(
            (0x0102u16, 0x03u8).joined_key(),
            (0x01u8, 0x0203u16).joined_key(),
        );
    }
}
