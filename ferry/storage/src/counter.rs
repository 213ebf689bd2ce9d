use {
    crate::{Map, PrimaryKey, Storage},
    ferry_types::{StdError, StdResult},
};

/// A monotonic counter under each key.
///
/// Internally, this is an abstraction over a [`Map`](crate::Map). A key whose
/// counter has never been incremented reads as `base` without occupying any
/// storage.
pub struct Counters<'a, K> {
    map: Map<'a, K, u64>,
    base: u64,
    step: u64,
}

impl<'a, K> Counters<'a, K> {
    pub const fn new(storage_key: &'a str, base: u64, step: u64) -> Self {
        Self {
            map: Map::new(storage_key),
            base,
            step,
        }
    }
}

impl<K> Counters<'_, K>
where
    K: PrimaryKey + Copy,
{
    /// Load the current counter value under the given key.
    pub fn current(&self, storage: &dyn Storage, key: K) -> StdResult<u64> {
        self.map
            .may_load(storage, key)
            .map(|maybe_value| maybe_value.unwrap_or(self.base))
    }

    /// Increment the value under the given key by the step size; return the
    /// values before and after incrementing.
    pub fn increment(&self, storage: &mut dyn Storage, key: K) -> StdResult<(u64, u64)> {
        let old_value = self.current(storage, key)?;
        let new_value = old_value.checked_add(self.step).ok_or(StdError::OverflowAdd {
            a: old_value as u128,
            b: self.step as u128,
        })?;

        self.map.save(storage, key, &new_value)?;

        Ok((old_value, new_value))
    }

    /// Reset the counter under the given key to the base value.
    pub fn reset(&self, storage: &mut dyn Storage, key: K) {
        self.map.remove(storage, key);
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::MockStorage, ferry_types::Addr, test_case::test_case};

    const NONCES: Counters<(u16, Addr)> = Counters::new("nonce", 0, 1);

    #[test_case(0, 1; "from zero by one")]
    #[test_case(1, 1; "from one by one")]
    #[test_case(0, 10; "from zero by ten")]
    fn counting(base: u64, step: u64) {
        let counters = Counters::<u8>::new("counter", base, step);

        let mut storage = MockStorage::new();
        let mut current = base;
        let mut next = current + step;

        for _ in 0..10 {
            assert_eq!(counters.current(&storage, 1).unwrap(), current);
            assert_eq!(counters.increment(&mut storage, 1).unwrap(), (current, next));

            current = next;
            next += step;
        }
    }

    #[test]
    fn channels_count_independently() {
        let mut storage = MockStorage::new();

        NONCES.increment(&mut storage, (101, Addr::mock(1))).unwrap();
        NONCES.increment(&mut storage, (101, Addr::mock(1))).unwrap();
        NONCES.increment(&mut storage, (109, Addr::mock(1))).unwrap();

        assert_eq!(NONCES.current(&storage, (101, Addr::mock(1))).unwrap(), 2);
        assert_eq!(NONCES.current(&storage, (109, Addr::mock(1))).unwrap(), 1);
        // Same chain, different counterparty: a separate channel.
        assert_eq!(NONCES.current(&storage, (101, Addr::mock(2))).unwrap(), 0);
    }

    #[test]
    fn resetting() {
        let mut storage = MockStorage::new();

        NONCES.increment(&mut storage, (101, Addr::mock(1))).unwrap();
        NONCES.reset(&mut storage, (101, Addr::mock(1)));

        assert_eq!(NONCES.current(&storage, (101, Addr::mock(1))).unwrap(), 0);
    }

    #[test]
    fn overflowing() {
        let counters = Counters::<u8>::new("counter", u64::MAX, 1);

        let mut storage = MockStorage::new();

        assert!(counters.increment(&mut storage, 1).is_err());
        // The failed increment leaves the counter untouched.
        assert_eq!(counters.current(&storage, 1).unwrap(), u64::MAX);
    }
}
