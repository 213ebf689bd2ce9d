use {
    crate::{Path, PrimaryKey, Storage},
    borsh::{BorshDeserialize, BorshSerialize},
    ferry_types::{StdError, StdResult},
    std::marker::PhantomData,
};

/// A collection of values in storage, each under a typed key, all sharing a
/// common namespace.
pub struct Map<'a, K, T> {
    namespace: &'a str,
    key: PhantomData<K>,
    data: PhantomData<T>,
}

impl<'a, K, T> Map<'a, K, T> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace,
            key: PhantomData,
            data: PhantomData,
        }
    }
}

impl<K, T> Map<'_, K, T>
where
    K: PrimaryKey,
    T: BorshSerialize + BorshDeserialize,
{
    pub fn path(&self, key: K) -> Path<'_, T> {
        let mut raw_keys = key.raw_keys();
        let maybe_last = raw_keys.pop();
        Path::new(self.namespace.as_bytes(), &raw_keys, maybe_last)
    }

    pub fn exists(&self, storage: &dyn Storage, key: K) -> bool {
        self.path(key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.path(key).may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage, key: K) -> StdResult<T> {
        self.path(key).load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        self.path(key).save(storage, data)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: K) {
        self.path(key).remove(storage)
    }

    pub fn may_modify<F, E>(
        &self,
        storage: &mut dyn Storage,
        key: K,
        action: F,
    ) -> Result<Option<T>, E>
    where
        F: FnOnce(Option<T>) -> Result<Option<T>, E>,
        E: From<StdError>,
    {
        self.path(key).may_modify(storage, action)
    }
}

// ----------------------------------- tests -----------------------------------
