use {
    crate::{RawKey, Storage, nested_namespaces_with_key},
    borsh::{BorshDeserialize, BorshSerialize},
    ferry_types::{StdError, StdResult},
    std::{borrow::Cow, marker::PhantomData},
};

/// The full byte path to a single value in storage, together with the type the
/// value deserializes into. Values are Borsh-encoded on disk.
pub struct Path<'a, T> {
    storage_key: Cow<'a, [u8]>,
    data: PhantomData<T>,
}

impl<T> Clone for Path<'_, T> {
    fn clone(&self) -> Self {
        Self {
            storage_key: self.storage_key.clone(),
            data: PhantomData,
        }
    }
}

impl<'a, T> Path<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    pub fn new(namespace: &[u8], prefixes: &[RawKey], maybe_key: Option<RawKey>) -> Self {
        Self {
            storage_key: Cow::Owned(nested_namespaces_with_key(
                Some(namespace),
                prefixes,
                maybe_key,
            )),
            data: PhantomData,
        }
    }

    pub const fn from_raw(storage_key: &'a [u8]) -> Self {
        Self {
            storage_key: Cow::Borrowed(storage_key),
            data: PhantomData,
        }
    }

    #[inline]
    pub fn storage_key(&self) -> &[u8] {
        self.storage_key.as_ref()
    }

    pub fn exists(&self, storage: &dyn Storage) -> bool {
        storage.read(self.storage_key()).is_some()
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        storage
            .read(self.storage_key())
            .map(|val| decode(&val))
            .transpose()
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<T> {
        storage
            .read(self.storage_key())
            .ok_or_else(|| StdError::data_not_found::<T>(self.storage_key()))
            .and_then(|val| decode(&val))
    }

    pub fn save(&self, storage: &mut dyn Storage, data: &T) -> StdResult<()> {
        let data_raw = encode(data)?;
        storage.write(self.storage_key(), &data_raw);
        Ok(())
    }

    pub fn remove(&self, storage: &mut dyn Storage) {
        storage.remove(self.storage_key());
    }

    /// Load the value (if it exists), pass it through the action, then save,
    /// keep, or delete it depending on what the action returns. Returning
    /// `None` deletes the entry.
    pub fn may_modify<F, E>(&self, storage: &mut dyn Storage, action: F) -> Result<Option<T>, E>
    where
        F: FnOnce(Option<T>) -> Result<Option<T>, E>,
        E: From<StdError>,
    {
        let maybe_current = self.may_load(storage)?;
        let was_present = maybe_current.is_some();

        let maybe_data = action(maybe_current)?;

        match (&maybe_data, was_present) {
            (Some(data), _) => {
                self.save(storage, data)?;
            },
            (None, true) => {
                self.remove(storage);
            },
            (None, false) => {},
        }

        Ok(maybe_data)
    }
}

fn encode<T>(data: &T) -> StdResult<Vec<u8>>
where
    T: BorshSerialize,
{
    borsh::to_vec(data).map_err(|err| StdError::serialize::<T, _>("borsh", err))
}

fn decode<T>(data: &[u8]) -> StdResult<T>
where
    T: BorshDeserialize,
{
    borsh::from_slice(data).map_err(|err| StdError::deserialize::<T, _>("borsh", err))
}
