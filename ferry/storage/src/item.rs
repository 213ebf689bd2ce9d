use {
    crate::Path,
    borsh::{BorshDeserialize, BorshSerialize},
    std::ops::Deref,
};

/// A single value in storage, under a fixed key.
pub struct Item<'a, T> {
    path: Path<'a, T>,
}

impl<'a, T> Item<'a, T>
where
    T: BorshSerialize + BorshDeserialize,
{
    pub const fn new(storage_key: &'a str) -> Self {
        Self {
            path: Path::from_raw(storage_key.as_bytes()),
        }
    }
}

// `Item` is effectively a wrapper over a `Path`, so instead of implementing
// methods (`load`, `save`, ...) manually, we simply implement `Deref<Target = Path>`
// so that users can access those methods on `Path`.
impl<'a, T> Deref for Item<'a, T> {
    type Target = Path<'a, T>;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{MockStorage, Storage},
        borsh::{BorshDeserialize, BorshSerialize},
        ferry_types::StdResult,
    };

    #[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
    struct Config {
        owner: String,
        paused: bool,
    }

    const CONFIG: Item<Config> = Item::new("config");

    #[test]
    fn save_and_load() {
        let mut storage = MockStorage::new();

        // Reading before anything is saved.
        {
            assert!(!CONFIG.exists(&storage));
            assert!(CONFIG.load(&storage).is_err());
            assert_eq!(CONFIG.may_load(&storage).unwrap(), None);
        }

        // Reading after saving.
        {
            let cfg = Config {
                owner: "admin".to_string(),
                paused: false,
            };

            CONFIG.save(&mut storage, &cfg).unwrap();

            assert!(CONFIG.exists(&storage));
            assert_eq!(CONFIG.load(&storage).unwrap(), cfg);
        }

        // Removing twice is fine.
        {
            CONFIG.remove(&mut storage);
            CONFIG.remove(&mut storage);

            assert!(!CONFIG.exists(&storage));
        }
    }

    #[test]
    fn modifying_with_deletion() {
        const TALLY: Item<u64> = Item::new("tally");

        let mut storage = MockStorage::new();

        // Absent value comes through as `None`; returning a value creates it.
        TALLY
            .may_modify(&mut storage, |maybe| -> StdResult<_> {
                assert_eq!(maybe, None);
                Ok(Some(5))
            })
            .unwrap();

        assert_eq!(TALLY.load(&storage).unwrap(), 5);

        // Returning `None` deletes the entry, not merely zeroes it.
        TALLY
            .may_modify(&mut storage, |_| -> StdResult<_> { Ok(None) })
            .unwrap();

        assert!(!TALLY.exists(&storage));
    }

    #[test]
    fn modifying_leaves_data_untouched_on_error() {
        #[derive(Debug)]
        enum MyError {
            Std,
            Nope,
        }

        impl From<ferry_types::StdError> for MyError {
            fn from(_: ferry_types::StdError) -> Self {
                Self::Std
            }
        }

        const TALLY: Item<u64> = Item::new("tally");

        let mut storage = MockStorage::new();
        TALLY.save(&mut storage, &5).unwrap();

        let res = TALLY.may_modify(&mut storage, |_| Err(MyError::Nope));

        assert!(matches!(res, Err(MyError::Nope)));
        assert_eq!(TALLY.load(&storage).unwrap(), 5);
    }

    #[test]
    fn items_do_not_collide() {
        const A: Item<u64> = Item::new("a");
        const B: Item<u64> = Item::new("b");

        let mut storage = MockStorage::new();
        A.save(&mut storage, &1).unwrap();
        B.save(&mut storage, &2).unwrap();

        assert_eq!(A.load(&storage).unwrap(), 1);
        assert_eq!(B.load(&storage).unwrap(), 2);

        // Sanity check that items land under their declared keys.
        assert!(storage.read(b"a").is_some());
    }
}
