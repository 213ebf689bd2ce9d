use std::collections::BTreeMap;

/// A key-value store holding a single contract instance's state.
pub trait Storage {
    /// Read a single key-value pair.
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Write a single key-value pair.
    fn write(&mut self, key: &[u8], value: &[u8]);

    /// Delete a single key-value pair. No-op if the key doesn't exist.
    fn remove(&mut self, key: &[u8]);
}

/// An in-memory KV store backed by a B-tree map.
///
/// Cloning takes a full copy of the data, which is what makes state snapshots
/// cheap to take and restore in tests.
#[derive(Default, Debug, Clone)]
pub struct MockStorage {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MockStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }

    fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_remove() {
        let mut storage = MockStorage::new();

        assert_eq!(storage.read(b"hello"), None);

        storage.write(b"hello", b"world");
        assert_eq!(storage.read(b"hello"), Some(b"world".to_vec()));

        storage.remove(b"hello");
        assert_eq!(storage.read(b"hello"), None);

        // Removing a non-existent key is a no-op.
        storage.remove(b"hello");
    }

    #[test]
    fn clone_is_a_snapshot() {
        let mut storage = MockStorage::new();
        storage.write(b"k", b"v1");

        let snapshot = storage.clone();
        storage.write(b"k", b"v2");

        assert_eq!(snapshot.read(b"k"), Some(b"v1".to_vec()));
        assert_eq!(storage.read(b"k"), Some(b"v2".to_vec()));
    }
}
