//! In-memory storage backend.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{Storage, error::StorageError};

/// Non-durable map backend. `commit` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get_string(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(name).cloned())
    }

    fn put_string(&self, name: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        self.lock().remove(name);
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock().keys().cloned().collect())
    }

    fn commit(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_remove() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get_string("a").unwrap(), None);
        storage.put_string("a", "1").unwrap();
        assert_eq!(storage.get_string("a").unwrap(), Some("1".to_string()));

        storage.put_string("a", "2").unwrap();
        assert_eq!(storage.get_string("a").unwrap(), Some("2".to_string()));

        storage.remove("a").unwrap();
        assert_eq!(storage.get_string("a").unwrap(), None);
    }

    #[test]
    fn remove_absent_is_noop() {
        let storage = MemoryStorage::new();
        storage.remove("never-set").unwrap();
    }

    #[test]
    fn names_lists_all_entries() {
        let storage = MemoryStorage::new();
        storage.put_string("a", "1").unwrap();
        storage.put_string("b", "2").unwrap();

        let mut names = storage.names().unwrap();
        names.sort();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(storage.len(), 2);
    }
}
