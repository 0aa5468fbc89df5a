//! Durable string-keyed storage backends for the encrypted store.
//!
//! The store core treats its backing medium as a flat string map with a
//! commit-based durability point. Two backends are provided: an in-memory
//! map for tests and scratch use, and a JSON-snapshot file for real
//! persistence.

pub mod error;
pub mod file;
pub mod memory;

use std::sync::Arc;

pub use {error::StorageError, file::FileStorage, memory::MemoryStorage};

/// A durable string-keyed mapping.
///
/// A write made by [`put_string`](Storage::put_string) must be visible to
/// subsequent reads in the same process as soon as the call returns;
/// [`commit`](Storage::commit) is the durability point.
pub trait Storage: Send + Sync {
    /// Read the value stored under `name`, if any.
    fn get_string(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `name`, replacing any previous value.
    fn put_string(&self, name: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `name`. Deleting an absent name is a no-op.
    fn remove(&self, name: &str) -> Result<(), StorageError>;

    /// All names currently present, in no particular order.
    fn names(&self) -> Result<Vec<String>, StorageError>;

    /// Make prior writes durable.
    fn commit(&self) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn get_string(&self, name: &str) -> Result<Option<String>, StorageError> {
        (**self).get_string(name)
    }

    fn put_string(&self, name: &str, value: &str) -> Result<(), StorageError> {
        (**self).put_string(name, value)
    }

    fn remove(&self, name: &str) -> Result<(), StorageError> {
        (**self).remove(name)
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        (**self).names()
    }

    fn commit(&self) -> Result<(), StorageError> {
        (**self).commit()
    }
}
