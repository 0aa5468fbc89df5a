//! Degrade-to-absent compatibility wrapper.
//!
//! The original store never surfaced an error: a failed `put` silently wrote
//! nothing and a failed `get` read as absent, with a diagnostic log as the
//! only signal. [`LenientStore`] reproduces that contract on top of the
//! typed [`EncryptedStore`] for callers that depend on it.

use cryptkv_storage::Storage;

use crate::{gcm::AesGcmCipher, store::EncryptedStore, traits::Cipher};

/// Wrapper that converts every store error into "operation had no effect".
pub struct LenientStore<S: Storage, C: Cipher = AesGcmCipher> {
    inner: EncryptedStore<S, C>,
}

impl<S: Storage, C: Cipher> LenientStore<S, C> {
    pub fn new(inner: EncryptedStore<S, C>) -> Self {
        Self { inner }
    }

    /// The wrapped typed store.
    pub fn into_inner(self) -> EncryptedStore<S, C> {
        self.inner
    }

    /// Encrypt and write; on failure the write simply does not happen.
    pub fn put(&self, name: &str, value: &str) {
        if let Err(_err) = self.inner.put(name, value) {
            #[cfg(feature = "tracing")]
            tracing::warn!(name, error = %_err, "put failed; value not stored");
        }
    }

    /// Read and decrypt; absent and failed reads are both `None`.
    ///
    /// "Never set" and "corrupted" are indistinguishable here without the
    /// logs; use [`EncryptedStore::get`] for a typed result.
    pub fn get(&self, name: &str) -> Option<String> {
        match self.inner.get(name) {
            Ok(value) => value,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(name, error = %_err, "get failed; treating entry as absent");
                None
            },
        }
    }

    /// Delete; failures are logged and swallowed.
    pub fn remove(&self, name: &str) {
        if let Err(_err) = self.inner.remove(name) {
            #[cfg(feature = "tracing")]
            tracing::warn!(name, error = %_err, "remove failed");
        }
    }
}
