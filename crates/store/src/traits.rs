//! Cipher trait for swappable encryption backends.

use crate::{error::StoreError, key::SymmetricKey};

/// Trait for the symmetric transform between plaintext and ciphertext bytes.
///
/// Implementations can be swapped without changing the rest of the store.
/// Each implementation has a unique version tag stored as the first byte of
/// the framed blob, so codecs can be told apart in a store's history.
pub trait Cipher: Send + Sync {
    /// Unique identifier for this cipher (first byte of the stored blob).
    fn version_tag(&self) -> u8;

    /// Encrypt `plaintext` under `key`.
    ///
    /// `aad` binds the ciphertext to its context (the entry name);
    /// non-authenticating ciphers accept and ignore it.
    fn encrypt(
        &self,
        key: &SymmetricKey,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, StoreError>;

    /// Decrypt a blob previously produced by [`encrypt`](Self::encrypt).
    fn decrypt(
        &self,
        key: &SymmetricKey,
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, StoreError>;
}
