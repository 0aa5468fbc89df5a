//! Store error types.

use cryptkv_storage::StorageError;

/// Errors produced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The random source needed to mint a key is unavailable.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The stored key slot does not decode to key material of the right size.
    #[error("stored key is corrupt: {0}")]
    KeyCorruption(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (tampered blob, wrong key, invalid decoded text).
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Base64 decoding failed.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Generic error wrapper.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}
