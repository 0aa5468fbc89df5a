//! Encrypted key-value store over a string-keyed storage backend.
//!
//! Values are encrypted with a single AES-128 key that is generated on first
//! use and persisted, base64-encoded, in a reserved metadata slot of the
//! same backend. The default codec is AES-128-GCM with a fresh random nonce
//! per write; the original fixed-mode AES-ECB scheme survives only as a
//! labeled legacy codec for importing old data. Trait-based [`Cipher`]
//! design allows swapping the encryption backend.

pub mod compat;
pub mod error;
pub mod gcm;
pub mod key;
pub mod layout;
pub mod legacy;
pub mod migration;
pub mod store;
pub mod traits;

pub use {
    compat::LenientStore,
    error::StoreError,
    gcm::AesGcmCipher,
    key::{KEY_LEN, KeyManager, SymmetricKey},
    legacy::LegacyAesEcbCipher,
    store::EncryptedStore,
    traits::Cipher,
};
