//! Symmetric key lifecycle: lazy generation, persistence, retrieval.

use {
    base64::Engine,
    cryptkv_storage::Storage,
    rand::TryRngCore,
    std::sync::{Mutex, PoisonError},
    zeroize::Zeroizing,
};

use crate::{error::StoreError, layout};

/// Key length in bytes (AES-128).
pub const KEY_LEN: usize = 16;

/// The store's single symmetric key. Wiped from memory on drop.
#[derive(Clone)]
pub struct SymmetricKey(Zeroizing<[u8; KEY_LEN]>);

impl SymmetricKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material must never reach logs.
        f.write_str("SymmetricKey(..)")
    }
}

/// Owns creation, persistence, and retrieval of the single symmetric key.
///
/// Creation is serialized by an internal mutex so exactly one
/// generation-and-persist sequence wins per store lifetime, and the loaded
/// key is cached so later calls never touch storage.
#[derive(Default)]
pub struct KeyManager {
    cached: Mutex<Option<SymmetricKey>>,
}

impl KeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the active key, generating and persisting one on first use.
    ///
    /// A present key slot that fails to decode to exactly [`KEY_LEN`] bytes
    /// is a [`StoreError::KeyCorruption`], never a silent regeneration.
    pub fn get_or_create<S: Storage>(&self, storage: &S) -> Result<SymmetricKey, StoreError> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(key) = cached.as_ref() {
            return Ok(key.clone());
        }

        let key = match storage.get_string(layout::KEY_SLOT)? {
            Some(encoded) => decode_key(&encoded)?,
            None => {
                let key = generate_key()?;
                let encoded = base64::engine::general_purpose::STANDARD.encode(key.as_bytes());

                // The key slot is the only write on the generation path.
                storage.put_string(layout::KEY_SLOT, &encoded)?;
                storage.commit()?;

                #[cfg(feature = "tracing")]
                tracing::info!("generated new symmetric key");

                key
            },
        };

        *cached = Some(key.clone());
        Ok(key)
    }
}

/// Generate a fresh key from the OS entropy source.
fn generate_key() -> Result<SymmetricKey, StoreError> {
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    rand::rngs::OsRng
        .try_fill_bytes(bytes.as_mut())
        .map_err(|e| StoreError::KeyGeneration(e.to_string()))?;
    Ok(SymmetricKey(bytes))
}

/// Decode a stored base64 key, validating its length.
pub(crate) fn decode_key(encoded: &str) -> Result<SymmetricKey, StoreError> {
    let raw = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| StoreError::KeyCorruption(format!("invalid base64: {e}")))?;

    if raw.len() != KEY_LEN {
        return Err(StoreError::KeyCorruption(format!(
            "expected {KEY_LEN} bytes, found {}",
            raw.len()
        )));
    }

    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    bytes.copy_from_slice(&raw);
    Ok(SymmetricKey(bytes))
}
