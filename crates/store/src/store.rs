//! Store boundary: typed `put` / `get` / `remove` over encrypted entries.

use {base64::Engine, cryptkv_storage::Storage};

use crate::{error::StoreError, gcm::AesGcmCipher, key::KeyManager, layout, traits::Cipher};

/// Encrypted key-value store.
///
/// Generic over [`Cipher`] but defaults to [`AesGcmCipher`]. Every operation
/// returns a typed result; [`LenientStore`](crate::compat::LenientStore)
/// wraps this type for callers that want the original never-throws contract.
pub struct EncryptedStore<S: Storage, C: Cipher = AesGcmCipher> {
    storage: S,
    cipher: C,
    keys: KeyManager,
}

impl<S: Storage> EncryptedStore<S, AesGcmCipher> {
    /// Create a store with the default AES-128-GCM cipher.
    pub fn new(storage: S) -> Self {
        Self::with_cipher(storage, AesGcmCipher)
    }
}

impl<S: Storage, C: Cipher> EncryptedStore<S, C> {
    /// Create a store with a custom cipher.
    pub fn with_cipher(storage: S, cipher: C) -> Self {
        Self {
            storage,
            cipher,
            keys: KeyManager::new(),
        }
    }

    /// Encrypt `value` and write it under `name`.
    ///
    /// Nothing is written if key retrieval or encryption fails.
    pub fn put(&self, name: &str, value: &str) -> Result<(), StoreError> {
        let key = self.keys.get_or_create(&self.storage)?;
        let encrypted = self
            .cipher
            .encrypt(&key, value.as_bytes(), entry_aad(name).as_bytes())?;

        // Prepend version tag.
        let mut blob = Vec::with_capacity(1 + encrypted.len());
        blob.push(self.cipher.version_tag());
        blob.extend_from_slice(&encrypted);

        let encoded = base64::engine::general_purpose::STANDARD.encode(blob);
        self.storage.put_string(&layout::data_slot(name), &encoded)?;
        self.storage.commit()?;
        Ok(())
    }

    /// Read and decrypt the entry under `name`. An absent name is `Ok(None)`.
    pub fn get(&self, name: &str) -> Result<Option<String>, StoreError> {
        let Some(encoded) = self.storage.get_string(&layout::data_slot(name))? else {
            return Ok(None);
        };

        let key = self.keys.get_or_create(&self.storage)?;
        let blob = base64::engine::general_purpose::STANDARD.decode(encoded)?;
        if blob.is_empty() {
            return Err(StoreError::Decryption("empty blob".to_string()));
        }

        let version = blob[0];
        if version != self.cipher.version_tag() {
            return Err(StoreError::Decryption(format!(
                "unsupported cipher version: {version:#04x}"
            )));
        }

        let plaintext = self
            .cipher
            .decrypt(&key, &blob[1..], entry_aad(name).as_bytes())?;
        let value =
            String::from_utf8(plaintext).map_err(|e| StoreError::Decryption(e.to_string()))?;
        Ok(Some(value))
    }

    /// Delete the entry under `name`. Removing an absent name is a no-op.
    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        self.storage.remove(&layout::data_slot(name))?;
        self.storage.commit()?;
        Ok(())
    }
}

/// AAD binding a ciphertext to its entry name.
fn entry_aad(name: &str) -> String {
    format!("entry:{name}")
}
