//! Import of data written by the original flat-namespace store.
//!
//! The original layout kept everything in one namespace: the key
//! base64-encoded under `PRIVATE_KEY` and each entry as raw base64
//! AES-128-ECB ciphertext, with no version tag. `import_legacy` moves such
//! data into the current layout under a fresh key and the default codec.

use {base64::Engine, cryptkv_storage::Storage};

use crate::{
    error::StoreError,
    key::{SymmetricKey, decode_key},
    layout,
    legacy::LegacyAesEcbCipher,
    store::EncryptedStore,
    traits::Cipher,
};

/// Decrypt every entry of a legacy storage and re-encrypt it through `store`.
///
/// Returns the number of entries imported. Entries that fail to decode or
/// decrypt are skipped with a warning; a missing or corrupt legacy key is
/// fatal.
pub fn import_legacy<L, S, C>(legacy: &L, store: &EncryptedStore<S, C>) -> Result<usize, StoreError>
where
    L: Storage,
    S: Storage,
    C: Cipher,
{
    let key = load_legacy_key(legacy)?;
    let cipher = LegacyAesEcbCipher;

    let mut imported = 0;
    for name in legacy.names()? {
        if name == layout::LEGACY_KEY_SLOT {
            continue;
        }

        let Some(encoded) = legacy.get_string(&name)? else {
            continue;
        };

        let value = decode_blob(&encoded)
            .and_then(|blob| cipher.decrypt(&key, &blob, b""))
            .and_then(|bytes| {
                String::from_utf8(bytes).map_err(|e| StoreError::Decryption(e.to_string()))
            });

        match value {
            Ok(value) => {
                store.put(&name, &value)?;
                imported += 1;
            },
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(name, error = %_err, "skipping undecryptable legacy entry");
            },
        }
    }

    if imported > 0 {
        #[cfg(feature = "tracing")]
        tracing::info!(imported, "imported legacy entries");
    }

    Ok(imported)
}

/// Read and decode the legacy key slot.
fn load_legacy_key<L: Storage>(legacy: &L) -> Result<SymmetricKey, StoreError> {
    let encoded = legacy
        .get_string(layout::LEGACY_KEY_SLOT)?
        .ok_or_else(|| StoreError::KeyCorruption("legacy key slot is absent".to_string()))?;

    decode_key(&encoded)
}

/// Decode legacy base64, tolerating the line wraps the original encoder
/// inserted into long values.
fn decode_blob(encoded: &str) -> Result<Vec<u8>, StoreError> {
    let compact: String = encoded.split_whitespace().collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(StoreError::Base64)
}
