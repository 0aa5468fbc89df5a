//! AES-128-GCM implementation of the [`Cipher`] trait.

use {
    aes_gcm::{
        Aes128Gcm, Nonce,
        aead::{Aead, KeyInit, Payload},
    },
    rand::RngCore,
};

use crate::{error::StoreError, key::SymmetricKey, traits::Cipher};

/// Version tag for the AES-128-GCM cipher.
pub const VERSION_TAG: u8 = 0x01;

/// Nonce size for AES-GCM (12 bytes).
const NONCE_LEN: usize = 12;

/// AES-128-GCM AEAD cipher, the default codec.
///
/// Encrypted blob layout: `[nonce: 12 bytes][ciphertext + GCM tag: N + 16 bytes]`.
/// A fresh random nonce is drawn per call, so equal plaintexts produce
/// different blobs.
pub struct AesGcmCipher;

impl Cipher for AesGcmCipher {
    fn version_tag(&self) -> u8 {
        VERSION_TAG
    }

    fn encrypt(
        &self,
        key: &SymmetricKey,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, StoreError> {
        let cipher = Aes128Gcm::new(key.as_bytes().into());

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, Payload {
                msg: plaintext,
                aad,
            })
            .map_err(|e| StoreError::Encryption(e.to_string()))?;

        let mut result = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);
        Ok(result)
    }

    fn decrypt(
        &self,
        key: &SymmetricKey,
        ciphertext: &[u8],
        aad: &[u8],
    ) -> Result<Vec<u8>, StoreError> {
        if ciphertext.len() < NONCE_LEN + 16 {
            return Err(StoreError::Decryption("ciphertext too short".to_string()));
        }

        let (nonce_bytes, ct) = ciphertext.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);
        let cipher = Aes128Gcm::new(key.as_bytes().into());

        cipher
            .decrypt(nonce, Payload { msg: ct, aad })
            .map_err(|e| StoreError::Decryption(e.to_string()))
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::key::KEY_LEN};

    fn test_key(byte: u8) -> SymmetricKey {
        SymmetricKey::from_bytes([byte; KEY_LEN])
    }

    #[test]
    fn round_trip_no_aad() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);
        let plaintext = b"hello store";

        let encrypted = cipher.encrypt(&key, plaintext, b"").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"").unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn round_trip_with_aad() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);
        let plaintext = b"secret data";
        let aad = b"entry:token";

        let encrypted = cipher.encrypt(&key, plaintext, aad).unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, aad).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn wrong_key_fails() {
        let cipher = AesGcmCipher;
        let plaintext = b"secret";

        let encrypted = cipher.encrypt(&test_key(0x42), plaintext, b"").unwrap();
        let result = cipher.decrypt(&test_key(0x43), &encrypted, b"");
        assert!(result.is_err());
    }

    #[test]
    fn wrong_aad_fails() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);

        let encrypted = cipher.encrypt(&key, b"secret", b"correct").unwrap();
        let result = cipher.decrypt(&key, &encrypted, b"wrong");
        assert!(result.is_err());
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);

        let mut encrypted = cipher.encrypt(&key, b"secret", b"").unwrap();
        let last = encrypted.len() - 1;
        encrypted[last] ^= 0x01;
        let result = cipher.decrypt(&key, &encrypted, b"");
        assert!(result.is_err());
    }

    #[test]
    fn too_short_ciphertext_fails() {
        let cipher = AesGcmCipher;
        let result = cipher.decrypt(&test_key(0x42), &[0u8; 20], b"");
        assert!(result.is_err());
    }

    #[test]
    fn different_nonces_produce_different_ciphertexts() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);
        let plaintext = b"same input";

        let enc1 = cipher.encrypt(&key, plaintext, b"").unwrap();
        let enc2 = cipher.encrypt(&key, plaintext, b"").unwrap();
        assert_ne!(enc1, enc2);
    }

    #[test]
    fn version_tag_is_0x01() {
        assert_eq!(AesGcmCipher.version_tag(), 0x01);
    }

    #[test]
    fn empty_plaintext_round_trip() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);

        let encrypted = cipher.encrypt(&key, b"", b"").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"").unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn large_plaintext_round_trip() {
        let cipher = AesGcmCipher;
        let key = test_key(0x42);
        let plaintext = vec![0xAB; 100_000];

        let encrypted = cipher.encrypt(&key, &plaintext, b"").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"").unwrap();
        assert_eq!(decrypted, plaintext);
    }
}
