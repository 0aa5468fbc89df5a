//! Legacy AES-128-ECB codec for data written by the original store.
//!
//! ECB with PKCS#7 padding: deterministic, unauthenticated, no nonce. Two
//! encryptions of the same plaintext are byte-identical, and nothing detects
//! tampering or a blob moved between entries. Kept only so old data can be
//! imported (see [`crate::migration`]); never the default codec.

use {
    aes::{
        Aes128,
        cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, block_padding::Pkcs7},
    },
    ecb::{Decryptor, Encryptor},
};

use crate::{error::StoreError, key::SymmetricKey, traits::Cipher};

/// Version tag for the legacy AES-128-ECB cipher.
pub const VERSION_TAG: u8 = 0x00;

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// AES-128-ECB with PKCS#7 padding.
///
/// `aad` is accepted and ignored — the mode authenticates nothing.
pub struct LegacyAesEcbCipher;

impl Cipher for LegacyAesEcbCipher {
    fn version_tag(&self) -> u8 {
        VERSION_TAG
    }

    fn encrypt(
        &self,
        key: &SymmetricKey,
        plaintext: &[u8],
        _aad: &[u8],
    ) -> Result<Vec<u8>, StoreError> {
        let enc = Encryptor::<Aes128>::new(key.as_bytes().into());
        Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(
        &self,
        key: &SymmetricKey,
        ciphertext: &[u8],
        _aad: &[u8],
    ) -> Result<Vec<u8>, StoreError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(StoreError::Decryption(format!(
                "ciphertext length {} is not a positive multiple of the {BLOCK_LEN}-byte block",
                ciphertext.len()
            )));
        }

        let dec = Decryptor::<Aes128>::new(key.as_bytes().into());
        dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|e| StoreError::Decryption(format!("bad padding: {e}")))
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
    fn round_trip() {
        let cipher = LegacyAesEcbCipher;
        let key = test_key(0x42);
        let plaintext = b"abc123";

        let encrypted = cipher.encrypt(&key, plaintext, b"").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"").unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn mode_is_deterministic() {
        let cipher = LegacyAesEcbCipher;
        let key = test_key(0x42);
        let plaintext = b"same input";

        let enc1 = cipher.encrypt(&key, plaintext, b"").unwrap();
        let enc2 = cipher.encrypt(&key, plaintext, b"").unwrap();
        assert_eq!(enc1, enc2);
    }

    #[test]
    fn padding_fills_whole_blocks() {
        let cipher = LegacyAesEcbCipher;
        let key = test_key(0x42);

        // PKCS#7 always pads, so n bytes become (n / 16 + 1) * 16.
        for (input_len, expected) in [(0usize, 16), (15, 16), (16, 32), (17, 32)] {
            let encrypted = cipher.encrypt(&key, &vec![0xCD; input_len], b"").unwrap();
            assert_eq!(encrypted.len(), expected);
        }
    }

    #[test]
    fn non_block_multiple_fails() {
        let cipher = LegacyAesEcbCipher;
        let result = cipher.decrypt(&test_key(0x42), &[0u8; 17], b"");
        assert!(matches!(result, Err(StoreError::Decryption(_))));
    }

    #[test]
    fn empty_ciphertext_fails() {
        let cipher = LegacyAesEcbCipher;
        let result = cipher.decrypt(&test_key(0x42), b"", b"");
        assert!(matches!(result, Err(StoreError::Decryption(_))));
    }

    #[test]
    fn aad_is_ignored() {
        let cipher = LegacyAesEcbCipher;
        let key = test_key(0x42);

        let encrypted = cipher.encrypt(&key, b"secret", b"entry:a").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"entry:b").unwrap();
        assert_eq!(decrypted, b"secret");
    }

    #[test]
    fn empty_plaintext_round_trip() {
        let cipher = LegacyAesEcbCipher;
        let key = test_key(0x42);

        let encrypted = cipher.encrypt(&key, b"", b"").unwrap();
        let decrypted = cipher.decrypt(&key, &encrypted, b"").unwrap();
        assert!(decrypted.is_empty());
    }

    #[test]
    fn version_tag_is_0x00() {
        assert_eq!(LegacyAesEcbCipher.version_tag(), 0x00);
    }
}
