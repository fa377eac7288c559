//! AES-256-GCM vault keyed by a passphrase
//!
//! Blob layout: `qcycle1:` followed by base64 of `salt(16) | nonce(12) | ciphertext`.
//! The key is derived with PBKDF2-HMAC-SHA256 over the salt.

use crate::error::VaultError;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cyclecoach_domain::traits::Vault;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::debug;

/// Text prefix identifying the blob format version
pub const BLOB_PREFIX: &str = "qcycle1:";

/// Default PBKDF2 iteration count
pub const DEFAULT_ITERATIONS: u32 = 100_000;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;

/// Passphrase-based vault
///
/// # Examples
///
/// ```
/// use cyclecoach_domain::traits::Vault;
/// use cyclecoach_vault::PassphraseVault;
///
/// let vault = PassphraseVault::new().with_iterations(1_000);
/// let blob = vault.seal(b"notes", "correct horse").unwrap();
/// assert_eq!(vault.open(&blob, "correct horse").unwrap(), b"notes");
/// assert!(vault.open(&blob, "wrong").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PassphraseVault {
    iterations: u32,
}

impl PassphraseVault {
    /// Create a vault with the default iteration count
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Override the PBKDF2 iteration count
    ///
    /// Blobs can only be opened with the count they were sealed with.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    fn cipher(&self, passphrase: &str, salt: &[u8]) -> Aes256Gcm {
        let mut key = [0u8; KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, self.iterations, &mut key);
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key))
    }
}

impl Default for PassphraseVault {
    fn default() -> Self {
        Self::new()
    }
}

impl Vault for PassphraseVault {
    type Error = VaultError;

    fn seal(&self, plaintext: &[u8], passphrase: &str) -> Result<String, Self::Error> {
        if passphrase.is_empty() {
            return Err(VaultError::MissingPassphrase);
        }

        let mut salt = [0u8; SALT_LEN];
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut salt);
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = self
            .cipher(passphrase, &salt)
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| VaultError::Cipher(e.to_string()))?;

        let mut payload = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&salt);
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);

        debug!(plaintext_len = plaintext.len(), "Sealed vault blob");
        Ok(format!("{}{}", BLOB_PREFIX, STANDARD.encode(payload)))
    }

    fn open(&self, blob: &str, passphrase: &str) -> Result<Vec<u8>, Self::Error> {
        let blob = blob.trim();
        if blob.is_empty() {
            return Err(VaultError::MalformedBlob("empty input".to_string()));
        }
        if passphrase.is_empty() {
            return Err(VaultError::MissingPassphrase);
        }

        let encoded = blob
            .strip_prefix(BLOB_PREFIX)
            .ok_or_else(|| VaultError::MalformedBlob("unknown format".to_string()))?;
        let payload = STANDARD
            .decode(encoded)
            .map_err(|e| VaultError::MalformedBlob(e.to_string()))?;

        if payload.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(VaultError::MalformedBlob("truncated data".to_string()));
        }

        let (salt, rest) = payload.split_at(SALT_LEN);
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

        self.cipher(passphrase, salt)
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| VaultError::WrongPassphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault() -> PassphraseVault {
        PassphraseVault::new().with_iterations(1_000)
    }

    #[test]
    fn test_blob_has_prefix() {
        let blob = vault().seal(b"hello", "pass").unwrap();
        assert!(blob.starts_with(BLOB_PREFIX));
    }

    #[test]
    fn test_each_seal_is_unique() {
        let a = vault().seal(b"hello", "pass").unwrap();
        let b = vault().seal(b"hello", "pass").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_wrong_passphrase() {
        let blob = vault().seal(b"hello", "pass").unwrap();
        assert!(matches!(vault().open(&blob, "nope"), Err(VaultError::WrongPassphrase)));
    }

    #[test]
    fn test_iteration_mismatch_fails() {
        let blob = vault().seal(b"hello", "pass").unwrap();
        let other = PassphraseVault::new().with_iterations(2_000);
        assert!(matches!(other.open(&blob, "pass"), Err(VaultError::WrongPassphrase)));
    }

    #[test]
    fn test_missing_passphrase() {
        assert!(matches!(vault().seal(b"x", ""), Err(VaultError::MissingPassphrase)));
        let blob = vault().seal(b"x", "pass").unwrap();
        assert!(matches!(vault().open(&blob, ""), Err(VaultError::MissingPassphrase)));
    }

    #[test]
    fn test_malformed_blobs() {
        for blob in ["", "   ", "U2FsdGVkX1+abc", "qcycle1:!!!not-base64", "qcycle1:AAAA"] {
            assert!(
                matches!(vault().open(blob, "pass"), Err(VaultError::MalformedBlob(_))),
                "{blob:?}"
            );
        }
    }

    #[test]
    fn test_tampered_ciphertext() {
        let blob = vault().seal(b"hello world", "pass").unwrap();
        let mut payload = STANDARD.decode(&blob[BLOB_PREFIX.len()..]).unwrap();
        let last = payload.len() - 1;
        payload[last] ^= 0x01;
        let tampered = format!("{}{}", BLOB_PREFIX, STANDARD.encode(payload));
        assert!(matches!(vault().open(&tampered, "pass"), Err(VaultError::WrongPassphrase)));
    }

    #[test]
    fn test_empty_plaintext() {
        let blob = vault().seal(b"", "pass").unwrap();
        assert!(vault().open(&blob, "pass").unwrap().is_empty());
    }
}
