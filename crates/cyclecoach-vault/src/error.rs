//! Error types for the vault

use thiserror::Error;

/// Errors that can occur while sealing or opening a blob
#[derive(Error, Debug)]
pub enum VaultError {
    /// No passphrase supplied
    #[error("Passphrase required for encryption")]
    MissingPassphrase,

    /// Blob is empty, truncated, or not produced by this vault
    #[error("Invalid encrypted file format: {0}")]
    MalformedBlob(String),

    /// Authentication failed; almost always a wrong passphrase
    #[error("Decryption failed: wrong passphrase or corrupted data")]
    WrongPassphrase,

    /// Plaintext could not be (de)serialized as the expected record
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Cipher failure while encrypting
    #[error("Encryption failed: {0}")]
    Cipher(String),
}

impl From<serde_json::Error> for VaultError {
    fn from(e: serde_json::Error) -> Self {
        VaultError::Serialization(e.to_string())
    }
}
