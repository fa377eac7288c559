//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain model and the crates
//! that implement extraction and storage protection.

use crate::Summary;

/// Trait for turning free text into a [`Summary`]
///
/// Implemented by the application layer (cyclecoach-extractor).
/// Extraction is total: there is no error type.
pub trait SummaryExtractor {
    /// Extract a summary from a raw journal entry
    fn extract(&self, text: &str) -> Summary;
}

/// Trait for passphrase-based protection of exported data
///
/// Implemented by the infrastructure layer (cyclecoach-vault)
pub trait Vault {
    /// Error type for vault operations
    type Error;

    /// Encrypt plaintext bytes into an opaque text blob
    fn seal(&self, plaintext: &[u8], passphrase: &str) -> Result<String, Self::Error>;

    /// Decrypt a blob produced by [`Vault::seal`]
    ///
    /// Fails on a wrong passphrase or a malformed blob.
    fn open(&self, blob: &str, passphrase: &str) -> Result<Vec<u8>, Self::Error>;
}
