//! Cycle Coach Vault
//!
//! Passphrase-based encryption for exporting and importing local data.
//! Never used on the extraction path.
//!
//! # Example Usage
//!
//! ```
//! use cyclecoach_vault::{decrypt_record, encrypt_record, PassphraseVault};
//! use std::collections::BTreeMap;
//!
//! let vault = PassphraseVault::new().with_iterations(1_000);
//! let mut notes = BTreeMap::new();
//! notes.insert("2026-10-19".to_string(), "rest day".to_string());
//!
//! let blob = encrypt_record(&vault, &notes, "passphrase").unwrap();
//! let back: BTreeMap<String, String> = decrypt_record(&vault, &blob, "passphrase").unwrap();
//! assert_eq!(back, notes);
//! ```

#![warn(missing_docs)]

mod error;
mod vault;

pub use error::VaultError;
pub use vault::{PassphraseVault, BLOB_PREFIX, DEFAULT_ITERATIONS};

use chrono::NaiveDate;
use cyclecoach_domain::traits::Vault;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// File extension for exported data
pub const EXPORT_EXTENSION: &str = "qcycle";

/// Serialize a record as JSON and seal it
pub fn encrypt_record<V, T>(vault: &V, record: &T, passphrase: &str) -> Result<String, VaultError>
where
    V: Vault<Error = VaultError>,
    T: Serialize + ?Sized,
{
    if passphrase.is_empty() {
        return Err(VaultError::MissingPassphrase);
    }
    let json = serde_json::to_vec(record)?;
    vault.seal(&json, passphrase)
}

/// Open a blob and deserialize the JSON record inside
pub fn decrypt_record<V, T>(vault: &V, blob: &str, passphrase: &str) -> Result<T, VaultError>
where
    V: Vault<Error = VaultError>,
    T: DeserializeOwned,
{
    let json = vault.open(blob, passphrase)?;
    Ok(serde_json::from_slice(&json)?)
}

/// Export file name for a given day, e.g. `cycle_data-2026-10-19.qcycle`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("cycle_data-{}.{}", date.format("%Y-%m-%d"), EXPORT_EXTENSION)
}
