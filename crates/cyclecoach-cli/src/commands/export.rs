//! Export command implementation.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::journal::JournalStore;
use crate::output::Formatter;
use chrono::{Local, NaiveDate};
use cyclecoach_vault::{encrypt_record, export_file_name, PassphraseVault};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Encrypt the whole journal and write it to `out` (or the dated default name).
pub fn export_journal(
    journal: &JournalStore,
    vault: &PassphraseVault,
    passphrase: &str,
    out: Option<&Path>,
    today: NaiveDate,
) -> Result<PathBuf> {
    let blob = encrypt_record(vault, journal.days(), passphrase)?;
    let path = match out {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_file_name(today)),
    };

    fs::write(&path, blob)?;
    info!(days = journal.days().len(), path = %path.display(), "Exported journal");
    Ok(path)
}

/// Execute the export command.
pub fn execute_export(args: ExportArgs, journal: &JournalStore, formatter: &Formatter) -> Result<()> {
    let path = export_journal(
        journal,
        &PassphraseVault::new(),
        &args.passphrase,
        args.out.as_deref(),
        Local::now().date_naive(),
    )?;

    println!(
        "{}",
        formatter.success(&format!(
            "Exported {} day(s) to {}",
            journal.days().len(),
            path.display()
        ))
    );
    Ok(())
}
