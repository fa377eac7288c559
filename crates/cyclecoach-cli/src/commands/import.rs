//! Import command implementation.

use crate::cli::ImportArgs;
use crate::error::Result;
use crate::journal::{JournalData, JournalStore};
use crate::output::Formatter;
use cyclecoach_vault::{decrypt_record, PassphraseVault};
use std::fs;
use std::path::Path;
use tracing::info;

/// Decrypt `file` and merge it into the journal (or replace it), then save.
///
/// Returns the number of days imported. The journal is untouched on error.
pub fn import_journal(
    journal: &mut JournalStore,
    vault: &PassphraseVault,
    file: &Path,
    passphrase: &str,
    replace: bool,
) -> Result<usize> {
    let blob = fs::read_to_string(file)?;
    let incoming: JournalData = decrypt_record(vault, &blob, passphrase)?;

    let count = journal.merge(incoming, replace);
    journal.save()?;
    info!(days = count, replace, "Imported journal");
    Ok(count)
}

/// Execute the import command.
pub fn execute_import(args: ImportArgs, journal: &mut JournalStore, formatter: &Formatter) -> Result<()> {
    let count = import_journal(
        journal,
        &PassphraseVault::new(),
        &args.file,
        &args.passphrase,
        args.replace,
    )?;

    let action = if args.replace { "Replaced journal with" } else { "Merged" };
    println!("{}", formatter.success(&format!("{} {} day(s)", action, count)));
    Ok(())
}
