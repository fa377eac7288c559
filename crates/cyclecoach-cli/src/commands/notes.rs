//! Notes command implementation.

use crate::cli::NotesArgs;
use crate::error::{CliError, Result};
use crate::journal::JournalStore;
use crate::output::Formatter;
use chrono::Local;

/// Execute the notes command.
pub fn execute_notes(args: NotesArgs, journal: &mut JournalStore, formatter: &Formatter) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let notes = args.text.join(" ");
    if notes.trim().is_empty() {
        return Err(CliError::InvalidInput("Notes cannot be empty".to_string()));
    }

    journal.set_notes(date, notes.trim());
    journal.save()?;

    println!("{}", formatter.success(&format!("Notes saved for {}", date)));
    Ok(())
}
