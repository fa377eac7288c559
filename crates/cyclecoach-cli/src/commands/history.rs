//! History command implementation.

use crate::cli::HistoryArgs;
use crate::error::Result;
use crate::journal::JournalStore;
use crate::output::Formatter;
use chrono::Local;

/// Execute the history command.
pub fn execute_history(args: HistoryArgs, journal: &JournalStore, formatter: &Formatter) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    println!("{}", formatter.format_day(date, journal.day(date))?);
    Ok(())
}
