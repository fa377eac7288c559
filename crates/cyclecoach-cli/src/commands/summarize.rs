//! Summarize command implementation.

use crate::cli::TextArgs;
use crate::error::Result;
use crate::output::Formatter;
use cyclecoach_extractor::Extractor;

/// Execute the summarize command. Nothing leaves the device.
pub fn execute_summarize(args: TextArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let summary = extractor.extract(&args.joined());
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
