//! Cycle Coach CLI library.
//!
//! Client shell around the extractor, the model gateway and the vault:
//! configuration, session state, the local journal, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod journal;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use journal::JournalStore;
pub use output::Formatter;
pub use session::Session;
