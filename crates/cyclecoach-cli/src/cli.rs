//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cyclecoach_llm::ModelSelector;
use std::path::PathBuf;

/// Cycle Coach - private symptom summaries with optional AI support.
#[derive(Debug, Parser)]
#[command(name = "cyclecoach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use (qwen, gemini, gpt-4, claude)
    #[arg(short, long, global = true)]
    pub model: Option<ModelSelector>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (compact JSON or bare text)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a summary locally without sending anything
    Summarize(TextArgs),

    /// Manage the API key
    Key(KeyArgs),

    /// Send the summary of a journal entry to the model
    Chat(TextArgs),

    /// Show a day's notes and chat log
    History(HistoryArgs),

    /// Save notes for a day
    Notes(NotesArgs),

    /// Encrypt the journal to a file
    Export(ExportArgs),

    /// Decrypt a file into the journal
    Import(ImportArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Free text argument.
#[derive(Debug, Parser)]
pub struct TextArgs {
    /// Journal entry text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    /// Words joined back into one entry.
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for key management.
#[derive(Debug, Parser)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,
}

/// Key management actions.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum KeyAction {
    /// Validate and store a key for the selected model
    Set {
        /// API key
        credential: String,
    },

    /// Show the stored key, masked
    Show,

    /// Forget the stored key
    Remove,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Day to show (YYYY-MM-DD, default today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the notes command.
#[derive(Debug, Parser)]
pub struct NotesArgs {
    /// Notes text
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Day the notes belong to (YYYY-MM-DD, default today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output file (default: cycle_data-<today>.qcycle)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Passphrase used to encrypt
    #[arg(short, long, env = "CYCLECOACH_PASSPHRASE", hide_env_values = true)]
    pub passphrase: String,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Encrypted file to read
    pub file: PathBuf,

    /// Passphrase used to decrypt
    #[arg(short, long, env = "CYCLECOACH_PASSPHRASE", hide_env_values = true)]
    pub passphrase: String,

    /// Replace the journal instead of merging
    #[arg(long)]
    pub replace: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["cyclecoach"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_summarize_joins_words() {
        let cli = Cli::parse_from(["cyclecoach", "summarize", "cramps", "since", "yesterday"]);
        match cli.command {
            Some(Command::Summarize(args)) => assert_eq!(args.joined(), "cramps since yesterday"),
            _ => panic!("Expected Summarize command"),
        }
    }

    #[test]
    fn test_global_model_after_subcommand() {
        let cli = Cli::parse_from(["cyclecoach", "key", "set", "sk-ant-x", "--model", "claude"]);
        assert_eq!(cli.model, Some(ModelSelector::Claude));
        match cli.command {
            Some(Command::Key(KeyArgs {
                action: KeyAction::Set { credential },
            })) => assert_eq!(credential, "sk-ant-x"),
            _ => panic!("Expected Key Set command"),
        }
    }

    #[test]
    fn test_unknown_model_rejected() {
        assert!(Cli::try_parse_from(["cyclecoach", "--model", "llama", "repl"]).is_err());
    }

    #[test]
    fn test_history_date() {
        let cli = Cli::parse_from(["cyclecoach", "history", "--date", "2026-10-18"]);
        match cli.command {
            Some(Command::History(args)) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 10, 18));
            }
            _ => panic!("Expected History command"),
        }
        assert!(Cli::try_parse_from(["cyclecoach", "history", "--date", "18/10/2026"]).is_err());
    }

    #[test]
    fn test_import_args() {
        let cli = Cli::parse_from([
            "cyclecoach",
            "import",
            "backup.qcycle",
            "--passphrase",
            "pw",
            "--replace",
        ]);
        match cli.command {
            Some(Command::Import(args)) => {
                assert_eq!(args.file, PathBuf::from("backup.qcycle"));
                assert!(args.replace);
            }
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_chat_requires_text() {
        assert!(Cli::try_parse_from(["cyclecoach", "chat"]).is_err());
    }
}
