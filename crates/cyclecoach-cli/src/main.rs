//! Cycle Coach CLI - private symptom summaries with optional AI support.

use clap::Parser;
use cyclecoach_cli::commands;
use cyclecoach_cli::repl::{self, ReplContext};
use cyclecoach_cli::{Cli, Command, Config, Formatter, JournalStore, Session};
use cyclecoach_extractor::Extractor;
use cyclecoach_llm::HttpGateway;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr, stdout is command output)
    let filter = EnvFilter::try_from_env("CYCLECOACH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> cyclecoach_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config from the given path or the default location
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let mut session = Session::from_config(&config, cli.model);
    let extractor = Extractor::from_config(&config.lexicon)?;

    match cli.command {
        Some(Command::Summarize(args)) => {
            commands::execute_summarize(args, &extractor, &formatter)?;
        }
        Some(Command::Key(args)) => {
            commands::execute_key(args, &mut session, &mut config, &formatter)?;
        }
        Some(Command::History(args)) => {
            let journal = JournalStore::open(config.journal_path()?)?;
            commands::execute_history(args, &journal, &formatter)?;
        }
        Some(Command::Notes(args)) => {
            let mut journal = JournalStore::open(config.journal_path()?)?;
            commands::execute_notes(args, &mut journal, &formatter)?;
        }
        Some(Command::Export(args)) => {
            let journal = JournalStore::open(config.journal_path()?)?;
            commands::execute_export(args, &journal, &formatter)?;
        }
        Some(Command::Import(args)) => {
            let mut journal = JournalStore::open(config.journal_path()?)?;
            commands::execute_import(args, &mut journal, &formatter)?;
        }
        Some(Command::Chat(args)) => {
            let mut journal = JournalStore::open(config.journal_path()?)?;
            let gateway = HttpGateway::new()?;
            commands::execute_chat(args, &session, &extractor, &gateway, &mut journal, &formatter)
                .await?;
        }
        None | Some(Command::Repl) => {
            let mut journal = JournalStore::open(config.journal_path()?)?;
            let gateway = HttpGateway::new()?;
            repl::run_repl(ReplContext {
                session: &mut session,
                config: &mut config,
                journal: &mut journal,
                extractor: &extractor,
                gateway: &gateway,
                formatter: &formatter,
            })
            .await?;
        }
    }

    Ok(())
}
