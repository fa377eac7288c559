//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Plain lines are chat turns. Lines starting with `/` are commands.

use crate::cli::{HistoryArgs, KeyAction, KeyArgs, NotesArgs, TextArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::journal::JournalStore;
use crate::output::Formatter;
use crate::session::Session;
use chrono::NaiveDate;
use cyclecoach_extractor::Extractor;
use cyclecoach_llm::{LlmGateway, ModelSelector};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;

/// Everything a REPL turn can touch.
pub struct ReplContext<'a> {
    /// Key and model
    pub session: &'a mut Session,
    /// Loaded configuration
    pub config: &'a mut Config,
    /// Local journal
    pub journal: &'a mut JournalStore,
    /// Summary extractor
    pub extractor: &'a Extractor,
    /// Model gateway
    pub gateway: &'a dyn LlmGateway,
    /// Output formatter
    pub formatter: &'a Formatter,
}

/// Run the interactive REPL.
pub async fn run_repl(ctx: ReplContext<'_>) -> Result<()> {
    let ReplContext {
        session,
        config,
        journal,
        extractor,
        gateway,
        formatter,
    } = ctx;

    println!(
        "{}",
        formatter.info("Cycle Coach - Describe how you feel, or type /help for commands")
    );
    if session.credential().is_none() {
        println!(
            "{}",
            formatter.warning("No API key yet. Use /key set <key> before chatting.")
        );
    }
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = format!("cyclecoach ({})> ", session.model());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let command = match parse_repl_line(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                        continue;
                    }
                };

                if let Some(entry) = history_entry(&command) {
                    editor.add_history_entry(entry).ok();
                }

                let result = match command {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplCommand::Help => {
                        print_help(formatter);
                        Ok(())
                    }
                    ReplCommand::Chat(text) => {
                        commands::execute_chat(
                            TextArgs { text: vec![text] },
                            session,
                            extractor,
                            gateway,
                            journal,
                            formatter,
                        )
                        .await
                    }
                    ReplCommand::Summarize(text) => commands::execute_summarize(
                        TextArgs { text: vec![text] },
                        extractor,
                        formatter,
                    ),
                    ReplCommand::History(date) => {
                        commands::execute_history(HistoryArgs { date }, journal, formatter)
                    }
                    ReplCommand::Notes { date, text } => commands::execute_notes(
                        NotesArgs {
                            text: vec![text],
                            date,
                        },
                        journal,
                        formatter,
                    ),
                    ReplCommand::Key(action) => {
                        commands::execute_key(KeyArgs { action }, session, config, formatter)
                    }
                    ReplCommand::Model(model) => select_model(model, session, config, formatter),
                };

                if let Err(e) = result {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use /exit to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Chat(String),
    Summarize(String),
    History(Option<NaiveDate>),
    Notes {
        date: Option<NaiveDate>,
        text: String,
    },
    Key(KeyAction),
    Model(ModelSelector),
}

/// Parse a REPL line.
fn parse_repl_line(line: &str) -> Result<ReplCommand> {
    let Some(command) = line.strip_prefix('/') else {
        return Ok(ReplCommand::Chat(line.to_string()));
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match name {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "summarize" | "s" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput("Usage: /summarize <text>".to_string()));
            }
            Ok(ReplCommand::Summarize(args.join(" ")))
        }
        "history" | "h" => match args.first() {
            None => Ok(ReplCommand::History(None)),
            Some(raw) => Ok(ReplCommand::History(Some(parse_date(raw)?))),
        },
        "notes" | "n" => parse_notes_command(args),
        "key" => parse_key_command(args),
        "model" => {
            let raw = args
                .first()
                .ok_or_else(|| CliError::InvalidInput("Usage: /model <qwen|gemini|gpt-4|claude>".to_string()))?;
            ModelSelector::parse(raw)
                .map(ReplCommand::Model)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown model: {}", raw)))
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: /{}. Type /help for available commands.",
            name
        ))),
    }
}

/// Line to remember for a command. Journal text and keys never reach the history file.
fn history_entry(command: &ReplCommand) -> Option<String> {
    let entry = match command {
        ReplCommand::Chat(_) => return None,
        ReplCommand::Exit => "/exit".to_string(),
        ReplCommand::Help => "/help".to_string(),
        ReplCommand::Summarize(_) => "/summarize ".to_string(),
        ReplCommand::History(None) => "/history".to_string(),
        ReplCommand::History(Some(date)) => format!("/history {}", date),
        ReplCommand::Notes { date: None, .. } => "/notes ".to_string(),
        ReplCommand::Notes { date: Some(date), .. } => format!("/notes {} ", date),
        ReplCommand::Key(KeyAction::Set { .. }) => "/key set ".to_string(),
        ReplCommand::Key(KeyAction::Show) => "/key show".to_string(),
        ReplCommand::Key(KeyAction::Remove) => "/key remove".to_string(),
        ReplCommand::Model(model) => format!("/model {}", model.as_str()),
    };
    Some(entry)
}

fn parse_notes_command(args: &[&str]) -> Result<ReplCommand> {
    let (date, rest) = match args.first().map(|raw| raw.parse::<NaiveDate>()) {
        Some(Ok(date)) => (Some(date), &args[1..]),
        _ => (None, args),
    };

    if rest.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: /notes [YYYY-MM-DD] <text>".to_string(),
        ));
    }

    Ok(ReplCommand::Notes {
        date,
        text: rest.join(" "),
    })
}

fn parse_key_command(args: &[&str]) -> Result<ReplCommand> {
    let action = match args {
        [] | ["show"] => KeyAction::Show,
        ["remove"] => KeyAction::Remove,
        ["set", credential] => KeyAction::Set {
            credential: credential.to_string(),
        },
        _ => {
            return Err(CliError::InvalidInput(
                "Usage: /key [show | set <key> | remove]".to_string(),
            ))
        }
    };
    Ok(ReplCommand::Key(action))
}

/// Switch model; a key for the previous model is dropped from the session and config.
fn select_model(
    model: ModelSelector,
    session: &mut Session,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    session.select_model(model);
    config.model = model;
    if session.credential().is_none() {
        config.credential = None;
    }
    config.save()?;

    println!("{}", formatter.success(&format!("Model set to {}", model.label())));
    if session.credential().is_none() {
        println!("{}", formatter.info(&format!("Set a key: {}", model.key_hint())));
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    raw.parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid date '{}'. Expected YYYY-MM-DD", raw)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::app_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <text>                         - Send the summary of <text> to the model");
    println!("  /summarize <text>              - Show the summary only (nothing is sent)");
    println!("  /history [YYYY-MM-DD]          - Show notes and chat for a day");
    println!("  /notes [YYYY-MM-DD] <text>     - Save notes for a day");
    println!("  /key [show|set <key>|remove]   - Manage the API key");
    println!("  /model <name>                  - Switch model (qwen, gemini, gpt-4, claude)");
    println!("  /help, /?                      - Show this help");
    println!("  /exit, /quit, /q               - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_chat() {
        assert_eq!(
            parse_repl_line("cramps since yesterday").unwrap(),
            ReplCommand::Chat("cramps since yesterday".to_string())
        );
    }

    #[test]
    fn test_basic_commands() {
        assert_eq!(parse_repl_line("/exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_line("/?").unwrap(), ReplCommand::Help);
        assert_eq!(
            parse_repl_line("/summarize bloating and sad").unwrap(),
            ReplCommand::Summarize("bloating and sad".to_string())
        );
        assert!(parse_repl_line("/summarize").is_err());
        assert!(parse_repl_line("/").is_err());
        assert!(parse_repl_line("/dance").is_err());
    }

    #[test]
    fn test_history_command() {
        assert_eq!(parse_repl_line("/history").unwrap(), ReplCommand::History(None));
        assert_eq!(
            parse_repl_line("/history 2026-10-18").unwrap(),
            ReplCommand::History(NaiveDate::from_ymd_opt(2026, 10, 18))
        );
        assert!(parse_repl_line("/history yesterday").is_err());
    }

    #[test]
    fn test_notes_command() {
        assert_eq!(
            parse_repl_line("/notes 2026-10-18 heavy flow").unwrap(),
            ReplCommand::Notes {
                date: NaiveDate::from_ymd_opt(2026, 10, 18),
                text: "heavy flow".to_string(),
            }
        );
        assert_eq!(
            parse_repl_line("/notes slept well").unwrap(),
            ReplCommand::Notes {
                date: None,
                text: "slept well".to_string(),
            }
        );
        assert!(parse_repl_line("/notes 2026-10-18").is_err());
    }

    #[test]
    fn test_key_command() {
        assert_eq!(parse_repl_line("/key").unwrap(), ReplCommand::Key(KeyAction::Show));
        assert_eq!(
            parse_repl_line("/key set sk-or-v1-abc").unwrap(),
            ReplCommand::Key(KeyAction::Set {
                credential: "sk-or-v1-abc".to_string()
            })
        );
        assert_eq!(parse_repl_line("/key remove").unwrap(), ReplCommand::Key(KeyAction::Remove));
        assert!(parse_repl_line("/key set").is_err());
    }

    fn remembered(line: &str) -> Option<String> {
        history_entry(&parse_repl_line(line).unwrap())
    }

    #[test]
    fn test_history_keeps_private_text_out() {
        assert_eq!(remembered("heavy flow, clots"), None);
        assert_eq!(
            remembered("/notes 2026-10-18 heavy flow, clots").as_deref(),
            Some("/notes 2026-10-18 ")
        );
        assert_eq!(remembered("/n slept badly").as_deref(), Some("/notes "));
        assert_eq!(
            remembered("/summarize cramps and sad").as_deref(),
            Some("/summarize ")
        );
        assert_eq!(
            remembered("/key set sk-or-v1-0123456789abcdef").as_deref(),
            Some("/key set ")
        );
    }

    #[test]
    fn test_history_keeps_plain_commands() {
        assert_eq!(remembered("/h 2026-10-18").as_deref(), Some("/history 2026-10-18"));
        assert_eq!(remembered("/key").as_deref(), Some("/key show"));
        assert_eq!(remembered("/model gpt-4").as_deref(), Some("/model gpt-4"));
        assert_eq!(remembered("/q").as_deref(), Some("/exit"));
    }

    #[test]
    fn test_model_command() {
        assert_eq!(
            parse_repl_line("/model gpt-4").unwrap(),
            ReplCommand::Model(ModelSelector::Gpt4)
        );
        assert!(parse_repl_line("/model llama").is_err());
    }
}
