//! Chat command implementation.
//!
//! Only the serialized summary is handed to the gateway; the raw entry stays
//! in the local journal.

use crate::cli::TextArgs;
use crate::error::{CliError, Result};
use crate::journal::{JournalStore, MessageKind};
use crate::output::Formatter;
use crate::session::Session;
use chrono::{Local, NaiveDate};
use cyclecoach_domain::Summary;
use cyclecoach_extractor::Extractor;
use cyclecoach_llm::LlmGateway;
use tracing::{info, warn};

/// Outcome of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Extracted summary
    pub summary: Summary,
    /// Exactly what was sent to the gateway
    pub serialized: String,
    /// Model reply
    pub reply: String,
}

/// Run one chat turn and record it in the journal under `today`.
///
/// The user text, the serialized summary and the reply (or the error shown
/// in its place) are appended and the journal is saved either way.
pub async fn send_turn(
    text: &str,
    session: &Session,
    extractor: &Extractor,
    gateway: &dyn LlmGateway,
    journal: &mut JournalStore,
    today: NaiveDate,
) -> Result<ChatTurn> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CliError::InvalidInput("Nothing to send".to_string()));
    }
    let credential = session.require_credential()?;

    let summary = extractor.extract_on(text, today);
    let serialized = summary.to_compact_json()?;

    journal.append(today, MessageKind::User, text);
    journal.append(today, MessageKind::Summary, serialized.as_str());

    info!(model = %session.model(), summary_len = serialized.len(), "Sending summary");
    let result = gateway.advise(&serialized, credential, session.model()).await;

    let outcome = match result {
        Ok(reply) => {
            journal.append(today, MessageKind::Bot, reply.as_str());
            Ok(ChatTurn {
                summary,
                serialized,
                reply,
            })
        }
        Err(e) => {
            warn!(model = %session.model(), status = ?e.http_status(), "Gateway call failed");
            journal.append(today, MessageKind::Bot, format!("Error: {}", e));
            Err(CliError::from(e))
        }
    };

    journal.save()?;
    outcome
}

/// Execute the chat command.
pub async fn execute_chat(
    args: TextArgs,
    session: &Session,
    extractor: &Extractor,
    gateway: &dyn LlmGateway,
    journal: &mut JournalStore,
    formatter: &Formatter,
) -> Result<()> {
    let today = Local::now().date_naive();
    let turn = send_turn(&args.joined(), session, extractor, gateway, journal, today).await?;

    println!("{}", formatter.summary_sent(&turn.serialized));
    println!("{}", formatter.reply(&turn.reply));
    Ok(())
}
