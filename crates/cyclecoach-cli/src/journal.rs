//! Local journal of notes and chat turns, keyed by day.
//!
//! Stored as a single JSON object: `{ "2026-10-19": { "notes": ..., "chat": [...] } }`.

use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// All days in a journal, oldest first.
pub type JournalData = BTreeMap<NaiveDate, DayEntry>;

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Text the user typed
    User,
    /// Serialized summary that was sent out
    Summary,
    /// Model reply or error shown in its place
    Bot,
}

impl MessageKind {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::User => "user",
            MessageKind::Summary => "summary",
            MessageKind::Bot => "bot",
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique, time-ordered id
    pub id: Uuid,
    /// Message text
    pub text: String,
    /// Message origin
    pub kind: MessageKind,
    /// When the message was recorded
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped now.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

/// Notes and chat log for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Chat log, oldest first
    #[serde(default)]
    pub chat: Vec<ChatMessage>,

    /// When the notes were last saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl DayEntry {
    /// Whether there is nothing recorded for the day.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.chat.is_empty()
    }
}

/// Journal backed by a JSON file.
#[derive(Debug)]
pub struct JournalStore {
    path: PathBuf,
    days: JournalData,
}

impl JournalStore {
    /// Open the journal at `path`; a missing file is an empty journal.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let days = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                JournalData::new()
            } else {
                serde_json::from_str(&contents)?
            }
        } else {
            JournalData::new()
        };
        debug!(days = days.len(), "Opened journal");
        Ok(Self { path, days })
    }

    /// File backing this journal.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the journal back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.days)?)?;
        Ok(())
    }

    /// All recorded days.
    pub fn days(&self) -> &JournalData {
        &self.days
    }

    /// Entry for one day, if anything was recorded.
    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&date)
    }

    /// Append a chat message to a day.
    pub fn append(&mut self, date: NaiveDate, kind: MessageKind, text: impl Into<String>) -> &ChatMessage {
        let chat = &mut self.days.entry(date).or_default().chat;
        chat.push(ChatMessage::new(kind, text));
        &chat[chat.len() - 1]
    }

    /// Replace a day's notes and stamp `last_updated`.
    pub fn set_notes(&mut self, date: NaiveDate, notes: impl Into<String>) {
        let entry = self.days.entry(date).or_default();
        entry.notes = notes.into();
        entry.last_updated = Some(Utc::now());
    }

    /// Bring in days from an import.
    ///
    /// With `replace` the journal becomes exactly `incoming`. Otherwise chat
    /// messages are added unless their id is already present, and incoming
    /// notes win only when they were saved more recently. Returns the number
    /// of days touched.
    pub fn merge(&mut self, incoming: JournalData, replace: bool) -> usize {
        let touched = incoming.len();
        if replace {
            self.days = incoming;
            return touched;
        }

        for (date, day) in incoming {
            let entry = self.days.entry(date).or_default();

            for message in day.chat {
                if !entry.chat.iter().any(|m| m.id == message.id) {
                    entry.chat.push(message);
                }
            }
            entry.chat.sort_by_key(|m| m.timestamp);

            let newer = match (entry.last_updated, day.last_updated) {
                (_, None) => entry.notes.is_empty() && !day.notes.is_empty(),
                (None, Some(_)) => true,
                (Some(ours), Some(theirs)) => theirs > ours,
            };
            if newer {
                entry.notes = day.notes;
                entry.last_updated = day.last_updated;
            }
        }
        touched
    }
}
