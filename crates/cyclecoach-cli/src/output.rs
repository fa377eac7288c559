//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::journal::{DayEntry, MessageKind};
use chrono::{Local, NaiveDate};
use colored::{Color, Colorize};
use cyclecoach_domain::Summary;
use cyclecoach_llm::Credential;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an extracted summary.
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Quiet => Ok(summary.to_compact_json()?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Period start", summary.period_start()]);
                let symptoms = summary.symptoms().join(", ");
                builder.push_record(["Symptoms", symptoms.as_str()]);
                builder.push_record(["Mood", summary.mood().as_str()]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format one day of the journal.
    pub fn format_day(&self, date: NaiveDate, entry: Option<&DayEntry>) -> Result<String> {
        let empty = DayEntry::default();
        let entry = entry.unwrap_or(&empty);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
            OutputFormat::Quiet => Ok(entry
                .chat
                .iter()
                .map(|m| m.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if entry.is_empty() {
                    return Ok(self.paint(&format!("No data for {}.", date), Color::Yellow));
                }

                let mut out = format!("{}\n", self.paint(&date.to_string(), Color::Cyan));
                if !entry.notes.is_empty() {
                    out.push_str(&format!("Notes: {}\n", entry.notes));
                }
                if entry.chat.is_empty() {
                    out.push_str(&self.paint("No chat history.", Color::Yellow));
                    return Ok(out);
                }

                let mut builder = Builder::default();
                builder.push_record(["Time", "From", "Message"]);
                for message in &entry.chat {
                    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();
                    builder.push_record([time.as_str(), message_label(message.kind), message.text.as_str()]);
                }
                out.push_str(&self.render(builder));
                Ok(out)
            }
        }
    }

    /// Line shown before a summary leaves the device.
    pub fn summary_sent(&self, serialized: &str) -> String {
        self.info(&format!("Summary sent to AI: {}", serialized))
    }

    /// Model reply.
    pub fn reply(&self, text: &str) -> String {
        self.paint(text, Color::Magenta)
    }

    /// Validated key line.
    pub fn key_status(&self, credential: &Credential) -> String {
        self.success(&format!(
            "API Key Valid: {} ({})",
            credential.masked(),
            credential.model().label()
        ))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.paint(&format!("✓ {}", message), Color::Green)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.paint(&format!("✗ {}", message), Color::Red)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.paint(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.paint(&format!("⚠ {}", message), Color::Yellow)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn message_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::User => "You",
        MessageKind::Summary => "Sent",
        MessageKind::Bot => "Coach",
    }
}
