//! Prompt shaping for supportive replies
//!
//! The user turn carries only the serialized summary, never journal text.

use crate::LlmError;
use serde::{Deserialize, Serialize};

/// Maximum tokens requested from every provider
pub const MAX_TOKENS: u32 = 800;

/// Reply used when a provider answers without any text content
pub const NO_RESPONSE: &str = "No response received";

/// Tone and length instructions for the model
pub const SYSTEM_PROMPT: &str = "You are a compassionate women's health assistant. \
Respond like a caring friend who happens to know about health. \
Start with empathy and understanding, then naturally weave in helpful advice. \
Use conversational language - avoid starting with bullet points or sounding clinical. \
You can use **bold** for emphasis and occasional bullet points mid-conversation, \
but keep it natural and warm. Keep responses supportive and around 100-150 words.";

/// One chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system`, `user` or `assistant`
    pub role: String,
    /// Turn text
    pub content: String,
}

impl ChatMessage {
    /// System turn
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    /// User turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// The two turns sent for one summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instructions
    pub system: ChatMessage,
    /// User turn carrying the summary
    pub user: ChatMessage,
}

/// Build the prompt for a serialized summary
pub fn build_prompt(serialized_summary: &str) -> Result<Prompt, LlmError> {
    let summary = serialized_summary.trim();
    if summary.is_empty() {
        return Err(LlmError::EmptyPrompt);
    }

    Ok(Prompt {
        system: ChatMessage::system(SYSTEM_PROMPT),
        user: ChatMessage::user(format!("Cycle data: {}", summary)),
    })
}
