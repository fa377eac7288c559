//! Summary module - the structured record extracted from a journal entry

use crate::Mood;
use serde::{Deserialize, Serialize};

/// Symptom list used when no vocabulary term was recognized
pub const NO_SPECIFIC_SYMPTOMS: &str = "no specific symptoms mentioned";

/// Structured, privacy-preserving summary of one journal entry
///
/// This is the only form of an entry that is handed to the LLM gateway.
/// Fields are private so the invariants hold for every value in circulation:
/// `symptoms` is never empty and `mood` is always one of the three moods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSummary")]
pub struct Summary {
    period_start: String,
    symptoms: Vec<String>,
    mood: Mood,
}

impl Summary {
    /// Create a summary, substituting the sentinel when `symptoms` is empty
    pub fn new(period_start: impl Into<String>, symptoms: Vec<String>, mood: Mood) -> Self {
        let symptoms = if symptoms.is_empty() {
            vec![NO_SPECIFIC_SYMPTOMS.to_string()]
        } else {
            symptoms
        };

        Self {
            period_start: period_start.into(),
            symptoms,
            mood,
        }
    }

    /// Calendar label such as `"March 5"`
    pub fn period_start(&self) -> &str {
        &self.period_start
    }

    /// Symptom tags in vocabulary order (or the sentinel)
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Mood of the entry
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Whether the symptom list is the "nothing recognized" sentinel
    pub fn has_no_specific_symptoms(&self) -> bool {
        self.symptoms.len() == 1 && self.symptoms[0] == NO_SPECIFIC_SYMPTOMS
    }

    /// Compact JSON rendering handed to the gateway
    ///
    /// Field order is fixed: `period_start`, `symptoms`, `mood`.
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Unchecked wire form, validated into [`Summary`] on deserialize
#[derive(Deserialize)]
struct RawSummary {
    period_start: String,
    symptoms: Vec<String>,
    mood: Mood,
}

impl TryFrom<RawSummary> for Summary {
    type Error = String;

    fn try_from(raw: RawSummary) -> Result<Self, Self::Error> {
        if raw.symptoms.is_empty() {
            return Err("symptoms must not be empty".to_string());
        }
        Ok(Self {
            period_start: raw.period_start,
            symptoms: raw.symptoms,
            mood: raw.mood,
        })
    }
}
