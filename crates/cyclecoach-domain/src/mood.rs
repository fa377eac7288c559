//! Mood module - coarse sentiment of a journal entry

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Mood derived from lexicon scoring of an entry
///
/// Serialized lower-case (`"positive"`, `"neutral"`, `"low"`), which is the
/// form the gateway receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// More positive than negative words
    Positive,

    /// Balanced, including no mood words at all
    #[default]
    Neutral,

    /// More negative than positive words
    Low,
}

impl Mood {
    /// Get the mood name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Low => "low",
        }
    }

    /// Parse a mood from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "positive" => Some(Mood::Positive),
            "neutral" => Some(Mood::Neutral),
            "low" => Some(Mood::Low),
            _ => None,
        }
    }

    /// Resolve a mood from positive and negative hit counts
    ///
    /// Ties, including `0 == 0`, are neutral.
    pub fn from_scores(positive: usize, negative: usize) -> Self {
        match negative.cmp(&positive) {
            Ordering::Greater => Mood::Low,
            Ordering::Less => Mood::Positive,
            Ordering::Equal => Mood::Neutral,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid mood: {}", s))
    }
}
