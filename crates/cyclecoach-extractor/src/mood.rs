//! Lexicon-based mood scoring

use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use cyclecoach_domain::Mood;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

static STANDARD_SCORER: LazyLock<Arc<MoodScorer>> = LazyLock::new(|| {
    Arc::new(MoodScorer::new(
        POSITIVE_WORDS.iter().copied(),
        NEGATIVE_WORDS.iter().copied(),
    ))
});

/// Positive and negative hit counts for one entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodScore {
    /// Tokens found in the positive list
    pub positive: usize,
    /// Tokens found in the negative list
    pub negative: usize,
}

impl MoodScore {
    /// Mood implied by the counts
    pub fn mood(&self) -> Mood {
        Mood::from_scores(self.positive, self.negative)
    }
}

/// Counts exact token hits against the positive and negative word lists
#[derive(Debug, Clone)]
pub struct MoodScorer {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl MoodScorer {
    /// Build a scorer from word lists
    pub fn new<'a>(
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            positive: positive.into_iter().map(str::to_string).collect(),
            negative: negative.into_iter().map(str::to_string).collect(),
        }
    }

    /// Shared scorer for the standard word lists
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_SCORER)
    }

    /// Count hits among `tokens`
    ///
    /// Every occurrence counts, so "sad sad" scores two.
    pub fn score(&self, tokens: &[&str]) -> MoodScore {
        tokens
            .iter()
            .filter(|token| !token.is_empty())
            .fold(MoodScore::default(), |mut score, token| {
                if self.positive.contains(*token) {
                    score.positive += 1;
                }
                if self.negative.contains(*token) {
                    score.negative += 1;
                }
                score
            })
    }
}
