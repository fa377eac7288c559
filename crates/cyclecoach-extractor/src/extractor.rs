//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::dates::{format_month_day, resolve_period_start};
use crate::error::ExtractorError;
use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS, SYMPTOM_PHRASES};
use crate::mood::MoodScorer;
use crate::normalize::{normalize, tokenize};
use crate::symptoms::SymptomMatcher;
use chrono::{Local, NaiveDate};
use cyclecoach_domain::traits::SummaryExtractor;
use cyclecoach_domain::Summary;
use std::sync::Arc;
use tracing::debug;

/// The Extractor converts a free-text journal entry into a [`Summary`]
///
/// Extraction is pure and total: no I/O, no state between calls, and every
/// input (including the empty string) yields a fully populated summary.
/// Compiled lexicons are shared behind `Arc`, so cloning is cheap and clones
/// can be used from any thread.
#[derive(Debug, Clone)]
pub struct Extractor {
    symptoms: Arc<SymptomMatcher>,
    mood: Arc<MoodScorer>,
}

impl Extractor {
    /// Create an Extractor over the standard vocabularies
    pub fn new() -> Self {
        Self {
            symptoms: SymptomMatcher::standard(),
            mood: MoodScorer::standard(),
        }
    }

    /// Create an Extractor whose lexicon is extended by `config`
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;

        if config.is_standard() {
            return Ok(Self::new());
        }

        let symptoms = SymptomMatcher::new(
            SYMPTOM_PHRASES
                .iter()
                .copied()
                .chain(
                    config
                        .extra_symptoms
                        .iter()
                        .map(String::as_str)
                        .filter(|p| !SYMPTOM_PHRASES.contains(p)),
                ),
        )?;

        let mood = MoodScorer::new(
            POSITIVE_WORDS
                .iter()
                .copied()
                .chain(config.extra_positive_words.iter().map(String::as_str)),
            NEGATIVE_WORDS
                .iter()
                .copied()
                .chain(config.extra_negative_words.iter().map(String::as_str)),
        );

        debug!(
            symptoms = symptoms.len(),
            extra_positive = config.extra_positive_words.len(),
            extra_negative = config.extra_negative_words.len(),
            "Built extended lexicon"
        );

        Ok(Self {
            symptoms: Arc::new(symptoms),
            mood: Arc::new(mood),
        })
    }

    /// Extract a summary using the local calendar date as "today"
    pub fn extract(&self, text: &str) -> Summary {
        self.extract_on(text, Local::now().date_naive())
    }

    /// Extract a summary relative to an explicit reference date
    pub fn extract_on(&self, text: &str, today: NaiveDate) -> Summary {
        let normalized = normalize(text);

        let period_start = resolve_period_start(&normalized, today);
        let symptoms = self.symptoms.find(&normalized);
        let score = self.mood.score(&tokenize(&normalized));
        let mood = score.mood();

        debug!(
            text_len = text.len(),
            %period_start,
            symptoms = symptoms.len(),
            positive = score.positive,
            negative = score.negative,
            %mood,
            "Extracted summary"
        );

        Summary::new(format_month_day(period_start), symptoms, mood)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryExtractor for Extractor {
    fn extract(&self, text: &str) -> Summary {
        Extractor::extract(self, text)
    }
}

/// Extract a summary with the standard lexicon and today's local date
pub fn extract_summary(text: &str) -> Summary {
    Extractor::new().extract(text)
}
