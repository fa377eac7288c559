//! Whole-word symptom matching against the controlled vocabulary

use crate::error::ExtractorError;
use crate::lexicon::{to_tag, SYMPTOM_PHRASES};
use regex::Regex;
use std::sync::{Arc, LazyLock};

static STANDARD_MATCHER: LazyLock<Arc<SymptomMatcher>> = LazyLock::new(|| {
    Arc::new(
        SymptomMatcher::new(SYMPTOM_PHRASES.iter().copied())
            .expect("standard symptom vocabulary compiles"),
    )
});

/// One vocabulary entry: its pattern and the tag it emits
#[derive(Debug)]
struct SymptomPattern {
    pattern: Regex,
    tag: String,
}

/// Matches vocabulary phrases in normalized text
///
/// Output follows vocabulary order, not the order phrases appear in the text.
#[derive(Debug)]
pub struct SymptomMatcher {
    patterns: Vec<SymptomPattern>,
}

impl SymptomMatcher {
    /// Compile a matcher for the given phrases, keeping their order
    pub fn new<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Result<Self, ExtractorError> {
        let patterns = phrases
            .into_iter()
            .map(|phrase| {
                // ASCII word boundaries: an accented letter ends a word
                let source = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(phrase));
                let pattern = Regex::new(&source).map_err(|e| {
                    ExtractorError::Config(format!("Invalid symptom phrase '{}': {}", phrase, e))
                })?;
                Ok(SymptomPattern {
                    pattern,
                    tag: to_tag(phrase),
                })
            })
            .collect::<Result<Vec<_>, ExtractorError>>()?;

        Ok(Self { patterns })
    }

    /// Shared matcher for the standard vocabulary
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_MATCHER)
    }

    /// Number of vocabulary entries
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Tags of every phrase found in `normalized`, in vocabulary order
    ///
    /// May be empty; the sentinel is applied when the summary is built.
    pub fn find(&self, normalized: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| p.pattern.is_match(normalized))
            .map(|p| p.tag.clone())
            .collect()
    }
}
