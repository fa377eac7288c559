//! Configuration for the Extractor
//!
//! The standard vocabularies in [`crate::lexicon`] are always active. A
//! configuration can only append to them.

use crate::error::ExtractorError;
use crate::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use serde::{Deserialize, Serialize};

/// Lexicon extensions for the Extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Symptom phrases appended after the standard vocabulary
    ///
    /// Lower-case words separated by single spaces, e.g. `"hot flashes"`
    #[serde(default)]
    pub extra_symptoms: Vec<String>,

    /// Single words counted toward a positive mood
    #[serde(default)]
    pub extra_positive_words: Vec<String>,

    /// Single words counted toward a low mood
    #[serde(default)]
    pub extra_negative_words: Vec<String>,
}

impl ExtractorConfig {
    /// Whether the configuration adds nothing to the standard lexicon
    pub fn is_standard(&self) -> bool {
        self.extra_symptoms.is_empty()
            && self.extra_positive_words.is_empty()
            && self.extra_negative_words.is_empty()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        for phrase in &self.extra_symptoms {
            let well_formed = !phrase.is_empty()
                && phrase.split(' ').all(is_lower_word);
            if !well_formed {
                return Err(ExtractorError::Config(format!(
                    "Symptom phrase '{}' must be lower-case words separated by single spaces",
                    phrase
                )));
            }
        }

        for word in self.extra_positive_words.iter().chain(&self.extra_negative_words) {
            if !is_lower_word(word) {
                return Err(ExtractorError::Config(format!(
                    "Mood word '{}' must be a single lower-case word",
                    word
                )));
            }
        }

        let positive_clash = self
            .extra_positive_words
            .iter()
            .find(|w| NEGATIVE_WORDS.contains(&w.as_str()) || self.extra_negative_words.contains(*w));
        if let Some(word) = positive_clash {
            return Err(ExtractorError::Config(format!(
                "'{}' cannot be both a positive and a negative mood word",
                word
            )));
        }

        if let Some(word) = self
            .extra_negative_words
            .iter()
            .find(|w| POSITIVE_WORDS.contains(&w.as_str()))
        {
            return Err(ExtractorError::Config(format!(
                "'{}' cannot be both a positive and a negative mood word",
                word
            )));
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn is_lower_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}
