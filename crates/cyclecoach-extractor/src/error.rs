//! Error types for the Extractor
//!
//! Extraction itself is total. These errors only arise while building an
//! extractor from user-supplied lexicon configuration.

use thiserror::Error;

/// Errors that can occur while configuring an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Invalid lexicon configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML (de)serialization error
    #[error("TOML error: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}

impl From<toml::ser::Error> for ExtractorError {
    fn from(e: toml::ser::Error) -> Self {
        ExtractorError::Toml(e.to_string())
    }
}
