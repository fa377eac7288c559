//! Cycle Coach Extractor
//!
//! Converts a free-text journal entry into a structured [`Summary`] without
//! any network access.
//!
//! # Overview
//!
//! The Extractor is the privacy boundary of Cycle Coach: raw text goes in,
//! and only the summary ever reaches the LLM gateway.
//!
//! # Architecture
//!
//! ```text
//! Text → normalize → { dates, symptoms, mood } → Summary → gateway
//! ```
//!
//! # Key Features
//!
//! - **Date resolution**: `yesterday`/`today`/`tomorrow`, `last <weekday>`,
//!   `3 mar`, `march 3`, falling back to today
//! - **Symptom tags**: whole-word matches against a controlled vocabulary,
//!   in vocabulary order, camel-cased
//! - **Mood**: positive/negative lexicon counts compared into
//!   `positive`, `neutral` or `low`
//! - **Extensible lexicon**: [`ExtractorConfig`] appends words from TOML
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use cyclecoach_domain::Mood;
//! use cyclecoach_extractor::Extractor;
//!
//! let extractor = Extractor::new();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//!
//! let summary = extractor.extract_on("3 mar I was fine", today);
//! assert_eq!(summary.period_start(), "March 3");
//! assert_eq!(summary.mood(), Mood::Positive);
//! assert!(summary.has_no_specific_symptoms());
//! ```
//!
//! [`Summary`]: cyclecoach_domain::Summary

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;

pub mod dates;
pub mod lexicon;
pub mod mood;
pub mod normalize;
pub mod symptoms;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use dates::{format_month_day, DatePhrase};
pub use error::ExtractorError;
pub use extractor::{extract_summary, Extractor};
