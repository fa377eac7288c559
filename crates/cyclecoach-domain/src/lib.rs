//! Cycle Coach Domain Layer
//!
//! This crate contains the domain model shared by every other Cycle Coach
//! crate. It defines the structured summary produced from a journal entry and
//! the trait interfaces for the collaborators around it.
//!
//! ## Key Concepts
//!
//! - **Summary**: The structured record `{period_start, symptoms, mood}`; the
//!   only representation of a journal entry that ever leaves the device
//! - **Mood**: Coarse sentiment of an entry (positive, neutral, low)
//! - **Sentinel symptom**: The single-element symptom list used when no
//!   vocabulary term was recognized
//!
//! ## Architecture
//!
//! - Serde is the only external dependency (the serialized summary is the
//!   gateway payload)
//! - Pure data and trait definitions only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mood;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use mood::Mood;
pub use summary::{Summary, NO_SPECIFIC_SYMPTOMS};
