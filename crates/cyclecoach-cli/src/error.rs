//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gateway or credential error
    #[error(transparent)]
    Llm(#[from] cyclecoach_llm::LlmError),

    /// Export/import error
    #[error(transparent)]
    Vault(#[from] cyclecoach_vault::VaultError),

    /// Lexicon configuration error
    #[error(transparent)]
    Extractor(#[from] cyclecoach_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Chat attempted without a validated key
    #[error("Please validate your API key first. Use 'key set <key>'.")]
    NotValidated,
}
