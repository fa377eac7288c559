//! Model selection and credential checks
//!
//! Each selector names one upstream provider. Credentials are checked by
//! prefix only; the provider is the authority on whether a key is live.

use crate::LlmError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which model/provider a summary is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelSelector {
    /// Qwen via OpenRouter
    #[default]
    #[serde(rename = "qwen")]
    Qwen,

    /// Google Gemini
    #[serde(rename = "gemini")]
    Gemini,

    /// OpenAI GPT-4
    #[serde(rename = "gpt-4")]
    Gpt4,

    /// Anthropic Claude
    #[serde(rename = "claude")]
    Claude,
}

/// Wire format a provider speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
    /// `POST {base}/chat/completions` (OpenRouter, OpenAI)
    ChatCompletions,
    /// `POST {base}/messages` (Anthropic)
    AnthropicMessages,
    /// `POST {base}/models/{model}:generateContent` (Google)
    GeminiGenerate,
}

impl ModelSelector {
    /// All selectors, default first
    pub const ALL: [ModelSelector; 4] = [
        ModelSelector::Qwen,
        ModelSelector::Gemini,
        ModelSelector::Gpt4,
        ModelSelector::Claude,
    ];

    /// Selector name as used in config files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "qwen",
            ModelSelector::Gemini => "gemini",
            ModelSelector::Gpt4 => "gpt-4",
            ModelSelector::Claude => "claude",
        }
    }

    /// Parse a selector name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "qwen" => Some(ModelSelector::Qwen),
            "gemini" => Some(ModelSelector::Gemini),
            "gpt-4" | "gpt4" => Some(ModelSelector::Gpt4),
            "claude" => Some(ModelSelector::Claude),
            _ => None,
        }
    }

    /// Human-readable provider label
    pub fn label(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "Qwen (OpenRouter)",
            ModelSelector::Gemini => "Google Gemini",
            ModelSelector::Gpt4 => "ChatGPT-4",
            ModelSelector::Claude => "Claude",
        }
    }

    /// Prefix every credential for this provider starts with
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "sk-or-",
            ModelSelector::Gemini => "AI",
            ModelSelector::Gpt4 => "sk-",
            ModelSelector::Claude => "sk-ant-",
        }
    }

    /// Hint shown when asking for a credential
    pub fn key_hint(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "Enter OpenRouter API Key",
            ModelSelector::Gemini => "Enter Google API Key",
            ModelSelector::Gpt4 => "Enter OpenAI API Key",
            ModelSelector::Claude => "Enter Anthropic API Key",
        }
    }

    /// Upstream model identifier
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "qwen/qwen3-32b:free",
            ModelSelector::Gemini => "gemini-1.5-flash",
            ModelSelector::Gpt4 => "gpt-4",
            ModelSelector::Claude => "claude-3-5-haiku-latest",
        }
    }

    /// Default API base URL
    pub fn base_url(&self) -> &'static str {
        match self {
            ModelSelector::Qwen => "https://openrouter.ai/api/v1",
            ModelSelector::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            ModelSelector::Gpt4 => "https://api.openai.com/v1",
            ModelSelector::Claude => "https://api.anthropic.com/v1",
        }
    }

    /// Wire format of the provider
    pub fn api_style(&self) -> ApiStyle {
        match self {
            ModelSelector::Qwen | ModelSelector::Gpt4 => ApiStyle::ChatCompletions,
            ModelSelector::Gemini => ApiStyle::GeminiGenerate,
            ModelSelector::Claude => ApiStyle::AnthropicMessages,
        }
    }

    /// Clean and check a raw credential for this provider
    ///
    /// Surrounding whitespace and non-ASCII characters (often picked up when
    /// pasting) are removed before the prefix check.
    pub fn validate_credential(&self, raw: &str) -> Result<Credential, LlmError> {
        let cleaned: String = raw.trim().chars().filter(char::is_ascii).collect();

        if cleaned.is_empty() {
            return Err(LlmError::MissingCredential);
        }
        if !cleaned.starts_with(self.key_prefix()) {
            return Err(LlmError::InvalidCredential(format!(
                "{} keys must start with {}",
                self.label(),
                self.key_prefix()
            )));
        }

        Ok(Credential {
            secret: cleaned,
            model: *self,
        })
    }
}

impl fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModelSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown model: {}", s))
    }
}

/// A credential that passed the format check for one selector
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
    model: ModelSelector,
}

impl Credential {
    /// The cleaned secret, for request headers
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The selector this credential was validated for
    pub fn model(&self) -> ModelSelector {
        self.model
    }

    /// Masked form for display, e.g. `sk-or-v1...9f2c`
    pub fn masked(&self) -> String {
        mask_credential(&self.secret)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &self.masked())
            .field("model", &self.model)
            .finish()
    }
}

/// First 8 and last 4 characters of a secret
///
/// Secrets of 12 characters or fewer only show their first 4.
pub fn mask_credential(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        let head: String = chars.iter().take(4).collect();
        return format!("{}...", head);
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip_names() {
        for selector in ModelSelector::ALL {
            assert_eq!(ModelSelector::parse(selector.as_str()), Some(selector));
            assert_eq!(selector.to_string().parse::<ModelSelector>(), Ok(selector));
        }
        assert_eq!(ModelSelector::parse("GPT4"), Some(ModelSelector::Gpt4));
        assert!(ModelSelector::parse("llama").is_none());
    }

    #[test]
    fn test_default_is_qwen() {
        assert_eq!(ModelSelector::default(), ModelSelector::Qwen);
        assert_eq!(ModelSelector::Qwen.model_id(), "qwen/qwen3-32b:free");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ModelSelector::Gpt4).unwrap();
        assert_eq!(json, "\"gpt-4\"");
        let parsed: ModelSelector = serde_json::from_str("\"claude\"").unwrap();
        assert_eq!(parsed, ModelSelector::Claude);
    }

    #[test]
    fn test_validate_credential_prefixes() {
        assert!(ModelSelector::Qwen.validate_credential("sk-or-v1-abc").is_ok());
        assert!(ModelSelector::Gemini.validate_credential("AIzaSyExample").is_ok());
        assert!(ModelSelector::Gpt4.validate_credential("sk-proj-123").is_ok());
        assert!(ModelSelector::Claude.validate_credential("sk-ant-api03-x").is_ok());

        assert!(matches!(
            ModelSelector::Qwen.validate_credential("sk-proj-123"),
            Err(LlmError::InvalidCredential(_))
        ));
        assert!(matches!(
            ModelSelector::Claude.validate_credential("sk-or-v1-abc"),
            Err(LlmError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_validate_credential_empty() {
        assert!(matches!(
            ModelSelector::Qwen.validate_credential("   "),
            Err(LlmError::MissingCredential)
        ));
    }

    #[test]
    fn test_validate_credential_cleans_input() {
        let credential = ModelSelector::Qwen
            .validate_credential("  sk-or-v1-ab\u{200b}cd \n")
            .unwrap();
        assert_eq!(credential.secret(), "sk-or-v1-abcd");
        assert_eq!(credential.model(), ModelSelector::Qwen);
    }

    #[test]
    fn test_mask_credential() {
        assert_eq!(mask_credential("sk-or-v1-0123456789abcdef"), "sk-or-v1...cdef");
        assert_eq!(mask_credential("AIshort"), "AIsh...");
    }

    #[test]
    fn test_debug_hides_secret() {
        let credential = ModelSelector::Qwen
            .validate_credential("sk-or-v1-0123456789abcdef")
            .unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("0123456789"));
        assert!(debug.contains("sk-or-v1...cdef"));
    }
}
