//! Cycle Coach LLM Gateway Layer
//!
//! Turns a serialized summary into a supportive reply from a hosted model.
//!
//! # Architecture
//!
//! The gateway accepts `{ serialized summary, credential, model selector }`
//! and returns plain text or a typed [`LlmError`]. It never sees raw journal
//! text: the prompt is built from the summary alone.
//!
//! # Gateways
//!
//! - `MockGateway`: Deterministic mock for testing
//! - `HttpGateway`: OpenRouter, OpenAI, Anthropic and Google over HTTPS
//!
//! # Examples
//!
//! ```
//! use cyclecoach_llm::{LlmGateway, MockGateway, ModelSelector};
//!
//! # tokio_test::block_on(async {
//! let gateway = MockGateway::new("Take it easy today.");
//! let credential = ModelSelector::Qwen.validate_credential("sk-or-v1-test").unwrap();
//! let reply = gateway
//!     .advise(r#"{"period_start":"March 3","symptoms":["acne"],"mood":"low"}"#, &credential, ModelSelector::Qwen)
//!     .await
//!     .unwrap();
//! assert_eq!(reply, "Take it easy today.");
//! # });
//! ```

#![warn(missing_docs)]

pub mod http;
pub mod prompt;
pub mod selector;

use async_trait::async_trait;
use cyclecoach_domain::Summary;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use http::HttpGateway;
pub use prompt::{build_prompt, ChatMessage, Prompt};
pub use selector::{mask_credential, ApiStyle, Credential, ModelSelector};

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No credential supplied
    #[error("API key is required")]
    MissingCredential,

    /// Credential does not match the selected provider
    #[error("Invalid API key format: {0}")]
    InvalidCredential(String),

    /// Nothing to send
    #[error("Prompt is required")]
    EmptyPrompt,

    /// Summary could not be serialized
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status
    #[error("{provider} API error: {status}: {message}")]
    Http {
        /// Provider label
        provider: String,
        /// HTTP status code
        status: u16,
        /// Upstream error body or reason
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// HTTP status associated with the error, when there is one
    ///
    /// Local validation failures map to 400 the way a proxy would report them.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            LlmError::MissingCredential
            | LlmError::InvalidCredential(_)
            | LlmError::EmptyPrompt
            | LlmError::InvalidRequest(_) => Some(400),
            LlmError::Http { status, .. } => Some(*status),
            LlmError::RateLimitExceeded => Some(429),
            LlmError::Communication(_) | LlmError::InvalidResponse(_) => None,
        }
    }
}

/// Sends a serialized summary to a model and returns its reply
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Ask the selected model for a reply to a serialized summary
    async fn advise(
        &self,
        serialized_summary: &str,
        credential: &Credential,
        model: ModelSelector,
    ) -> Result<String, LlmError>;

    /// Serialize `summary` compactly and ask for a reply
    async fn advise_on(
        &self,
        summary: &Summary,
        credential: &Credential,
        model: ModelSelector,
    ) -> Result<String, LlmError> {
        let serialized = summary
            .to_compact_json()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;
        self.advise(&serialized, credential, model).await
    }
}

/// Check that a credential was validated for the selector in use
pub(crate) fn ensure_credential_matches(
    credential: &Credential,
    model: ModelSelector,
) -> Result<(), LlmError> {
    if credential.model() != model {
        return Err(LlmError::InvalidCredential(format!(
            "key was validated for {}, not {}",
            credential.model(),
            model
        )));
    }
    Ok(())
}

/// Mock gateway for deterministic testing
///
/// Returns a fixed reply without any network calls and records the prompts
/// it was given, so tests can check exactly what would have left the device.
///
/// # Examples
///
/// ```
/// use cyclecoach_llm::{LlmGateway, MockGateway, ModelSelector};
///
/// # tokio_test::block_on(async {
/// let gateway = MockGateway::new("Fixed reply").failing_with(503);
/// let credential = ModelSelector::Qwen.validate_credential("sk-or-v1-test").unwrap();
/// let err = gateway.advise("{}", &credential, ModelSelector::Qwen).await.unwrap_err();
/// assert_eq!(err.http_status(), Some(503));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockGateway {
    reply: String,
    fail_status: Option<u16>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    /// Create a new MockGateway with a fixed reply
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail_status: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail every call with an HTTP error of the given status
    pub fn failing_with(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Number of times `advise` was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// User turns that would have been sent, oldest first
    pub fn sent_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new("Default mock reply")
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn advise(
        &self,
        serialized_summary: &str,
        credential: &Credential,
        model: ModelSelector,
    ) -> Result<String, LlmError> {
        ensure_credential_matches(credential, model)?;
        let prompt = build_prompt(serialized_summary)?;

        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.user.content);

        match self.fail_status {
            Some(429) => Err(LlmError::RateLimitExceeded),
            Some(status) => Err(LlmError::Http {
                provider: model.label().to_string(),
                status,
                message: "Mock error".to_string(),
            }),
            None => Ok(self.reply.clone()),
        }
    }
}
