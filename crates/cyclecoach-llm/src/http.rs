//! HTTP Gateway Implementation
//!
//! Talks to the hosted model behind each [`ModelSelector`]:
//!
//! - OpenRouter and OpenAI via `chat/completions`
//! - Anthropic via `messages`
//! - Google via `models/{model}:generateContent`
//!
//! # Features
//!
//! - Per-provider request shaping and reply extraction
//! - Optional base URL override (e.g. a local proxy)
//! - Retry logic with exponential backoff for 429/5xx and transport errors
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use cyclecoach_llm::{HttpGateway, LlmGateway, ModelSelector};
//!
//! # async fn example() -> Result<(), cyclecoach_llm::LlmError> {
//! let gateway = HttpGateway::new()?.with_max_retries(2);
//! let credential = ModelSelector::Qwen.validate_credential("sk-or-v1-...")?;
//! let reply = gateway
//!     .advise(r#"{"period_start":"March 3","symptoms":["acne"],"mood":"low"}"#, &credential, ModelSelector::Qwen)
//!     .await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

use crate::prompt::{build_prompt, Prompt, MAX_TOKENS, NO_RESPONSE};
use crate::selector::{ApiStyle, Credential, ModelSelector};
use crate::{ensure_credential_matches, LlmError, LlmGateway};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default timeout for gateway requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Longest wait between two attempts
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Title reported to OpenRouter
pub const APP_TITLE: &str = "Private Cycle Coach";

/// Referer reported to OpenRouter when none is configured
pub const DEFAULT_REFERER: &str = "http://localhost:3000";

/// Anthropic API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Gateway that calls hosted model APIs over HTTPS
pub struct HttpGateway {
    client: reqwest::Client,
    max_retries: u32,
    backoff_base: Duration,
    base_url: Option<String>,
    referer: String,
}

/// A fully shaped provider request
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WireRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

impl HttpGateway {
    /// Create a gateway with default timeout and retries
    pub fn new() -> Result<Self, LlmError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a gateway with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base: Duration::from_secs(1),
            base_url: None,
            referer: DEFAULT_REFERER.to_string(),
        })
    }

    /// Set the maximum number of attempts (at least one is always made)
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the first backoff delay; later delays double
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    /// Delay after the given failed attempt: 1x, 2x, 4x, ... the base, capped
    fn backoff_delay(&self, attempt: u32) -> Duration {
        2u32.checked_pow(attempt.saturating_sub(1))
            .and_then(|factor| self.backoff_base.checked_mul(factor))
            .map_or(MAX_BACKOFF, |delay| delay.min(MAX_BACKOFF))
    }

    /// Send every provider's requests to this base URL instead of its own
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Referer reported to OpenRouter
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    fn wire_request(
        &self,
        model: ModelSelector,
        credential: &Credential,
        prompt: &Prompt,
    ) -> WireRequest {
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| model.base_url())
            .trim_end_matches('/');
        build_request(model, credential, prompt, base_url, &self.referer)
    }

    async fn send_once(&self, request: &WireRequest, model: ModelSelector) -> Attempt {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                return Attempt::Retry(LlmError::Communication(format!("Request failed: {}", e)))
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<Value>().await {
                Ok(body) => Attempt::Done(Ok(parse_reply(model.api_style(), &body))),
                Err(e) => Attempt::Done(Err(LlmError::InvalidResponse(format!(
                    "Failed to parse response: {}",
                    e
                )))),
            };
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let error = LlmError::Http {
            provider: model.label().to_string(),
            status: status.as_u16(),
            message,
        };

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Attempt::Retry(LlmError::RateLimitExceeded)
        } else if status.is_server_error() {
            Attempt::Retry(error)
        } else {
            Attempt::Done(Err(error))
        }
    }
}

/// Outcome of one HTTP attempt
enum Attempt {
    Done(Result<String, LlmError>),
    Retry(LlmError),
}

#[async_trait]
impl LlmGateway for HttpGateway {
    async fn advise(
        &self,
        serialized_summary: &str,
        credential: &Credential,
        model: ModelSelector,
    ) -> Result<String, LlmError> {
        ensure_credential_matches(credential, model)?;
        let prompt = build_prompt(serialized_summary)?;
        let request = self.wire_request(model, credential, &prompt);

        info!(
            %model,
            key = %credential.masked(),
            summary_len = serialized_summary.len(),
            "Requesting reply"
        );

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.send_once(&request, model).await {
                Attempt::Done(result) => {
                    if let Err(e) = &result {
                        warn!(%model, error = %e, "Gateway request failed");
                    }
                    return result;
                }
                Attempt::Retry(e) => {
                    warn!(%model, attempt = attempts + 1, error = %e, "Gateway attempt failed");
                    last_error = Some(e);
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                let delay = self.backoff_delay(attempts);
                debug!(?delay, "Backing off before retry");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

/// Shape the request for a provider
pub(crate) fn build_request(
    model: ModelSelector,
    credential: &Credential,
    prompt: &Prompt,
    base_url: &str,
    referer: &str,
) -> WireRequest {
    match model.api_style() {
        ApiStyle::ChatCompletions => {
            let mut headers = vec![(
                "Authorization",
                format!("Bearer {}", credential.secret()),
            )];
            if model == ModelSelector::Qwen {
                headers.push(("HTTP-Referer", referer.to_string()));
                headers.push(("X-Title", APP_TITLE.to_string()));
            }
            WireRequest {
                url: format!("{}/chat/completions", base_url),
                headers,
                body: json!({
                    "model": model.model_id(),
                    "messages": [prompt.system, prompt.user],
                    "max_tokens": MAX_TOKENS,
                }),
            }
        }
        ApiStyle::AnthropicMessages => WireRequest {
            url: format!("{}/messages", base_url),
            headers: vec![
                ("x-api-key", credential.secret().to_string()),
                ("anthropic-version", ANTHROPIC_VERSION.to_string()),
            ],
            body: json!({
                "model": model.model_id(),
                "system": prompt.system.content,
                "messages": [prompt.user],
                "max_tokens": MAX_TOKENS,
            }),
        },
        ApiStyle::GeminiGenerate => WireRequest {
            url: format!("{}/models/{}:generateContent", base_url, model.model_id()),
            headers: vec![("x-goog-api-key", credential.secret().to_string())],
            body: json!({
                "systemInstruction": { "parts": [{ "text": prompt.system.content }] },
                "contents": [{ "role": "user", "parts": [{ "text": prompt.user.content }] }],
                "generationConfig": { "maxOutputTokens": MAX_TOKENS },
            }),
        },
    }
}

/// Pull the reply text out of a provider response body
///
/// A body without text content yields [`NO_RESPONSE`].
pub(crate) fn parse_reply(style: ApiStyle, body: &Value) -> String {
    let text = match style {
        ApiStyle::ChatCompletions => body["choices"][0]["message"]["content"].as_str(),
        ApiStyle::AnthropicMessages => body["content"]
            .as_array()
            .and_then(|blocks| blocks.iter().find(|b| b["type"] == "text"))
            .and_then(|block| block["text"].as_str()),
        ApiStyle::GeminiGenerate => body["candidates"][0]["content"]["parts"][0]["text"].as_str(),
    };

    match text {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => NO_RESPONSE.to_string(),
    }
}
