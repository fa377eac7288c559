//! Per-run session state.
//!
//! Holds the validated key and the selected model. Handlers receive the
//! session by reference; nothing here is global.

use crate::config::Config;
use crate::error::{CliError, Result};
use cyclecoach_llm::{Credential, ModelSelector};
use tracing::{debug, warn};

/// Validated key and model selection for the current run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credential: Option<Credential>,
    model: ModelSelector,
}

impl Session {
    /// Start a session with no key.
    pub fn new(model: ModelSelector) -> Self {
        Self {
            credential: None,
            model,
        }
    }

    /// Start a session from configuration, re-validating any stored key.
    ///
    /// A stored key that no longer passes the format check is ignored.
    pub fn from_config(config: &Config, model_override: Option<ModelSelector>) -> Self {
        let model = model_override.unwrap_or(config.model);
        let mut session = Self::new(model);

        if let Some(raw) = &config.credential {
            match model.validate_credential(raw) {
                Ok(credential) => session.credential = Some(credential),
                Err(e) => warn!(model = %model, error = %e, "Ignoring stored key"),
            }
        }
        session
    }

    /// Currently selected model.
    pub fn model(&self) -> ModelSelector {
        self.model
    }

    /// Validated key, if any.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The validated key, or [`CliError::NotValidated`].
    pub fn require_credential(&self) -> Result<&Credential> {
        self.credential.as_ref().ok_or(CliError::NotValidated)
    }

    /// Switch model. A key validated for another model is dropped.
    pub fn select_model(&mut self, model: ModelSelector) {
        if self.model == model {
            return;
        }
        if self.credential.take().is_some() {
            debug!(from = %self.model, to = %model, "Model changed, key cleared");
        }
        self.model = model;
    }

    /// Validate `raw` for `model` (or the current model) and keep it.
    ///
    /// On failure the session keeps no key at all.
    pub fn set_credential(&mut self, raw: &str, model: Option<ModelSelector>) -> Result<&Credential> {
        let model = model.unwrap_or(self.model);
        self.model = model;
        self.credential = None;

        let credential = model.validate_credential(raw)?;
        Ok(self.credential.insert(credential))
    }

    /// Forget the key. Returns the one that was removed.
    pub fn clear_credential(&mut self) -> Option<Credential> {
        self.credential.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecoach_llm::LlmError;

    #[test]
    fn test_new_session_has_no_key() {
        let session = Session::new(ModelSelector::Qwen);
        assert!(session.credential().is_none());
        assert!(matches!(session.require_credential(), Err(CliError::NotValidated)));
    }

    #[test]
    fn test_set_credential_for_current_model() {
        let mut session = Session::new(ModelSelector::Qwen);
        let masked = session.set_credential("  sk-or-v1-abcdef123456  ", None).unwrap().masked();
        assert_eq!(masked, "sk-or-v1...3456");
        assert_eq!(session.require_credential().unwrap().model(), ModelSelector::Qwen);
    }

    #[test]
    fn test_set_credential_switches_model() {
        let mut session = Session::new(ModelSelector::Qwen);
        session
            .set_credential("sk-ant-api03-key", Some(ModelSelector::Claude))
            .unwrap();
        assert_eq!(session.model(), ModelSelector::Claude);
    }

    #[test]
    fn test_rejected_key_clears_previous() {
        let mut session = Session::new(ModelSelector::Gemini);
        session.set_credential("AIzaSyTestKey", None).unwrap();

        let err = session.set_credential("sk-wrong", None).unwrap_err();
        assert!(matches!(err, CliError::Llm(LlmError::InvalidCredential(_))));
        assert!(session.credential().is_none());
    }

    #[test]
    fn test_empty_key_is_missing() {
        let mut session = Session::default();
        let err = session.set_credential("   ", None).unwrap_err();
        assert!(matches!(err, CliError::Llm(LlmError::MissingCredential)));
    }

    #[test]
    fn test_model_change_drops_key() {
        let mut session = Session::new(ModelSelector::Gpt4);
        session.set_credential("sk-proj-123", None).unwrap();

        session.select_model(ModelSelector::Gpt4);
        assert!(session.credential().is_some());

        session.select_model(ModelSelector::Claude);
        assert!(session.credential().is_none());
        assert_eq!(session.model(), ModelSelector::Claude);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.model = ModelSelector::Claude;
        config.credential = Some("sk-ant-stored".to_string());
        let session = Session::from_config(&config, None);
        assert!(session.credential().is_some());

        // Stored Claude key does not pass the OpenRouter prefix check
        let session = Session::from_config(&config, Some(ModelSelector::Qwen));
        assert!(session.credential().is_none());
        assert_eq!(session.model(), ModelSelector::Qwen);
    }

    #[test]
    fn test_clear_credential() {
        let mut session = Session::new(ModelSelector::Qwen);
        session.set_credential("sk-or-v1-x", None).unwrap();
        assert!(session.clear_credential().is_some());
        assert!(session.clear_credential().is_none());
    }
}
