//! Core `GrammarCorrector` trait and `ApiCorrector` implementation.
//!
//! `ApiCorrector` calls any OpenAI-compatible `/v1/chat/completions`
//! endpoint — Ollama (OpenAI mode), OpenAI, Groq, LM Studio, vLLM, etc.
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;
use crate::llm::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur during a correction call.
///
/// A failure aborts the single request it belongs to: the caller reports
/// it and skips classification. The core never retries.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The LLM returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// GrammarCorrector trait
// ---------------------------------------------------------------------------

/// Async trait for LLM-based grammar correction.
///
/// Implementors must be `Send + Sync` so they can be shared across threads
/// (e.g. wrapped in `Arc<dyn GrammarCorrector>`).
#[async_trait]
pub trait GrammarCorrector: Send + Sync {
    /// Return the grammatically corrected version of `text`.
    async fn correct(&self, text: &str) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiCorrector
// ---------------------------------------------------------------------------

/// Environment variable consulted for the API key when the config has none.
pub const API_KEY_ENV: &str = "TRANSCRIPT_POLISH_API_KEY";

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Works with: Ollama (OpenAI mode), OpenAI, Groq, Together.ai, LM Studio,
/// vLLM — any provider that speaks the OpenAI chat-completions wire format.
///
/// # No hardcoded URLs
/// All connection details (`base_url`, `api_key`, `model`) come from the
/// [`LlmConfig`] passed to [`ApiCorrector::from_config`]; the API key may
/// also be supplied via the `TRANSCRIPT_POLISH_API_KEY` environment
/// variable.
pub struct ApiCorrector {
    client: reqwest::Client,
    config: LlmConfig,
    prompt_builder: PromptBuilder,
}

impl ApiCorrector {
    /// Build an `ApiCorrector` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`. A default (no-timeout) client is used as a
    /// last-resort fallback if the builder fails (should never happen in
    /// practice).
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut config = config.clone();
        if config.api_key.as_deref().unwrap_or("").is_empty() {
            config.api_key = std::env::var(API_KEY_ENV).ok();
        }

        Self {
            client,
            config,
            prompt_builder: PromptBuilder::new(),
        }
    }
}

#[async_trait]
impl GrammarCorrector for ApiCorrector {
    /// Send `text` to the configured OpenAI-compatible endpoint.
    ///
    /// The `Authorization: Bearer …` header is attached **only** when an
    /// API key is present and non-empty — safe for Ollama and other local
    /// providers that require no authentication.
    async fn correct(&self, text: &str) -> Result<String, LlmError> {
        let (system_msg, user_msg) = self.prompt_builder.build_chat(text);

        let url = format!("{}/v1/chat/completions", self.config.base_url);

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  512
        });

        let mut req = self.client.post(&url).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let corrected = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LlmError::EmptyResponse)?
            .trim();

        let corrected = strip_correction_label(corrected).to_string();

        if corrected.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(corrected)
    }
}

/// Drop a leading "Corrected …:" label some models prepend despite the
/// prompt asking for the corrected text only.
fn strip_correction_label(text: &str) -> &str {
    if text.to_lowercase().starts_with("corrected") {
        if let Some(idx) = text.find(':') {
            return text[idx + 1..].trim();
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
