//! Summarization backends.
//!
//! Two backend handles (primary and multilingual) are expensive collaborators
//! constructed once per process into a [`BackendSet`] and shared read-only by
//! every summarization call.

use super::BackendKind;
use crate::config::{Prompts, SummarizationSettings};
use crate::error::{NotatError, Result};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default timeout for OpenAI API requests (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Create an OpenAI client with configured timeout.
///
/// Uses a 5-minute timeout by default to prevent hung API calls.
pub fn create_client() -> Client<OpenAIConfig> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client");

    Client::with_config(OpenAIConfig::default()).with_http_client(http_client)
}

/// Trait for abstractive summarization backends.
///
/// Implementations must use deterministic decoding: repeated calls on
/// identical input return identical output.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Reduce `text` to a summary between `min_output_len` and
    /// `max_output_len` (in the backend's output units, roughly words).
    async fn summarize(&self, text: &str, max_output_len: u32, min_output_len: u32)
        -> Result<String>;
}

/// OpenAI chat-completion summarization backend.
pub struct OpenAiBackend {
    client: Client<OpenAIConfig>,
    model: String,
    prompts: Prompts,
}

impl OpenAiBackend {
    /// Create a backend for a specific model with the given prompts.
    pub fn with_config(model: &str, prompts: Prompts) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            prompts,
        }
    }
}

#[async_trait]
impl SummaryBackend for OpenAiBackend {
    #[instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    async fn summarize(
        &self,
        text: &str,
        max_output_len: u32,
        min_output_len: u32,
    ) -> Result<String> {
        let mut vars = HashMap::new();
        vars.insert("max_len".to_string(), max_output_len.to_string());
        vars.insert("min_len".to_string(), min_output_len.to_string());
        vars.insert("text".to_string(), text.to_string());

        let system = self
            .prompts
            .render_with_custom(&self.prompts.summarize.system, &vars);
        let user = self
            .prompts
            .render_with_custom(&self.prompts.summarize.user, &vars);

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            // Deterministic decoding: no sampling, pinned seed
            .temperature(0.0)
            .seed(0)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system)
                    .build()
                    .map_err(|e| NotatError::Backend(format!("Failed to build request: {}", e)))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user)
                    .build()
                    .map_err(|e| NotatError::Backend(format!("Failed to build request: {}", e)))?
                    .into(),
            ])
            .build()
            .map_err(|e| NotatError::Backend(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| NotatError::Backend(format!("Summarization API error: {}", e)))?;

        let summary = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| NotatError::Backend("Empty summarization response".to_string()))?;

        debug!("Summarized {} chars into {} chars", text.len(), summary.len());
        Ok(summary)
    }
}

/// The two backend singletons for one process, selected by [`BackendKind`].
///
/// Constructed once at startup and shared read-only across all summarization
/// calls; selection never builds a new backend instance.
pub struct BackendSet {
    primary: Arc<dyn SummaryBackend>,
    multilingual: Arc<dyn SummaryBackend>,
}

impl BackendSet {
    /// Build a set from explicit backend handles (mock backends in tests).
    pub fn new(primary: Arc<dyn SummaryBackend>, multilingual: Arc<dyn SummaryBackend>) -> Self {
        Self {
            primary,
            multilingual,
        }
    }

    /// Build the production set: one OpenAI backend per configured model.
    pub fn from_settings(settings: &SummarizationSettings, prompts: &Prompts) -> Self {
        Self::new(
            Arc::new(OpenAiBackend::with_config(
                &settings.primary_model,
                prompts.clone(),
            )),
            Arc::new(OpenAiBackend::with_config(
                &settings.multilingual_model,
                prompts.clone(),
            )),
        )
    }

    /// Get the backend for a selection.
    pub fn get(&self, kind: BackendKind) -> &dyn SummaryBackend {
        match kind {
            BackendKind::Primary => self.primary.as_ref(),
            BackendKind::Multilingual => self.multilingual.as_ref(),
        }
    }
}
