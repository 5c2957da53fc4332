//! OpenAI-backed summarizer agent.

use async_trait::async_trait;

use crate::agent::SummarizerAgent;
use crate::agent::workflow::{SummarizeState, SummarizerWorkflow};
use crate::clients::llm_client::{ChatCompletion, LlmClient};
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

/// Runs the two-node workflow over an OpenAI chat-completion transport.
/// One instance is built at startup and shared by all requests.
pub struct OpenAiAgent<C = LlmClient> {
    workflow: SummarizerWorkflow<C>,
}

impl OpenAiAgent<LlmClient> {
    pub fn new(config: &AppConfig) -> Self {
        let llm = LlmClient::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.openai_model.clone(),
        );
        Self::with_client(llm)
    }
}

impl<C: ChatCompletion + Send + Sync> OpenAiAgent<C> {
    /// Build an agent over any chat-completion transport.
    pub fn with_client(llm: C) -> Self {
        Self {
            workflow: SummarizerWorkflow::new(llm),
        }
    }
}

#[async_trait]
impl<C: ChatCompletion + Send + Sync> SummarizerAgent for OpenAiAgent<C> {
    async fn summarize_text(&self, text: &str) -> Result<String, SummarizeError> {
        let mut state = SummarizeState::new(text);
        self.workflow
            .run(&mut state)
            .await
            .and_then(|()| match state.summary.take() {
                Some(summary) if !summary.is_empty() => Ok(summary),
                // A successful call with no summary text breaks the
                // generation contract, never a silent empty response
                _ => Err(SummarizeError::EmptySummary),
            })
            .map_err(|e| SummarizeError::Failed(e.to_string()))
    }
}
