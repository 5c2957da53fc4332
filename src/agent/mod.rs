//! Summarizer agents and the model-name registry that resolves them.

pub mod classifier;
pub mod openai;
pub mod workflow;

use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::llm_client::LlmClient;
use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

use self::openai::OpenAiAgent;

/// A model-backed summarizer capability: raw page text in, summary out.
#[async_trait]
pub trait SummarizerAgent: Send + Sync {
    async fn summarize_text(&self, text: &str) -> Result<String, SummarizeError>;
}

type AgentCtor = fn(&AppConfig) -> Arc<dyn SummarizerAgent>;

fn openai_ctor(config: &AppConfig) -> Arc<dyn SummarizerAgent> {
    Arc::new(OpenAiAgent::<LlmClient>::new(config))
}

/// Providers are keyed by a case-insensitive substring of the model name.
/// Adding a provider means adding a row here.
const MODEL_REGISTRY: &[(&str, AgentCtor)] = &[("gpt", openai_ctor)];

/// Resolve a model identifier into a concrete agent.
///
/// An unrecognized model name is a startup-fatal configuration error,
/// never a per-request one.
pub fn create_agent(
    model: &str,
    config: &AppConfig,
) -> Result<Arc<dyn SummarizerAgent>, SummarizeError> {
    let lowered = model.to_lowercase();
    for (key, ctor) in MODEL_REGISTRY {
        if lowered.contains(key) {
            return Ok(ctor(config));
        }
    }
    Err(SummarizeError::UnsupportedModel(model.to_string()))
}
