use std::time::Duration;

use async_trait::async_trait;

use gist::agent::create_agent;
use gist::agent::openai::OpenAiAgent;
use gist::agent::SummarizerAgent;
use gist::clients::llm_client::ChatCompletion;
use gist::core::config::AppConfig;
use gist::errors::SummarizeError;

fn dummy_config() -> AppConfig {
    AppConfig {
        openai_api_key: "dummy_key".to_string(),
        openai_org_id: None,
        openai_model: "gpt-4o-mini".to_string(),
        llm_timeout: Duration::from_secs(30),
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

/// Replies with a fixed string for every call.
struct FixedLlm(&'static str);

#[async_trait]
impl ChatCompletion for FixedLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, SummarizeError> {
        Ok(self.0.to_string())
    }
}

/// Always fails, like a provider outage.
struct DownLlm;

#[async_trait]
impl ChatCompletion for DownLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::OpenAIError("LLM is down".to_string()))
    }
}

#[test]
fn registry_resolves_gpt_models() {
    assert!(create_agent("gpt-4o-mini", &dummy_config()).is_ok());
    assert!(create_agent("gpt-5", &dummy_config()).is_ok());
}

#[test]
fn registry_matching_is_case_insensitive() {
    assert!(create_agent("GPT-4o", &dummy_config()).is_ok());
}

#[test]
fn unknown_model_is_a_configuration_error() {
    let err = create_agent("claude-3-haiku", &dummy_config()).err().unwrap();
    match &err {
        SummarizeError::UnsupportedModel(model) => assert_eq!(model, "claude-3-haiku"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("claude-3-haiku"));
}

#[tokio::test]
async fn agent_returns_the_model_reply() {
    let agent = OpenAiAgent::with_client(FixedLlm("the gist of it"));
    let summary = agent.summarize_text("Some valid text").await.unwrap();
    assert_eq!(summary, "the gist of it");
}

#[tokio::test]
async fn agent_wraps_provider_failures_with_context() {
    let agent = OpenAiAgent::with_client(DownLlm);
    let err = agent.summarize_text("Some valid text").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Summarization failed"));
    assert!(message.contains("LLM is down"));
}

#[tokio::test]
async fn empty_model_reply_is_an_error_not_an_empty_summary() {
    let agent = OpenAiAgent::with_client(FixedLlm(""));
    let err = agent.summarize_text("Some valid text").await.unwrap_err();
    assert!(err.to_string().contains("empty summary"));
}
