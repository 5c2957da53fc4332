//! LLM (OpenAI) API client module
//!
//! Encapsulates the single chat-completion round trip the workflow nodes
//! make against the provider.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::SummarizeError;

const TEMPERATURE: f64 = 0.1;
const MAX_OUTPUT_TOKENS: usize = 400;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One chat-completion call: a fully formed user prompt in, the model's
/// textual reply out. The workflow nodes depend on this seam rather than
/// on a concrete provider.
#[async_trait]
pub trait ChatCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, SummarizeError>;
}

/// LLM API client shared by all requests; holds no per-request state.
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            // No request timeout here: the service layer owns the deadline.
            http: Client::new(),
            api_key,
            org_id,
            model_name,
        }
    }

    fn build_prompt(&self, prompt: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, SummarizeError> {
        let messages = self.build_prompt(prompt);

        info!(
            model = %self.model_name,
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let input_messages: Vec<Value> = messages
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content_val = match &msg.content {
                    Content::Text(text) => json!(text),
                    // Image content never occurs in this service
                    _ => json!(""),
                };

                json!({
                    "role": role_str,
                    "content": content_val
                })
            })
            .collect();

        let request_body = json!({
            "model": self.model_name,
            "messages": input_messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_OUTPUT_TOKENS
        });

        let mut request = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummarizeError::OpenAIError(format!(
                "OpenAI API error: {}",
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::OpenAIError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        let text_opt = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        text_opt.ok_or_else(|| SummarizeError::OpenAIError("No text in response".to_string()))
    }
}
