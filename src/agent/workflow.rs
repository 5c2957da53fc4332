//! The conditional two-node pipeline: route through sanitization when the
//! classifier flags the input, then always finish at summarization.

use tracing::info;

use crate::agent::classifier::needs_sanitization;
use crate::clients::llm_client::ChatCompletion;
use crate::errors::SummarizeError;
use crate::prompt::{EMPTY_TEXT_APOLOGY, sanitize_prompt, summarize_prompt};

/// Per-request working record threaded through the workflow. Created at
/// entry, dropped once the response is produced.
///
/// `summary` is populated iff the run reached the terminal node without
/// error; `sanitized_text`, when present, is the cleaning attempt for
/// `text_to_summarize`.
#[derive(Debug, Default)]
pub struct SummarizeState {
    pub text_to_summarize: String,
    pub sanitized_text: Option<String>,
    pub summary: Option<String>,
}

impl SummarizeState {
    pub fn new(text: &str) -> Self {
        Self {
            text_to_summarize: text.to_string(),
            ..Default::default()
        }
    }
}

/// The two model-calling nodes. `Summarizing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Sanitizing,
    Summarizing,
}

/// Sequential per request: at most one node is in flight at a time, no
/// fan-out, no retries. Node errors propagate to the caller untouched.
pub struct SummarizerWorkflow<C> {
    llm: C,
}

impl<C: ChatCompletion + Send + Sync> SummarizerWorkflow<C> {
    pub fn new(llm: C) -> Self {
        Self { llm }
    }

    fn decide_sanitization(&self, state: &SummarizeState) -> Node {
        let should_sanitize = needs_sanitization(&state.text_to_summarize);
        info!(
            sanitize = should_sanitize,
            text_length = state.text_to_summarize.chars().count(),
            "Routing decision"
        );
        if should_sanitize {
            Node::Sanitizing
        } else {
            Node::Summarizing
        }
    }

    async fn sanitize_node(&self, state: &mut SummarizeState) -> Result<(), SummarizeError> {
        let prompt = sanitize_prompt(&state.text_to_summarize);
        let cleaned = self.llm.complete(&prompt).await?;
        state.sanitized_text = Some(cleaned);
        Ok(())
    }

    async fn summarize_node(&self, state: &mut SummarizeState) -> Result<(), SummarizeError> {
        // Prefer the sanitized text when the detour ran
        let text = state
            .sanitized_text
            .as_deref()
            .unwrap_or(&state.text_to_summarize);
        if text.is_empty() {
            state.summary = Some(EMPTY_TEXT_APOLOGY.to_string());
            return Ok(());
        }
        let prompt = summarize_prompt(text);
        let summary = self.llm.complete(&prompt).await?;
        state.summary = Some(summary);
        Ok(())
    }

    /// Drive the state machine from entry to the terminal node.
    pub async fn run(&self, state: &mut SummarizeState) -> Result<(), SummarizeError> {
        let mut node = self.decide_sanitization(state);
        loop {
            match node {
                Node::Sanitizing => {
                    self.sanitize_node(state).await?;
                    node = Node::Summarizing;
                }
                Node::Summarizing => {
                    self.summarize_node(state).await?;
                    return Ok(());
                }
            }
        }
    }
}
