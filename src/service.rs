//! Service layer wrapping one workflow run in a deadline, so a hung
//! provider call becomes a bounded failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::warn;

use crate::agent::SummarizerAgent;
use crate::errors::SummarizeError;

/// Deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The inbound seam the HTTP boundary calls. The boundary rejects empty
/// or missing text before this is ever invoked.
#[async_trait]
pub trait SummarizerService: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Summarizer service backed by a shared agent.
///
/// When the deadline fires the workflow future is dropped; the in-flight
/// provider call is abandoned client-side, not aborted provider-side, so
/// the provider may still run the completion to the end.
pub struct SummarizeWithAgent {
    agent: Arc<dyn SummarizerAgent>,
    timeout: Duration,
}

impl SummarizeWithAgent {
    pub fn new(agent: Arc<dyn SummarizerAgent>) -> Self {
        Self::with_timeout(agent, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(agent: Arc<dyn SummarizerAgent>, timeout: Duration) -> Self {
        Self { agent, timeout }
    }
}

#[async_trait]
impl SummarizerService for SummarizeWithAgent {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        match timeout(self.timeout, self.agent.summarize_text(text)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    timeout_secs = self.timeout.as_secs_f32(),
                    "Summarization exceeded the service deadline"
                );
                Err(SummarizeError::Timeout(self.timeout))
            }
        }
    }
}
