use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No summarizer registered for model: '{0}'")]
    UnsupportedModel(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("LLM returned an empty summary")]
    EmptySummary,

    #[error("Summarization failed: {0}")]
    Failed(String),

    #[error("LLM call timed out after {} seconds", .0.as_secs_f32())]
    Timeout(Duration),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}
