use std::error::Error;
use std::time::Duration;

use gist::errors::SummarizeError;

#[test]
fn summarize_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::EmptySummary;
    assert_error(&error);
}

#[test]
fn summarize_error_display() {
    let error = SummarizeError::UnsupportedModel("claude-3".to_string());
    assert_eq!(
        format!("{error}"),
        "No summarizer registered for model: 'claude-3'"
    );

    let error = SummarizeError::OpenAIError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = SummarizeError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = SummarizeError::Failed("LLM is down".to_string());
    assert_eq!(format!("{error}"), "Summarization failed: LLM is down");
}

#[test]
fn timeout_display_includes_the_configured_seconds() {
    let error = SummarizeError::Timeout(Duration::from_millis(100));
    let message = format!("{error}");
    assert!(message.contains("timed out"));
    assert!(message.contains("0.1"));

    let error = SummarizeError::Timeout(Duration::from_secs(30));
    assert!(format!("{error}").contains("30"));
}

#[test]
fn summarize_error_from_conversions() {
    // We can't easily construct a reqwest::Error directly, but we can
    // verify that the From<reqwest::Error> conversion exists
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
