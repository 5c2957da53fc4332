//! Gist - an HTTP service that summarizes raw web-page text with an LLM.
//!
//! A request flows through a small two-node workflow before the summary
//! comes back:
//! 1. A pure classifier inspects the text for URLs and markup artifacts.
//! 2. Dirty text takes a detour through an LLM sanitization pass; clean
//!    text goes straight to the LLM summarization pass.
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP boundary
//! - reqwest against the OpenAI chat-completion API
//! - Tokio for the async runtime and the service-level timeout
//! - tracing for structured logging
//!
//! One agent handle is built at startup from the configured model name and
//! shared across all requests; the only per-request state is the working
//! record threaded through the workflow.

// Module declarations
pub mod agent;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod service;

/// Configure structured logging for the service.
///
/// Sets up tracing-subscriber with a fmt layer including targets, so the
/// classifier's routing decisions and the provider call sites are easy to
/// pick apart in the output. Call once at process start.
///
/// # Example
///
/// ```
/// // Initialize structured logging before anything else logs
/// gist::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
