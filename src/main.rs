use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use gist::agent::create_agent;
use gist::api::{AppState, router};
use gist::core::config::AppConfig;
use gist::service::SummarizeWithAgent;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    gist::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;

    // One agent and one service for the whole process lifetime
    let agent = create_agent(&config.openai_model, &config)?;
    let service: AppState = Arc::new(SummarizeWithAgent::with_timeout(agent, config.llm_timeout));

    let app = router(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        addr = %config.bind_addr,
        model = %config.openai_model,
        timeout_secs = config.llm_timeout.as_secs_f32(),
        "Summarizer listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
