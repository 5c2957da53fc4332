//! HTTP boundary: request validation and error mapping around the
//! summarization service.

pub mod handler;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service::SummarizerService;

pub type AppState = Arc<dyn SummarizerService>;

pub fn router(service: AppState) -> Router {
    Router::new()
        .route("/api/summarize", post(handler::summarize))
        .route("/", get(handler::health_check))
        .route("/ready", get(handler::ready_check))
        // Browser extensions call this API cross-origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
