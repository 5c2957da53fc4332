use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    #[serde(skip)]
    pub status: u16,
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// POST /api/summarize
///
/// Rejects empty or whitespace-only text with 422 before the core runs;
/// any core failure (remote error, empty summary, timeout) maps to one
/// 502 upstream-dependency category with the failure's message attached.
pub async fn summarize(
    State(service): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ErrorBody> {
    if request.text.trim().is_empty() {
        return Err(ErrorBody {
            detail: "text must not be empty".to_string(),
            status: 422,
        });
    }

    match service.summarize(&request.text).await {
        Ok(summary) => Ok(Json(SummarizeResponse { summary })),
        Err(e) => {
            error!(error = %e, "Summarization request failed");
            Err(ErrorBody {
                detail: e.to_string(),
                status: 502,
            })
        }
    }
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy"}))
}

pub async fn ready_check() -> Json<serde_json::Value> {
    Json(json!({"status": "ready"}))
}
