//! Request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::error::{AppError, MALFORMED_REQUEST_MESSAGE};
use crate::models::{GeneratedReply, ReplyForm};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Draft a reply for the submitted form
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedReply>, AppError> {
    let Json(value) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Malformed request body");
        AppError::InvalidInput(MALFORMED_REQUEST_MESSAGE.to_string())
    })?;

    let request = ReplyForm::from_json(value)
        .and_then(ReplyForm::into_request)
        .inspect_err(|e| warn!(error = %e, "Form rejected"))?;

    Ok(Json(state.agent.generate_email_response(&request)))
}
