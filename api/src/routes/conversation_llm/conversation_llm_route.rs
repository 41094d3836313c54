//! GET /conversation_llm/{position} — LLM-generated conversation for a job position.

use std::sync::Arc;

use ai_llm_service::AiLlmError;
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::instrument;

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Handler: GET /conversation_llm/{position}
///
/// Returns the model's JSON reply as-is.
#[instrument(name = "conversation_llm_route", skip(state))]
pub async fn conversation_llm_route(
    State(state): State<Arc<AppState>>,
    Path(position): Path<String>,
) -> AppResult<Json<Value>> {
    let value = state.generator.generate(&position).await?;
    Ok(Json(value))
}

/// Handler: GET /conversation_llm and /conversation_llm/ (no position segment).
pub async fn missing_position_route() -> AppResult<Json<Value>> {
    Err(AiLlmError::MissingParameter.into())
}
