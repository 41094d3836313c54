//! GET /conversation/{id} — assembles a chat into a normalized conversation.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use conversation_builder::serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Handler: GET /conversation/{id}
///
/// # Example
/// ```bash
/// curl http://127.0.0.1:8000/conversation/64f1c2
/// ```
#[instrument(name = "conversation_route", skip(state))]
pub async fn conversation_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let conversation = state.assembler.assemble(&id).await?;
    let body = serialize(&conversation)?;

    info!(questions = conversation.questions.len(), "conversation served");
    Ok(Json(body))
}
