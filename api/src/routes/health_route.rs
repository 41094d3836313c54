use axum::Json;
use serde_json::{Value, json};

/// Liveness probe; never touches upstream services.
pub async fn health_route() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
