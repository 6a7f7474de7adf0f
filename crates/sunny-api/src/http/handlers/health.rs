use axum::Json;
use serde_json::{Value, json};

/// GET /health - Liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
