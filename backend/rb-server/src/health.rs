use axum::Json;
use serde_json::{Value, json};

/// GET / and GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "ok": true,
        "message": "Healthy",
    }))
}
