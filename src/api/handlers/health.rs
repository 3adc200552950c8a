//! Health check handler.

use axum::Json;
use serde_json::{Value, json};

/// GET /healthz
pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}
