use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> &'static str {
    "BhoomiMitra backend is running"
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok", "time": chrono::Utc::now().to_rfc3339() }))
}
