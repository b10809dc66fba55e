use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Public landing route.
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the FAQ service" }))
}
