use axum::Json;
use serde_json::{json, Value};

pub const READY_MESSAGE: &str = "PortfolioAI Backend - Ready";

/// GET /api/
pub async fn api_root_handler() -> Json<Value> {
    Json(json!({ "message": READY_MESSAGE }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
