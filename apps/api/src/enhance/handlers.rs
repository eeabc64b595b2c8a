//! Axum route handler for the enhancement API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::enhance::enhancer::EnhanceRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub success: bool,
    pub enhanced: Value,
}

/// POST /api/enhance-content
///
/// Always succeeds for a well-shaped body: LLM failures are absorbed by the fallback.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Json<EnhanceResponse> {
    let enhanced = state.enhancer.enhance(&request).await;

    Json(EnhanceResponse {
        success: true,
        enhanced,
    })
}
