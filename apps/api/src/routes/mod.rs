pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::enhance::handlers::handle_enhance;
use crate::portfolio::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(health::api_root_handler))
        .route("/api/enhance-content", post(handle_enhance))
        .route("/api/generate-portfolio", post(handlers::handle_generate))
        .route("/api/portfolio/:id", get(handlers::handle_get_portfolio))
        .route(
            "/api/download-portfolio/:id",
            get(handlers::handle_download),
        )
        .with_state(state)
}

/// `*` allows any origin without credentials. An explicit origin list allows
/// credentials and mirrors the requested methods and headers.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
