//! Axum route handlers for the Portfolio API.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{Portfolio, PortfolioData};
use crate::render::{package_site, TemplateKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub data: PortfolioData,
    pub template: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub portfolio_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub success: bool,
    pub portfolio: Portfolio,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-portfolio
///
/// Assigns an id and timestamps, then persists the portfolio.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let portfolio = Portfolio::new(request.data, request.template);
    state.store.insert(&portfolio).await?;

    info!("Portfolio created with ID: {}", portfolio.id);

    Ok(Json(GenerateResponse {
        success: true,
        portfolio_id: portfolio.id,
        message: "Portfolio generated successfully".to_string(),
    }))
}

/// GET /api/portfolio/:id
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let portfolio = load_portfolio(&state, &id).await?;

    Ok(Json(PortfolioResponse {
        success: true,
        portfolio,
    }))
}

/// GET /api/download-portfolio/:id
///
/// Renders the stored portfolio and streams it back as a ZIP attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let portfolio = load_portfolio(&state, &id).await?;

    let archive = package_site(&portfolio)?;
    info!(
        "Packaged portfolio {} with template {} ({} bytes)",
        portfolio.id,
        TemplateKind::from_name(&portfolio.selected_template),
        archive.len()
    );

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_filename(&portfolio.data.name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(archive),
    )
        .into_response())
}

/// Exact-id lookup. An id that is not a UUID cannot exist, so it is a miss too.
async fn load_portfolio(state: &AppState, id: &str) -> Result<Portfolio, AppError> {
    let not_found = || AppError::NotFound("Portfolio not found".to_string());

    let id = Uuid::parse_str(id).map_err(|_| not_found())?;
    state.store.find_by_id(id).await?.ok_or_else(not_found)
}

/// `<name>_portfolio.zip`, with spaces and anything header-unsafe mapped to `_`.
fn download_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_portfolio.zip")
}
