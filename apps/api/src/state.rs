use std::sync::Arc;

use crate::enhance::enhancer::ContentEnhancer;
use crate::portfolio::store::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL or in-memory, chosen at startup from `DATABASE_URL`.
    pub store: Arc<dyn PortfolioStore>,
    pub enhancer: ContentEnhancer,
}
