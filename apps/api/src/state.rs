use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::recommend::enrich::Enricher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable text-enrichment collaborator. Default: GeminiEnricher.
    /// Scoring never depends on it; it only decorates the results screen.
    pub enricher: Arc<dyn Enricher>,
}
