//! speakscore-report library - assessment report service
//!
//! Serves one student's enriched score report as JSON plus the static
//! dashboard page that renders it.

use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Backing assessment record, re-read on every request
    pub data_file: Arc<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: Arc::new(data_file.into()),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/report.css", get(api::serve_report_css))
        .route("/api/assessment", get(api::get_assessment))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
