pub mod routes;
pub mod models;
pub mod errors;

use std::sync::Arc;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::FlightRiskConfig;

#[derive(Clone)]
pub struct AppState {
    /// Defaults for rates, columns and validation keywords. Never mutated.
    pub config: Arc<FlightRiskConfig>,
}

pub fn create_app_state(config: FlightRiskConfig) -> AppState {
    AppState {
        config: Arc::new(config),
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes();
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/analyze", axum::routing::post(routes::analyze::analyze))
        .route("/api/report", axum::routing::post(routes::reports::export_report))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
