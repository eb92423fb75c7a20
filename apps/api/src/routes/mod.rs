pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::catalog::handlers as catalog_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog", get(catalog_handlers::handle_catalog))
        .route("/api/v1/blueprint", get(catalog_handlers::handle_blueprint))
        // Analysis API
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze).layer(upload_limit),
        )
        .route("/api/v1/analysis", get(handlers::handle_get_analysis))
        .route("/api/v1/suitable", get(handlers::handle_suitable))
        .route("/api/v1/roadmap", get(handlers::handle_roadmap))
        .route("/api/v1/ask", post(handlers::handle_ask))
        .with_state(state)
}
