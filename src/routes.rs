//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /generate-word` - Filled form download
//! - `GET  /health`        - Template availability check
//! - anything else         - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Body limit** - Request bodies capped at the configured size
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `max_body_bytes` - largest accepted request body; larger bodies get 413
pub fn app_router(state: AppState, max_body_bytes: usize) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::document_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
