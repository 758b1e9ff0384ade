//! API route configuration.

use crate::api::handlers::generate_word_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Form generation routes.
///
/// # Endpoints
///
/// - `POST /generate-word` - Fill the template and download the document
pub fn document_routes() -> Router<AppState> {
    Router::new().route("/generate-word", post(generate_word_handler))
}
