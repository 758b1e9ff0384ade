//! Handler for unmatched routes.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Answers every unknown route with a JSON 404.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Route not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
