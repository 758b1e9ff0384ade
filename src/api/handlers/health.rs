//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Template readable
/// - **503 Service Unavailable**: Template missing or unreadable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "template": {
///       "status": "ok",
///       "message": "Readable: allergist-prescription-template.docx"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let template_check = check_template(&state).await;
    let healthy = template_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            template: template_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_template(state: &AppState) -> CheckStatus {
    let location = state.document_service.template_location();

    if state.document_service.template_available().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Readable: {location}")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Template not found: {location}")),
        }
    }
}
