//! HTTP-facing error type.
//!
//! Every failure on the request path ends up as an [`AppError`] and is
//! rendered as:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use crate::infrastructure::docx::DocxError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    PayloadTooLarge { message: String, details: Value },
    TemplateUnavailable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn payload_too_large(message: impl Into<String>, details: Value) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
            details,
        }
    }
    pub fn template_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::TemplateUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TemplateUnavailable { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its JSON payload without consuming it.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::NotFound { message, details } => ("not_found", message, details),
            Self::PayloadTooLarge { message, details } => ("payload_too_large", message, details),
            Self::TemplateUnavailable { message, details } => {
                ("template_unavailable", message, details)
            }
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let reason = rejection.body_text();

        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large("Request body too large", json!({ "reason": reason }))
        } else {
            AppError::bad_request("Invalid JSON body", json!({ "reason": reason }))
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        AppError::bad_request(
            "Validation failed",
            json!({ "fields": fields, "reason": errors.to_string() }),
        )
    }
}

impl From<DocxError> for AppError {
    fn from(e: DocxError) -> Self {
        AppError::internal("Template document is invalid", json!({ "reason": e.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::payload_too_large("x", json!({})).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::template_unavailable("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::template_unavailable("Template not found", json!({"path": "a.docx"}))
            .to_error_info();

        assert_eq!(info.code, "template_unavailable");
        assert_eq!(info.message, "Template not found");
        assert_eq!(info.details["path"], "a.docx");
    }

    #[test]
    fn test_docx_error_is_internal() {
        let err: AppError = DocxError::MissingPart("word/document.xml").into();
        assert_eq!(err.to_error_info().code, "internal_error");
    }
}
