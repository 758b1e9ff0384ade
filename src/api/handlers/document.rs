//! Handler for the form generation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::document::GenerateWordRequest;
use crate::domain::entities::PatientRecord;
use crate::error::AppError;
use crate::infrastructure::docx::DOCX_CONTENT_TYPE;
use crate::state::AppState;

/// Fills the configured template with patient fields and returns the document.
///
/// # Endpoint
///
/// `POST /generate-word`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "John Doe",
///   "age": "30",
///   "sex": "Male",
///   "diagnosis": "Hypertension",
///   "date": "2024-03-13"
/// }
/// ```
///
/// # Response
///
/// `200 OK` with the `.docx` bytes,
/// `Content-Type: application/vnd.openxmlformats-officedocument.wordprocessingml.document`
/// and `Content-Disposition: attachment; filename=filled-form.docx`.
///
/// # Errors
///
/// - **400**: body is not JSON, a field is missing or not a string, or a
///   value is too long
/// - **413**: body exceeds the configured limit
/// - **500**: template missing or not a valid `.docx`
pub async fn generate_word_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateWordRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = PatientRecord::from(payload);
    let document = state
        .document_service
        .generate(&record, state.fill_mode)
        .await?;

    tracing::info!(size = document.len(), "Generated filled form");

    let disposition = format!("attachment; filename={}", state.output_filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}
