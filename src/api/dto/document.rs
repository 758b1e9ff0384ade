//! DTOs for the form generation endpoint.

use crate::domain::entities::PatientRecord;
use serde::Deserialize;
use validator::Validate;

/// Longest value accepted for any single form field.
pub const MAX_FIELD_LEN: u64 = 512;

/// Patient fields to write into the form. All five are required strings.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateWordRequest {
    #[validate(length(max = MAX_FIELD_LEN))]
    pub name: String,

    #[validate(length(max = MAX_FIELD_LEN))]
    pub age: String,

    #[validate(length(max = MAX_FIELD_LEN))]
    pub sex: String,

    #[validate(length(max = MAX_FIELD_LEN))]
    pub diagnosis: String,

    #[validate(length(max = MAX_FIELD_LEN))]
    pub date: String,
}

impl From<GenerateWordRequest> for PatientRecord {
    fn from(request: GenerateWordRequest) -> Self {
        Self {
            name: request.name,
            age: request.age,
            sex: request.sex,
            diagnosis: request.diagnosis,
            date: request.date,
        }
    }
}
