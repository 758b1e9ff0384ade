//! Patient fields written into a prescription form.

use crate::domain::entities::template::FieldLabel;
use serde::{Deserialize, Serialize};

/// The five values a form template knows how to place.
///
/// Values are free text and are written exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: String,
    pub sex: String,
    pub diagnosis: String,
    pub date: String,
}

impl PatientRecord {
    /// Returns the value that belongs after `label` in a filled form.
    pub fn value(&self, label: FieldLabel) -> &str {
        match label {
            FieldLabel::Name => &self.name,
            FieldLabel::Age => &self.age,
            FieldLabel::Sex => &self.sex,
            FieldLabel::Diagnosis => &self.diagnosis,
            FieldLabel::Date => &self.date,
        }
    }
}
