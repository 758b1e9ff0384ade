//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Department`] - A named roster with per-member shift labels
//! - [`ShiftLabel`] / [`Schedule`] - Shift names and schedule snapshots
//! - [`PatientRecord`] - Patient fields written into a form
//! - [`DocumentTemplate`] - Paragraph/run text model of a form template

pub mod department;
pub mod patient;
pub mod shift;
pub mod template;

pub use department::Department;
pub use patient::PatientRecord;
pub use shift::{Schedule, ShiftLabel, WORKING_SHIFTS};
pub use template::{DocumentTemplate, FieldLabel, FillMode, Paragraph, Run};
