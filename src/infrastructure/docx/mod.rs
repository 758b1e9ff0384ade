//! Minimal Word (`.docx`) codec.
//!
//! Reads the zip package, exposes the paragraph/run text of
//! `word/document.xml` as a [`crate::domain::entities::DocumentTemplate`],
//! and writes edited text back without touching any other XML.
//!
//! Only text inside `<w:t>` elements is surfaced. Runs without text (tabs,
//! breaks, drawings) are invisible to the template model and are written
//! back unchanged.

mod body;
mod error;
mod package;
mod starter;

pub use error::DocxError;
pub use package::DocxDocument;
pub use starter::{STARTER_LINES, starter_template};

/// MIME type of a Word document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Path of the main document part inside the package.
pub const DOCUMENT_PART: &str = "word/document.xml";
