//! Infrastructure layer: file formats and storage.
//!
//! - [`docx`] - Word document codec (zip package + `word/document.xml`)
//! - [`template_store`] - [`crate::domain::repositories::TemplateStore`]
//!   implementations

pub mod docx;
pub mod template_store;
