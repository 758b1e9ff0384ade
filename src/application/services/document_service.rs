//! Filled-form generation service.

use crate::application::services::template_filler::fill_template;
use crate::domain::entities::{FillMode, PatientRecord};
use crate::domain::repositories::TemplateStore;
use crate::error::AppError;
use crate::infrastructure::docx::DocxDocument;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

/// Produces filled `.docx` forms from a [`TemplateStore`].
///
/// The template is loaded fresh for every document.
pub struct DocumentService<S: TemplateStore> {
    store: Arc<S>,
}

impl<S: TemplateStore> DocumentService<S> {
    /// Creates a new document service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fills the template with `record` and returns the encoded document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TemplateUnavailable`] if the template cannot be read.
    /// Returns [`AppError::Internal`] if the template is not a valid `.docx`.
    pub async fn generate(&self, record: &PatientRecord, mode: FillMode) -> Result<Vec<u8>, AppError> {
        let bytes = self.store.load().await?;

        let mut document = DocxDocument::from_bytes(&bytes)?;
        let mut template = document.template();
        let report = fill_template(&mut template, record, mode);

        if report.replaced == 0 && report.unfilled.is_empty() {
            tracing::warn!(
                template = %self.store.location(),
                %mode,
                "Template contains no recognized labels"
            );
        }
        for &paragraph in &report.unfilled {
            tracing::warn!(
                template = %self.store.location(),
                paragraph,
                %mode,
                "Label split across runs was left unfilled"
            );
        }

        document.apply(&template)?;
        let filled = document.to_bytes()?;

        tracing::debug!(replaced = report.replaced, size = filled.len(), %mode, "Filled form");
        Ok(filled)
    }

    /// Fills the template and writes the document to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentService::generate`], plus [`AppError::Internal`] if
    /// the output file cannot be written.
    pub async fn generate_to_file(
        &self,
        record: &PatientRecord,
        mode: FillMode,
        path: &Path,
    ) -> Result<usize, AppError> {
        let filled = self.generate(record, mode).await?;

        tokio::fs::write(path, &filled).await.map_err(|e| {
            AppError::internal(
                "Failed to write filled document",
                json!({ "path": path.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        tracing::info!(path = %path.display(), "Document saved");
        Ok(filled.len())
    }

    /// Checks that the template is readable.
    pub async fn template_available(&self) -> bool {
        self.store.health_check().await
    }

    pub fn template_location(&self) -> String {
        self.store.location()
    }
}
