//! Shared application state injected into handlers.

use crate::application::services::DocumentService;
use crate::domain::entities::FillMode;
use crate::infrastructure::template_store::FsTemplateStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService<FsTemplateStore>>,
    /// Substitution mode used by `POST /generate-word`.
    pub fill_mode: FillMode,
    /// File name advertised in `Content-Disposition`.
    pub output_filename: Arc<str>,
}

impl AppState {
    pub fn new(store: FsTemplateStore, fill_mode: FillMode, output_filename: &str) -> Self {
        Self {
            document_service: Arc::new(DocumentService::new(Arc::new(store))),
            fill_mode,
            output_filename: Arc::from(output_filename),
        }
    }
}
