//! Filesystem-backed template store.

use crate::domain::repositories::TemplateStore;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads the template from a fixed path on every call.
///
/// Nothing is cached, so replacing the file on disk takes effect on the next
/// request.
#[derive(Debug, Clone)]
pub struct FsTemplateStore {
    path: PathBuf,
}

impl FsTemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn load(&self) -> Result<Vec<u8>, AppError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            let message = match e.kind() {
                ErrorKind::NotFound => "Template file not found",
                ErrorKind::PermissionDenied => "Template file is not readable",
                _ => "Failed to read template file",
            };
            tracing::error!(path = %self.path.display(), error = %e, "{message}");
            AppError::template_unavailable(
                message,
                json!({ "path": self.path.display().to_string() }),
            )
        })
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
