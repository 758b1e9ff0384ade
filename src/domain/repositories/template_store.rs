//! Repository trait for form templates.

use crate::error::AppError;
use async_trait::async_trait;

/// Source of raw `.docx` template bytes.
///
/// Implementations must read fresh bytes on every call; filled documents are
/// never produced from a cached template.
///
/// # Implementations
///
/// - [`crate::infrastructure::template_store::FsTemplateStore`] - file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Loads the template bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::TemplateUnavailable`] if the template cannot be read.
    async fn load(&self) -> Result<Vec<u8>, AppError>;

    /// Reports whether the template is currently readable.
    async fn health_check(&self) -> bool;

    /// Human-readable location used in logs and health output.
    fn location(&self) -> String;
}
