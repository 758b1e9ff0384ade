//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! auto-generated via `mockall` for unit tests.

pub mod template_store;

pub use template_store::TemplateStore;

#[cfg(test)]
pub use template_store::MockTemplateStore;
