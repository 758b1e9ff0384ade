//! Domain layer containing business entities and contracts.
//!
//! Nothing in here knows about HTTP, the filesystem or the `.docx` wire
//! format. Services in [`crate::application::services`] drive these types.
//!
//! # Architecture
//!
//! - [`entities`] - Roster and document data structures
//! - [`errors`] - Non-fatal roster notifications
//! - [`repositories`] - Storage trait definitions implemented by the
//!   infrastructure layer

pub mod entities;
pub mod errors;
pub mod repositories;
