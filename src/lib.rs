//! # Clinic Desk
//!
//! Two small hospital back-office tools in one crate:
//!
//! - **Roster Store** - departments, staff membership, shift labels, leave
//!   adjustment, placeholder shift assignment and least-loaded task
//!   distribution, all in memory.
//! - **Template Filler** - writes a patient record into a Word form template
//!   and serves the result from `POST /generate-word`.
//!
//! The two do not share state.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, roster notifications, storage traits
//! - **Application Layer** ([`application`]) - Roster services and form generation
//! - **Infrastructure Layer** ([`infrastructure`]) - `.docx` codec and template storage
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a starter template next to the binary
//! cargo run --bin desk -- template init
//!
//! # Start the service on :8000
//! cargo run
//!
//! curl -X POST localhost:8000/generate-word \
//!   -H 'content-type: application/json' \
//!   -d '{"name":"John Doe","age":"30","sex":"Male","diagnosis":"Hypertension","date":"2024-03-13"}' \
//!   -o filled-form.docx
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DocumentService, FillReport, LeaveService, RandomStrategy, RosterService, RotationStrategy,
        ShiftScheduler, ShiftStrategy, TaskAssignment, WorkloadService, fill_template,
    };
    pub use crate::domain::entities::{
        Department, DocumentTemplate, FieldLabel, FillMode, PatientRecord, Schedule, ShiftLabel,
    };
    pub use crate::domain::errors::RosterError;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
