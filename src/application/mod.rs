//! Application layer services implementing business logic.
//!
//! # Available Services
//!
//! Roster Store:
//!
//! - [`services::roster_service::RosterService`] - Departments, membership and shift labels
//! - [`services::leave_service::LeaveService`] - Leave requests and schedule adjustment
//! - [`services::shift_scheduler::ShiftScheduler`] - Strategy-driven shift assignment
//! - [`services::workload_service::WorkloadService`] - Least-loaded task distribution
//!
//! Template Filler:
//!
//! - [`services::template_filler`] - Label substitution over a template
//! - [`services::document_service::DocumentService`] - Load, fill and encode `.docx` forms

pub mod services;
