//! Business logic services for the application layer.

pub mod document_service;
pub mod leave_service;
pub mod roster_service;
pub mod shift_scheduler;
pub mod template_filler;
pub mod workload_service;

pub use document_service::DocumentService;
pub use leave_service::LeaveService;
pub use roster_service::RosterService;
pub use shift_scheduler::{RandomStrategy, RotationStrategy, ShiftScheduler, ShiftStrategy};
pub use template_filler::{FillReport, fill_template};
pub use workload_service::{TaskAssignment, WorkloadService};
