//! Roster notifications.
//!
//! None of these abort anything. Services log them at `warn` and hand them
//! back so callers can decide whether they care.

/// Non-fatal conditions raised by roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("department {0} does not exist")]
    UnknownDepartment(String),

    #[error("department {0} already exists")]
    DuplicateDepartment(String),

    #[error("{staff} is already part of the {department} department")]
    DuplicateStaff { department: String, staff: String },

    #[error("{staff} is not part of the {department} department")]
    NotAMember { department: String, staff: String },

    #[error("staff member {0} not found")]
    UnknownStaff(String),
}
