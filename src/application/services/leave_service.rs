//! Leave requests and schedule adjustment.

use crate::domain::entities::{Schedule, ShiftLabel};
use std::collections::BTreeMap;

/// Tracks pending leave requests for one department.
///
/// The department is a name reference only; the service never reads the
/// roster itself, it rewrites the schedule snapshot it is given.
#[derive(Debug, Default)]
pub struct LeaveService {
    requests: BTreeMap<String, u32>,
    department: Option<String>,
}

impl LeaveService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates the service with a department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = Some(department.into());
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Records a leave request. A repeat request replaces the earlier one.
    pub fn request_leave(&mut self, staff_id: &str, days: u32) {
        if let Some(previous) = self.requests.insert(staff_id.to_string(), days) {
            tracing::info!(staff = staff_id, previous, days, "Leave request replaced");
        } else {
            tracing::info!(staff = staff_id, days, "Leave requested");
        }
    }

    /// Requested day count for a staff member, if any.
    pub fn pending(&self, staff_id: &str) -> Option<u32> {
        self.requests.get(staff_id).copied()
    }

    /// Marks every staff member with pending leave as adjusted.
    ///
    /// Entries for staff with a request become [`ShiftLabel::Adjusted`]
    /// regardless of the day count; everyone else is left alone. Requests for
    /// staff missing from `schedule` are skipped. Without an associated
    /// department the schedule is returned unchanged.
    pub fn adjust_schedule(&self, mut schedule: Schedule) -> Schedule {
        let Some(department) = self.department.as_deref() else {
            tracing::warn!("No department set for leave management");
            return schedule;
        };

        for (staff, days) in &self.requests {
            if let Some(label) = schedule.get_mut(staff) {
                tracing::info!(department, staff = %staff, days, "Adjusting schedule for leave");
                *label = ShiftLabel::Adjusted;
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        Schedule::from([
            ("Alice".to_string(), ShiftLabel::Morning),
            ("Bob".to_string(), ShiftLabel::Afternoon),
        ])
    }

    #[test]
    fn test_adjust_marks_staff_on_leave() {
        let mut leave = LeaveService::new();
        leave.set_department("Cardiology");
        leave.request_leave("Alice", 3);

        let adjusted = leave.adjust_schedule(schedule());

        assert_eq!(
            adjusted,
            Schedule::from([
                ("Alice".to_string(), ShiftLabel::Adjusted),
                ("Bob".to_string(), ShiftLabel::Afternoon),
            ])
        );
        assert_eq!(adjusted["Alice"].to_string(), "Adjusted Schedule");
    }

    #[test]
    fn test_adjust_without_department_is_unchanged() {
        let mut leave = LeaveService::new();
        leave.request_leave("Alice", 3);

        assert_eq!(leave.adjust_schedule(schedule()), schedule());
    }

    #[test]
    fn test_requests_for_absent_staff_are_skipped() {
        let mut leave = LeaveService::new();
        leave.set_department("Cardiology");
        leave.request_leave("Charlie", 5);

        let adjusted = leave.adjust_schedule(schedule());

        assert_eq!(adjusted, schedule());
        assert!(!adjusted.contains_key("Charlie"));
    }

    #[test]
    fn test_repeat_request_last_write_wins() {
        let mut leave = LeaveService::new();
        leave.request_leave("Alice", 3);
        leave.request_leave("Alice", 7);

        assert_eq!(leave.pending("Alice"), Some(7));
        assert_eq!(leave.pending("Bob"), None);
    }
}
