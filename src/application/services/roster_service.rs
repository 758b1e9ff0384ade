//! Department roster service.

use crate::domain::entities::{Department, Schedule, ShiftLabel};
use crate::domain::errors::RosterError;
use std::collections::BTreeMap;

/// In-memory store of departments keyed by name.
///
/// Every failure is a notification: it is logged at `warn`, returned to the
/// caller, and leaves the roster exactly as it was.
#[derive(Debug, Default)]
pub struct RosterService {
    departments: BTreeMap<String, Department>,
}

impl RosterService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty department.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateDepartment`] if the name is taken.
    pub fn add_department(&mut self, name: &str) -> Result<(), RosterError> {
        if self.departments.contains_key(name) {
            return Err(notify(RosterError::DuplicateDepartment(name.to_string())));
        }

        self.departments
            .insert(name.to_string(), Department::new(name));
        tracing::info!(department = name, "Department added");
        Ok(())
    }

    /// Adds a staff member to a department with an `Unscheduled` shift.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownDepartment`] or
    /// [`RosterError::DuplicateStaff`].
    pub fn add_staff(&mut self, department: &str, staff_id: &str) -> Result<(), RosterError> {
        self.department_mut(department)?
            .add_staff(staff_id)
            .map_err(notify)?;

        tracing::debug!(department, staff = staff_id, "Staff member added");
        Ok(())
    }

    /// Sets the shift label of a department member.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownDepartment`] or [`RosterError::NotAMember`].
    pub fn set_schedule(
        &mut self,
        department: &str,
        staff_id: &str,
        label: impl Into<ShiftLabel>,
    ) -> Result<(), RosterError> {
        let label = label.into();
        self.department_mut(department)?
            .set_schedule(staff_id, label.clone())
            .map_err(notify)?;

        tracing::debug!(department, staff = staff_id, %label, "Shift set");
        Ok(())
    }

    /// Returns a snapshot of a department schedule.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownDepartment`].
    pub fn get_schedule(&self, department: &str) -> Result<Schedule, RosterError> {
        Ok(self.department(department)?.schedule())
    }

    /// Looks up a department by name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownDepartment`].
    pub fn department(&self, name: &str) -> Result<&Department, RosterError> {
        self.departments
            .get(name)
            .ok_or_else(|| notify(RosterError::UnknownDepartment(name.to_string())))
    }

    /// Department names in alphabetical order.
    pub fn department_names(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    fn department_mut(&mut self, name: &str) -> Result<&mut Department, RosterError> {
        self.departments
            .get_mut(name)
            .ok_or_else(|| notify(RosterError::UnknownDepartment(name.to_string())))
    }
}

/// Logs a roster notification and hands it back.
pub(crate) fn notify(error: RosterError) -> RosterError {
    tracing::warn!("{error}");
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardiology() -> RosterService {
        let mut roster = RosterService::new();
        roster.add_department("Cardiology").unwrap();
        roster
    }

    #[test]
    fn test_add_staff_then_schedule_is_unscheduled() {
        let mut roster = cardiology();
        roster.add_staff("Cardiology", "Dr. Smith").unwrap();

        let department = roster.department("Cardiology").unwrap();
        assert!(department.staff().contains(&"Dr. Smith".to_string()));
        assert_eq!(
            roster.get_schedule("Cardiology").unwrap().get("Dr. Smith"),
            Some(&ShiftLabel::Unscheduled)
        );
    }

    #[test]
    fn test_set_schedule_for_member() {
        let mut roster = cardiology();
        roster.add_staff("Cardiology", "Dr. Smith").unwrap();
        roster
            .set_schedule("Cardiology", "Dr. Smith", "Morning")
            .unwrap();

        assert_eq!(
            roster.get_schedule("Cardiology").unwrap().get("Dr. Smith"),
            Some(&ShiftLabel::Morning)
        );
    }

    #[test]
    fn test_set_schedule_for_non_member_is_noop() {
        let mut roster = cardiology();
        roster.add_staff("Cardiology", "Dr. Smith").unwrap();
        let before = roster.get_schedule("Cardiology").unwrap();

        let err = roster
            .set_schedule("Cardiology", "Dr. Who", ShiftLabel::Night)
            .unwrap_err();

        assert_eq!(
            err,
            RosterError::NotAMember {
                department: "Cardiology".to_string(),
                staff: "Dr. Who".to_string(),
            }
        );
        assert_eq!(roster.get_schedule("Cardiology").unwrap(), before);
    }

    #[test]
    fn test_unknown_department() {
        let mut roster = RosterService::new();

        assert_eq!(
            roster.add_staff("Oncology", "Dr. Smith"),
            Err(RosterError::UnknownDepartment("Oncology".to_string()))
        );
        assert!(roster.get_schedule("Oncology").is_err());
    }

    #[test]
    fn test_duplicate_department_keeps_existing_roster() {
        let mut roster = cardiology();
        roster.add_staff("Cardiology", "Dr. Smith").unwrap();

        assert!(roster.add_department("Cardiology").is_err());
        assert_eq!(roster.get_schedule("Cardiology").unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_mutation_does_not_leak() {
        let mut roster = cardiology();
        roster.add_staff("Cardiology", "Dr. Smith").unwrap();

        let mut snapshot = roster.get_schedule("Cardiology").unwrap();
        snapshot.clear();

        assert_eq!(roster.get_schedule("Cardiology").unwrap().len(), 1);
    }

    #[test]
    fn test_department_names_sorted() {
        let mut roster = RosterService::new();
        roster.add_department("Radiology").unwrap();
        roster.add_department("Cardiology").unwrap();

        let names: Vec<&str> = roster.department_names().collect();
        assert_eq!(names, vec!["Cardiology", "Radiology"]);
    }
}
