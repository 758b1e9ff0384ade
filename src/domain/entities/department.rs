//! Domain entity representing a hospital department roster.

use crate::domain::entities::shift::{Schedule, ShiftLabel};
use crate::domain::errors::RosterError;
use std::collections::HashMap;

/// A named department with an ordered staff list and one shift label per member.
///
/// Staff identifiers are unique within a department, and every member always
/// has a schedule entry (new members start as [`ShiftLabel::Unscheduled`]).
#[derive(Debug, Clone)]
pub struct Department {
    name: String,
    staff: Vec<String>,
    schedule: HashMap<String, ShiftLabel>,
}

impl Department {
    /// Creates an empty department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            staff: Vec::new(),
            schedule: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Staff identifiers in the order they were added.
    pub fn staff(&self) -> &[String] {
        &self.staff
    }

    pub fn is_member(&self, staff_id: &str) -> bool {
        self.schedule.contains_key(staff_id)
    }

    /// Appends a staff member with an `Unscheduled` shift.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateStaff`] if the member is already listed.
    /// The existing entry and its label are left alone.
    pub fn add_staff(&mut self, staff_id: &str) -> Result<(), RosterError> {
        if self.is_member(staff_id) {
            return Err(RosterError::DuplicateStaff {
                department: self.name.clone(),
                staff: staff_id.to_string(),
            });
        }

        self.staff.push(staff_id.to_string());
        self.schedule
            .insert(staff_id.to_string(), ShiftLabel::Unscheduled);
        Ok(())
    }

    /// Overwrites the shift label of an existing member.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotAMember`] when `staff_id` is not on the roster.
    pub fn set_schedule(&mut self, staff_id: &str, label: ShiftLabel) -> Result<(), RosterError> {
        match self.schedule.get_mut(staff_id) {
            Some(slot) => {
                *slot = label;
                Ok(())
            }
            None => Err(RosterError::NotAMember {
                department: self.name.clone(),
                staff: staff_id.to_string(),
            }),
        }
    }

    /// Returns a copy of the current schedule.
    pub fn schedule(&self) -> Schedule {
        self.schedule
            .iter()
            .map(|(staff, label)| (staff.clone(), label.clone()))
            .collect()
    }
}
