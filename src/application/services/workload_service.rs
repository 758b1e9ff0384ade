//! Least-loaded task distribution.

use crate::application::services::roster_service::notify;
use crate::domain::errors::RosterError;
use serde::Serialize;

/// Where a task ended up and the assignee's load afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAssignment {
    pub task: String,
    pub staff: String,
    pub weight: f64,
    pub total: f64,
}

/// Accumulated task weight per staff member, in roster order.
#[derive(Debug, Clone)]
pub struct WorkloadService {
    loads: Vec<(String, f64)>,
}

impl WorkloadService {
    /// Starts every staff member at zero. Repeated identifiers are counted once.
    pub fn new<I, S>(staff: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut loads: Vec<(String, f64)> = Vec::new();
        for member in staff {
            let member = member.into();
            if !loads.iter().any(|(name, _)| *name == member) {
                loads.push((member, 0.0));
            }
        }
        Self { loads }
    }

    /// Adds `weight` to a staff member and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownStaff`] for an identifier that was not in
    /// the initial staff list. No load changes.
    pub fn assign_task(&mut self, staff_id: &str, weight: f64) -> Result<f64, RosterError> {
        let (_, load) = self
            .loads
            .iter_mut()
            .find(|(name, _)| name == staff_id)
            .ok_or_else(|| notify(RosterError::UnknownStaff(staff_id.to_string())))?;

        *load += weight;
        tracing::debug!(staff = staff_id, weight, total = *load, "Task assigned");
        Ok(*load)
    }

    /// Hands each task, in input order, to whoever currently carries the least
    /// weight. Ties go to the member listed first.
    ///
    /// With no staff at all nothing is assigned.
    pub fn distribute_tasks<I, T>(&mut self, tasks: I) -> Vec<TaskAssignment>
    where
        I: IntoIterator<Item = (T, f64)>,
        T: Into<String>,
    {
        let mut assignments = Vec::new();

        for (task, weight) in tasks {
            let task = task.into();
            let Some(index) = self.least_loaded() else {
                tracing::warn!(task = %task, "No staff available for task");
                continue;
            };

            let (staff, load) = &mut self.loads[index];
            *load += weight;
            tracing::info!(task = %task, staff = %staff, weight, total = *load, "Task assigned");

            assignments.push(TaskAssignment {
                task,
                staff: staff.clone(),
                weight,
                total: *load,
            });
        }

        assignments
    }

    /// Current load of a staff member.
    pub fn load(&self, staff_id: &str) -> Option<f64> {
        self.loads
            .iter()
            .find(|(name, _)| name == staff_id)
            .map(|(_, load)| *load)
    }

    /// All loads, in roster order.
    pub fn loads(&self) -> &[(String, f64)] {
        &self.loads
    }

    fn least_loaded(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, (_, load)) in self.loads.iter().enumerate() {
            match best {
                Some((_, lowest)) if *load >= lowest => {}
                _ => best = Some((index, *load)),
            }
        }
        best.map(|(index, _)| index)
    }
}
