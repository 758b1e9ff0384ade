//! Strategy-driven shift assignment.
//!
//! Nothing here optimizes anything. [`RandomStrategy`] is a uniform random
//! pick per staff member and [`RotationStrategy`] deals shifts round-robin.
//! A smarter planner plugs in by implementing [`ShiftStrategy`].

use crate::domain::entities::{Schedule, WORKING_SHIFTS};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Assigns one working shift to every staff member.
pub trait ShiftStrategy: Send {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn assign(&mut self, staff: &[String]) -> Schedule;
}

/// Uniform random choice of Morning, Afternoon or Night per staff member.
///
/// No fairness or coverage guarantee.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn assign(&mut self, staff: &[String]) -> Schedule {
        staff
            .iter()
            .filter_map(|member| {
                WORKING_SHIFTS
                    .choose(&mut self.rng)
                    .map(|label| (member.clone(), label.clone()))
            })
            .collect()
    }
}

/// Deals Morning, Afternoon, Night in roster order, continuing where the
/// previous call stopped.
///
/// Coverage of the three shifts differs by at most one within a call.
#[derive(Debug, Default)]
pub struct RotationStrategy {
    offset: usize,
}

impl RotationStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShiftStrategy for RotationStrategy {
    fn name(&self) -> &'static str {
        "rotation"
    }

    fn assign(&mut self, staff: &[String]) -> Schedule {
        let schedule = staff
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let label = WORKING_SHIFTS[(self.offset + index) % WORKING_SHIFTS.len()].clone();
                (member.clone(), label)
            })
            .collect();

        self.offset = (self.offset + staff.len()) % WORKING_SHIFTS.len();
        schedule
    }
}

/// Produces shift assignments for a fixed staff list.
pub struct ShiftScheduler {
    staff: Vec<String>,
    department: Option<String>,
    strategy: Box<dyn ShiftStrategy>,
}

impl ShiftScheduler {
    /// Creates a scheduler using [`RandomStrategy`].
    pub fn new(staff: Vec<String>) -> Self {
        Self {
            staff,
            department: None,
            strategy: Box::new(RandomStrategy::new()),
        }
    }

    /// Names the department the staff list belongs to. Used for logging only.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_strategy(mut self, strategy: impl ShiftStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn staff(&self) -> &[String] {
        &self.staff
    }

    /// Assigns a working shift to every staff member.
    pub fn optimize_schedule(&mut self) -> Schedule {
        let schedule = self.strategy.assign(&self.staff);

        tracing::info!(
            department = self.department.as_deref().unwrap_or("-"),
            strategy = self.strategy.name(),
            staff = self.staff.len(),
            "Shift schedule generated"
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ShiftLabel;

    fn staff() -> Vec<String> {
        ["Alice", "Bob", "Charlie"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_random_assigns_working_shift_to_everyone() {
        let mut scheduler = ShiftScheduler::new(staff()).with_department("Cardiology");
        let schedule = scheduler.optimize_schedule();

        assert_eq!(schedule.len(), 3);
        for member in staff() {
            assert!(WORKING_SHIFTS.contains(&schedule[&member]));
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut first = ShiftScheduler::new(staff()).with_strategy(RandomStrategy::with_seed(7));
        let mut second = ShiftScheduler::new(staff()).with_strategy(RandomStrategy::with_seed(7));

        assert_eq!(first.optimize_schedule(), second.optimize_schedule());
    }

    #[test]
    fn test_rotation_deals_round_robin() {
        let mut scheduler = ShiftScheduler::new(staff()).with_strategy(RotationStrategy::new());
        let schedule = scheduler.optimize_schedule();

        assert_eq!(schedule["Alice"], ShiftLabel::Morning);
        assert_eq!(schedule["Bob"], ShiftLabel::Afternoon);
        assert_eq!(schedule["Charlie"], ShiftLabel::Night);
    }

    #[test]
    fn test_rotation_continues_between_calls() {
        let mut rotation = RotationStrategy::new();
        let two = vec!["Alice".to_string(), "Bob".to_string()];

        rotation.assign(&two);
        let next = rotation.assign(&two);

        assert_eq!(next["Alice"], ShiftLabel::Night);
        assert_eq!(next["Bob"], ShiftLabel::Morning);
    }

    #[test]
    fn test_empty_staff_list() {
        let mut scheduler = ShiftScheduler::new(Vec::new());
        assert!(scheduler.optimize_schedule().is_empty());
    }
}
