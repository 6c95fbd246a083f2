//! Timetabling constraints.
//!
//! Each constraint evaluates a candidate [`Solution`] independently and
//! reports whether it is violated together with a non-negative penalty.
//! Hard constraints carry a 1,000× multiplier at evaluation time; soft
//! constraints subtract their penalty directly.
//!
//! Constraints are stateless except for reference data (availability
//! maps, capacities, enrollment counts) captured at construction, so a
//! constraint set can be shared read-only across a whole search run.
//!
//! # Reference
//! Burke & Petrovic (2002), "Recent research directions in automated
//! timetabling"

mod hard;
mod soft;

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::models::{Course, Faculty, Room, Solution};

pub use hard::{
    FacultyAvailability, FacultyWorkloadLimit, LabRoomRequirement, NoFacultyDoubleBooking,
    NoRoomDoubleBooking, RoomCapacity,
};
pub use soft::{
    AvoidBackToBackLabs, BalancedDailyDistribution, FacultyPreference, PreferMorningForTheory,
};

/// A timetabling constraint.
///
/// `evaluate` must be a pure function of the solution and the reference
/// data captured at construction; the penalty is always non-negative.
pub trait Constraint: Send + Sync {
    /// Whether a violation of this constraint makes the solution
    /// infeasible.
    fn is_hard(&self) -> bool;

    /// Evaluates the solution, returning `(violated, penalty)`.
    fn evaluate(&self, solution: &Solution) -> (bool, f64);

    /// Human-readable description.
    fn description(&self) -> &str;
}

/// A named registry of constraints.
///
/// Keys are stable names; inserting under an existing name replaces the
/// previous constraint. Iteration is name-sorted, so evaluation results
/// never depend on registration order. Unknown constraint types are
/// accepted and evaluated like any other.
#[derive(Default)]
pub struct ConstraintSet {
    constraints: BTreeMap<String, Box<dyn Constraint>>,
}

impl ConstraintSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constraint under a stable name, replacing any
    /// existing constraint with that name.
    pub fn register(&mut self, name: impl Into<String>, constraint: Box<dyn Constraint>) {
        self.constraints.insert(name.into(), constraint);
    }

    /// Absorbs all constraints from `other`, replacing entries with
    /// matching names.
    pub fn extend(&mut self, other: ConstraintSet) {
        self.constraints.extend(other.constraints);
    }

    /// Iterates `(name, constraint)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Constraint)> {
        self.constraints
            .iter()
            .map(|(name, c)| (name.as_str(), c.as_ref()))
    }

    /// Number of registered constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Builds the standard constraint catalog from a domain snapshot.
    ///
    /// `enrollments` maps course id → enrolled student count and feeds
    /// the room-capacity constraint.
    pub fn standard(
        courses: &[Course],
        faculty: &[Faculty],
        rooms: &[Room],
        enrollments: &HashMap<String, u32>,
    ) -> Self {
        let mut set = Self::new();
        set.register(
            "no_faculty_double_booking",
            Box::new(NoFacultyDoubleBooking),
        );
        set.register("no_room_double_booking", Box::new(NoRoomDoubleBooking));
        set.register(
            "faculty_availability",
            Box::new(FacultyAvailability::new(faculty)),
        );
        set.register(
            "lab_room_requirement",
            Box::new(LabRoomRequirement::new(courses, rooms)),
        );
        set.register(
            "room_capacity",
            Box::new(RoomCapacity::new(rooms, enrollments.clone())),
        );
        set.register(
            "faculty_workload_limit",
            Box::new(FacultyWorkloadLimit::new(faculty)),
        );
        set.register(
            "prefer_morning_theory",
            Box::new(PreferMorningForTheory::new(courses)),
        );
        set.register("faculty_preference", Box::new(FacultyPreference::new(faculty)));
        set.register(
            "avoid_back_to_back_labs",
            Box::new(AvoidBackToBackLabs::new(courses)),
        );
        set.register(
            "balanced_daily_distribution",
            Box::new(BalancedDailyDistribution),
        );
        set
    }
}
