//! Solution (timetable) model.
//!
//! A solution maps assignment keys to class assignments, together with
//! cached fitness metadata. Keys are `"<course_id>:<day>:<slot_id>"`, so
//! a course may appear several times across the week to satisfy its
//! weekly hours.
//!
//! The fitness cache (`fitness_score`, `hard_violations`,
//! `soft_violations`) is only valid until the next mutation; every
//! mutation must be followed by re-evaluation before the score is read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::time_slot::{intervals_overlap, TimeOfDay};

/// A committed (course, faculty, room, day, time) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    /// Assigned course.
    pub course_id: String,
    /// Assigned faculty member.
    pub faculty_id: String,
    /// Assigned room.
    pub room_id: String,
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
    /// Class start.
    pub start: TimeOfDay,
    /// Class end.
    pub end: TimeOfDay,
    /// Originating time slot.
    pub time_slot_id: String,
}

impl ClassAssignment {
    /// Creates a new assignment.
    pub fn new(
        course_id: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
        day_of_week: u8,
        start: TimeOfDay,
        end: TimeOfDay,
        time_slot_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
            day_of_week,
            start,
            end,
            time_slot_id: time_slot_id.into(),
        }
    }

    /// Scheduled duration in minutes. Negative if `end < start`.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end.minutes() as i64 - self.start.minutes() as i64
    }

    /// Whether this assignment occupies the same day as `other` with a
    /// strictly overlapping interval.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day_of_week == other.day_of_week
            && intervals_overlap(self.start, self.end, other.start, other.end)
    }

    /// The solution key for this assignment.
    pub fn key(&self) -> String {
        assignment_key(&self.course_id, self.day_of_week, &self.time_slot_id)
    }
}

/// Builds the composite solution key `"<course_id>:<day>:<slot_id>"`.
pub fn assignment_key(course_id: &str, day_of_week: u8, slot_id: &str) -> String {
    format!("{course_id}:{day_of_week}:{slot_id}")
}

/// A complete timetable solution with cached fitness metadata.
///
/// The schedule is an ordered map so that iteration (and therefore
/// seeded search) is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// Assignment key → class assignment.
    pub schedule: BTreeMap<String, ClassAssignment>,
    /// Cached fitness score (higher is better).
    pub fitness_score: f64,
    /// Number of hard constraints that reported a violation.
    pub hard_violations: usize,
    /// Number of soft constraints that reported a violation.
    pub soft_violations: usize,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an assignment under its composite key, replacing any
    /// previous assignment with the same key.
    pub fn insert(&mut self, assignment: ClassAssignment) {
        self.schedule.insert(assignment.key(), assignment);
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// Iterates assignments in key order.
    pub fn assignments(&self) -> impl Iterator<Item = &ClassAssignment> {
        self.schedule.values()
    }

    /// Total scheduled minutes for a course across the week.
    pub fn scheduled_minutes(&self, course_id: &str) -> i64 {
        self.assignments()
            .filter(|a| a.course_id == course_id)
            .map(|a| a.duration_minutes().max(0))
            .sum()
    }

    /// Whether the cached metadata marks this solution feasible.
    pub fn is_feasible(&self) -> bool {
        self.hard_violations == 0
    }
}
