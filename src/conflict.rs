//! Online conflict detection for manual schedule edits.
//!
//! Validates a single proposed class against the committed schedule
//! without touching it: one O(n) scan reporting faculty and room
//! double-bookings. Used by interactive editors before a change is
//! persisted; the full constraint set only runs inside the engine.

use serde::{Deserialize, Serialize};

use crate::models::{intervals_overlap, TimeOfDay};

/// A persisted (or proposed) scheduled class.
///
/// Unlike an engine assignment, faculty and room may be absent while a
/// timetable is being edited; an absent field suppresses the
/// corresponding conflict check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledClass {
    /// Unique class identifier (excluded from checks against itself).
    pub id: String,
    /// The course being taught.
    pub course_id: String,
    /// Assigned faculty, if any.
    pub faculty_id: Option<String>,
    /// Assigned room, if any.
    pub room_id: Option<String>,
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
    /// Class start.
    pub start: TimeOfDay,
    /// Class end.
    pub end: TimeOfDay,
}

impl ScheduledClass {
    /// Creates a class with neither faculty nor room assigned.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        day_of_week: u8,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            faculty_id: None,
            room_id: None,
            day_of_week,
            start,
            end,
        }
    }

    /// Assigns a faculty member.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = Some(faculty_id.into());
        self
    }

    /// Assigns a room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }
}

/// Conflict classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictType {
    /// The faculty member already teaches an overlapping class.
    FacultyDoubleBooking,
    /// The room already hosts an overlapping class.
    RoomDoubleBooking,
}

/// Conflict severity ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// A detected scheduling conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub conflict_type: ConflictType,
    /// Human-readable description.
    pub description: String,
    /// Severity.
    pub severity: Severity,
}

/// Stateless detector over a committed schedule snapshot.
pub struct ConflictDetector<'a> {
    existing: &'a [ScheduledClass],
}

impl<'a> ConflictDetector<'a> {
    /// Creates a detector over the committed schedule.
    pub fn new(existing: &'a [ScheduledClass]) -> Self {
        Self { existing }
    }

    /// Checks a proposed class against the committed schedule.
    ///
    /// Reports at most one conflict per type. The proposed class is
    /// never compared against its own persisted row (matched by id),
    /// so editing a class in place does not conflict with itself.
    pub fn detect_conflicts(&self, proposed: &ScheduledClass) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        let mut faculty_clash = false;
        let mut room_clash = false;

        for other in self.existing {
            if other.id == proposed.id || other.day_of_week != proposed.day_of_week {
                continue;
            }
            if !intervals_overlap(proposed.start, proposed.end, other.start, other.end) {
                continue;
            }
            if let (Some(a), Some(b)) = (&proposed.faculty_id, &other.faculty_id) {
                if a == b {
                    faculty_clash = true;
                }
            }
            if let (Some(a), Some(b)) = (&proposed.room_id, &other.room_id) {
                if a == b {
                    room_clash = true;
                }
            }
        }

        if faculty_clash {
            conflicts.push(Conflict {
                conflict_type: ConflictType::FacultyDoubleBooking,
                description: "Faculty is already assigned to another class at this time".into(),
                severity: Severity::Critical,
            });
        }
        if room_clash {
            conflicts.push(Conflict {
                conflict_type: ConflictType::RoomDoubleBooking,
                description: "Room is already booked for another class at this time".into(),
                severity: Severity::Critical,
            });
        }
        conflicts
    }
}
