//! Advisory input diagnostics for timetabling snapshots.
//!
//! Checks structural integrity of courses, faculty, rooms, and time
//! slots before scheduling. Detects:
//! - Duplicate IDs and duplicate natural keys (course codes, employee
//!   IDs, building + room-number pairs)
//! - Inverted time ranges (`end <= start`)
//! - Out-of-range days of week
//! - Courses with zero weekly hours
//! - Active courses no faculty member is qualified to teach
//! - Faculty with no availability at all
//!
//! These checks are advisory: the engine itself never rejects input —
//! malformed entities simply earn their natural penalties during
//! evaluation. The surrounding service runs this before solving to
//! give users actionable feedback.

use std::collections::HashSet;

use crate::models::{Course, Faculty, Room, TimeSlot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID or natural key.
    DuplicateId,
    /// A time range has `end <= start`.
    InvalidTimeRange,
    /// A day of week outside `0..=6`.
    InvalidDayOfWeek,
    /// A course with zero hours per week.
    ZeroHours,
    /// An active course no faculty member can teach.
    MissingExpertise,
    /// A faculty member with no availability windows.
    EmptyAvailability,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetabling snapshot.
///
/// Collects all detected issues rather than stopping at the first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every issue found.
pub fn validate_snapshot(
    courses: &[Course],
    faculty: &[Faculty],
    rooms: &[Room],
    time_slots: &[TimeSlot],
) -> ValidationResult {
    let mut errors = Vec::new();

    check_courses(courses, faculty, &mut errors);
    check_faculty(faculty, &mut errors);
    check_rooms(rooms, &mut errors);
    check_time_slots(time_slots, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_courses(courses: &[Course], faculty: &[Faculty], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    let mut codes = HashSet::new();

    for course in courses {
        if !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
        if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course code: {}", course.code),
            ));
        }
        if course.hours_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroHours,
                format!("Course '{}' has zero hours per week", course.id),
            ));
        }
        if course.is_active && !faculty.iter().any(|f| f.can_teach(&course.id)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingExpertise,
                format!("No faculty member is qualified to teach course '{}'", course.id),
            ));
        }
    }
}

fn check_faculty(faculty: &[Faculty], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    let mut employee_ids = HashSet::new();

    for member in faculty {
        if !ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", member.id),
            ));
        }
        if !employee_ids.insert(member.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", member.employee_id),
            ));
        }
        if member.availability.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyAvailability,
                format!("Faculty '{}' has no availability windows", member.id),
            ));
        }
        for window in &member.availability {
            if window.end <= window.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeRange,
                    format!(
                        "Faculty '{}' availability window {}-{} is inverted",
                        member.id, window.start, window.end
                    ),
                ));
            }
            if window.day_of_week > 6 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDayOfWeek,
                    format!(
                        "Faculty '{}' availability day {} is out of range",
                        member.id, window.day_of_week
                    ),
                ));
            }
        }
    }
}

fn check_rooms(rooms: &[Room], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    let mut compound_keys = HashSet::new();

    for room in rooms {
        if !ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if !compound_keys.insert(room.compound_key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room key: {}", room.compound_key()),
            ));
        }
    }
}

fn check_time_slots(time_slots: &[TimeSlot], errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();

    for slot in time_slots {
        if !ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", slot.id),
            ));
        }
        if slot.end <= slot.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!("Time slot '{}' range {}-{} is inverted", slot.id, slot.start, slot.end),
            ));
        }
        if slot.day_of_week > 6 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDayOfWeek,
                format!("Time slot '{}' day {} is out of range", slot.id, slot.day_of_week),
            ));
        }
    }
}
