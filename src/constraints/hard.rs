//! Hard constraints.
//!
//! A violated hard constraint makes the solution infeasible; the
//! evaluator multiplies each hard penalty by 1,000 before subtracting
//! it from the base fitness.

use std::collections::{HashMap, HashSet};

use crate::models::{AvailabilityWindow, Course, Faculty, Room, RoomType, Solution};

use super::Constraint;

/// No faculty member may teach two overlapping classes.
///
/// Penalty: for each (faculty, day), the number of assignment pairs
/// with strictly overlapping intervals.
pub struct NoFacultyDoubleBooking;

impl Constraint for NoFacultyDoubleBooking {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let count = overlapping_pairs(solution, |a| a.faculty_id.as_str());
        (count > 0, count as f64)
    }

    fn description(&self) -> &str {
        "Faculty members cannot be assigned to multiple classes at the same time"
    }
}

/// No room may host two overlapping classes.
pub struct NoRoomDoubleBooking;

impl Constraint for NoRoomDoubleBooking {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let count = overlapping_pairs(solution, |a| a.room_id.as_str());
        (count > 0, count as f64)
    }

    fn description(&self) -> &str {
        "Rooms cannot be used by multiple classes at the same time"
    }
}

/// Counts overlapping assignment pairs grouped by `resource(a)` and day.
fn overlapping_pairs<'a, F>(solution: &'a Solution, resource: F) -> usize
where
    F: Fn(&'a crate::models::ClassAssignment) -> &'a str,
{
    let mut groups: HashMap<(&str, u8), Vec<&crate::models::ClassAssignment>> = HashMap::new();
    for a in solution.assignments() {
        groups.entry((resource(a), a.day_of_week)).or_default().push(a);
    }

    let mut count = 0;
    for group in groups.values() {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if group[i].overlaps(group[j]) {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Every class must lie fully inside one of its faculty member's
/// availability windows on that day.
///
/// A faculty member with no windows on a day violates for every class
/// scheduled on that day.
pub struct FacultyAvailability {
    windows: HashMap<String, Vec<AvailabilityWindow>>,
}

impl FacultyAvailability {
    /// Captures availability windows from the faculty roster.
    pub fn new(faculty: &[Faculty]) -> Self {
        let windows = faculty
            .iter()
            .map(|f| (f.id.clone(), f.availability.clone()))
            .collect();
        Self { windows }
    }
}

impl Constraint for FacultyAvailability {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut violations = 0usize;
        for a in solution.assignments() {
            let contained = self
                .windows
                .get(&a.faculty_id)
                .map(|ws| {
                    ws.iter().any(|w| {
                        w.day_of_week == a.day_of_week && w.contains_interval(a.start, a.end)
                    })
                })
                .unwrap_or(false);
            if !contained {
                violations += 1;
            }
        }
        (violations > 0, violations as f64)
    }

    fn description(&self) -> &str {
        "Faculty must be scheduled only during their available time slots"
    }
}

/// Lab and practical courses must be held in lab rooms.
pub struct LabRoomRequirement {
    lab_courses: HashSet<String>,
    lab_rooms: HashSet<String>,
}

impl LabRoomRequirement {
    /// Captures which courses need labs and which rooms are labs.
    pub fn new(courses: &[Course], rooms: &[Room]) -> Self {
        Self {
            lab_courses: courses
                .iter()
                .filter(|c| c.course_type.requires_lab())
                .map(|c| c.id.clone())
                .collect(),
            lab_rooms: rooms
                .iter()
                .filter(|r| r.room_type == RoomType::Lab)
                .map(|r| r.id.clone())
                .collect(),
        }
    }
}

impl Constraint for LabRoomRequirement {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut violations = 0usize;
        for a in solution.assignments() {
            if self.lab_courses.contains(&a.course_id) && !self.lab_rooms.contains(&a.room_id) {
                violations += 1;
            }
        }
        (violations > 0, violations as f64)
    }

    fn description(&self) -> &str {
        "Lab courses must be scheduled in lab rooms"
    }
}

/// Room capacity must cover course enrollment.
///
/// Penalty: per assignment, the enrollment overflow
/// `max(0, enrollment - capacity)`.
pub struct RoomCapacity {
    capacities: HashMap<String, u32>,
    enrollments: HashMap<String, u32>,
}

impl RoomCapacity {
    /// Captures room capacities and course enrollment counts.
    pub fn new(rooms: &[Room], enrollments: HashMap<String, u32>) -> Self {
        Self {
            capacities: rooms.iter().map(|r| (r.id.clone(), r.capacity)).collect(),
            enrollments,
        }
    }
}

impl Constraint for RoomCapacity {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut overflow = 0u64;
        for a in solution.assignments() {
            if let (Some(&capacity), Some(&enrollment)) = (
                self.capacities.get(&a.room_id),
                self.enrollments.get(&a.course_id),
            ) {
                overflow += enrollment.saturating_sub(capacity) as u64;
            }
        }
        (overflow > 0, overflow as f64)
    }

    fn description(&self) -> &str {
        "Room capacity must be sufficient for enrolled students"
    }
}

/// Faculty weekly teaching hours must stay within their cap.
///
/// Penalty: per faculty, the excess `max(0, scheduled_hours - cap)`
/// computed from scheduled minutes.
pub struct FacultyWorkloadLimit {
    max_hours: HashMap<String, u32>,
}

impl FacultyWorkloadLimit {
    /// Captures per-faculty weekly hour caps.
    pub fn new(faculty: &[Faculty]) -> Self {
        Self {
            max_hours: faculty
                .iter()
                .map(|f| (f.id.clone(), f.max_hours_per_week))
                .collect(),
        }
    }
}

impl Constraint for FacultyWorkloadLimit {
    fn is_hard(&self) -> bool {
        true
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut minutes: HashMap<&str, i64> = HashMap::new();
        for a in solution.assignments() {
            *minutes.entry(a.faculty_id.as_str()).or_insert(0) += a.duration_minutes().max(0);
        }

        // Summed in integer minutes so the penalty is exact
        let mut excess_minutes: i64 = 0;
        for (faculty_id, &total) in &minutes {
            if let Some(&cap) = self.max_hours.get(*faculty_id) {
                excess_minutes += (total - (cap as i64) * 60).max(0);
            }
        }
        (excess_minutes > 0, excess_minutes as f64 / 60.0)
    }

    fn description(&self) -> &str {
        "Faculty members must not exceed their maximum hours per week"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassAssignment, CourseType, TimeOfDay};

    fn assignment(
        course: &str,
        faculty: &str,
        room: &str,
        day: u8,
        start: TimeOfDay,
        end: TimeOfDay,
        slot: &str,
    ) -> ClassAssignment {
        ClassAssignment::new(course, faculty, room, day, start, end, slot)
    }

    fn solution_with(assignments: Vec<ClassAssignment>) -> Solution {
        let mut s = Solution::new();
        for a in assignments {
            s.insert(a);
        }
        s
    }

    #[test]
    fn test_faculty_double_booking() {
        let s = solution_with(vec![
            assignment("C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1"),
            assignment("C2", "F1", "R2", 1, TimeOfDay::hm(9, 30), TimeOfDay::hm(10, 30), "S2"),
        ]);
        let (violated, penalty) = NoFacultyDoubleBooking.evaluate(&s);
        assert!(violated);
        assert_eq!(penalty, 1.0);
    }

    #[test]
    fn test_no_double_booking_on_touching_intervals() {
        let s = solution_with(vec![
            assignment("C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1"),
            assignment("C2", "F1", "R1", 1, TimeOfDay::hm(10, 0), TimeOfDay::hm(11, 0), "S2"),
        ]);
        let (violated, _) = NoFacultyDoubleBooking.evaluate(&s);
        assert!(!violated);
        let (violated, _) = NoRoomDoubleBooking.evaluate(&s);
        assert!(!violated);
    }

    #[test]
    fn test_room_double_booking_different_days() {
        let s = solution_with(vec![
            assignment("C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1"),
            assignment("C2", "F2", "R1", 2, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S2"),
        ]);
        let (violated, _) = NoRoomDoubleBooking.evaluate(&s);
        assert!(!violated);
    }

    #[test]
    fn test_triple_booking_counts_pairs() {
        let s = solution_with(vec![
            assignment("C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(11, 0), "S1"),
            assignment("C2", "F1", "R2", 1, TimeOfDay::hm(9, 30), TimeOfDay::hm(10, 30), "S2"),
            assignment("C3", "F1", "R3", 1, TimeOfDay::hm(10, 0), TimeOfDay::hm(12, 0), "S3"),
        ]);
        let (_, penalty) = NoFacultyDoubleBooking.evaluate(&s);
        // (C1,C2), (C1,C3), (C2,C3) all overlap
        assert_eq!(penalty, 3.0);
    }

    #[test]
    fn test_faculty_availability() {
        let faculty = vec![Faculty::new("F1", "E1").with_availability(
            1,
            TimeOfDay::hm(9, 0),
            TimeOfDay::hm(12, 0),
        )];
        let c = FacultyAvailability::new(&faculty);

        let inside = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&inside), (false, 0.0));

        let outside = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(11, 30), TimeOfDay::hm(12, 30), "S1",
        )]);
        assert_eq!(c.evaluate(&outside), (true, 1.0));

        // Wrong day counts as unavailable
        let wrong_day = solution_with(vec![assignment(
            "C1", "F1", "R1", 2, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&wrong_day), (true, 1.0));
    }

    #[test]
    fn test_faculty_availability_empty_windows() {
        let faculty = vec![Faculty::new("F1", "E1")];
        let c = FacultyAvailability::new(&faculty);
        let s = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&s), (true, 1.0));
    }

    #[test]
    fn test_lab_room_requirement() {
        let courses = vec![
            Course::new("C1", "PHY-L", CourseType::Lab),
            Course::new("C2", "CS-T", CourseType::Theory),
        ];
        let rooms = vec![
            Room::new("R1", "101", RoomType::Classroom),
            Room::new("R2", "L1", RoomType::Lab),
        ];
        let c = LabRoomRequirement::new(&courses, &rooms);

        let bad = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&bad), (true, 1.0));

        let good = solution_with(vec![
            assignment("C1", "F1", "R2", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1"),
            assignment("C2", "F1", "R1", 2, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S2"),
        ]);
        assert_eq!(c.evaluate(&good), (false, 0.0));
    }

    #[test]
    fn test_room_capacity_overflow() {
        let rooms = vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)];
        let enrollments = HashMap::from([("C1".to_string(), 45u32)]);
        let c = RoomCapacity::new(&rooms, enrollments);

        let s = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&s), (true, 15.0));
    }

    #[test]
    fn test_room_capacity_unknown_enrollment_ignored() {
        let rooms = vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)];
        let c = RoomCapacity::new(&rooms, HashMap::new());
        let s = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&s), (false, 0.0));
    }

    #[test]
    fn test_workload_limit() {
        let faculty = vec![Faculty::new("F1", "E1").with_max_hours(2)];
        let c = FacultyWorkloadLimit::new(&faculty);

        // 3 scheduled hours against a 2-hour cap
        let s = solution_with(vec![
            assignment("C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1"),
            assignment("C1", "F1", "R1", 2, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S2"),
            assignment("C1", "F1", "R1", 3, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S3"),
        ]);
        let (violated, penalty) = c.evaluate(&s);
        assert!(violated);
        assert!((penalty - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_workload_within_cap() {
        let faculty = vec![Faculty::new("F1", "E1")];
        let c = FacultyWorkloadLimit::new(&faculty);
        let s = solution_with(vec![assignment(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        )]);
        assert_eq!(c.evaluate(&s), (false, 0.0));
    }
}
