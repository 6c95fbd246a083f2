//! Greedy timetable construction.
//!
//! # Algorithm
//!
//! 1. Sort active courses by a complexity key: credits descending, lab
//!    courses before others at equal credits.
//! 2. For each course, place each required weekly hour:
//!    a. first faculty (in roster order) with expertise in the course,
//!    b. first room of the preferred type (Lab for lab courses,
//!       Classroom otherwise), falling back to the first room of any
//!       type,
//!    c. first regular slot (in input order) where neither the faculty
//!       nor the room already has an overlapping class that day.
//! 3. A course hour with no qualified faculty, no room, or no free slot
//!    is skipped; the shortfall surfaces as penalties at evaluation.
//!
//! The constructor is deterministic for a given input ordering.

use crate::constraints::ConstraintSet;
use crate::models::{
    ClassAssignment, Course, Faculty, Room, RoomType, Solution, TimeSlot,
};

use super::evaluator::evaluate_solution;

/// Deterministic first-fit constructor over a domain snapshot.
pub struct GreedyConstructor<'a> {
    courses: &'a [Course],
    faculty: &'a [Faculty],
    rooms: &'a [Room],
    slots: &'a [TimeSlot],
    constraints: &'a ConstraintSet,
}

impl<'a> GreedyConstructor<'a> {
    /// Creates a constructor. `courses` and `rooms` are expected to be
    /// pre-filtered to active courses and available rooms.
    pub fn new(
        courses: &'a [Course],
        faculty: &'a [Faculty],
        rooms: &'a [Room],
        slots: &'a [TimeSlot],
        constraints: &'a ConstraintSet,
    ) -> Self {
        Self {
            courses,
            faculty,
            rooms,
            slots,
            constraints,
        }
    }

    /// Builds and evaluates an initial solution.
    pub fn construct(&self) -> Solution {
        let mut solution = Solution::new();

        for course in self.sorted_by_complexity() {
            let Some(faculty) = self.find_faculty(&course.id) else {
                continue;
            };
            let Some(room) = self.find_room(course) else {
                continue;
            };

            for _ in 0..course.hours_per_week {
                let Some(slot) = self.find_free_slot(&solution, faculty, room) else {
                    break;
                };
                solution.insert(ClassAssignment::new(
                    course.id.clone(),
                    faculty.id.clone(),
                    room.id.clone(),
                    slot.day_of_week,
                    slot.start,
                    slot.end,
                    slot.id.clone(),
                ));
            }
        }

        evaluate_solution(self.constraints, &mut solution);
        solution
    }

    /// Active courses, hardest to place first.
    fn sorted_by_complexity(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().filter(|c| c.is_active).collect();
        sorted.sort_by(|a, b| {
            b.credits
                .cmp(&a.credits)
                .then_with(|| b.course_type.requires_lab().cmp(&a.course_type.requires_lab()))
        });
        sorted
    }

    /// First faculty member with expertise in the course.
    fn find_faculty(&self, course_id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.can_teach(course_id))
    }

    /// First room of the preferred type, or the first room at all when
    /// no room of that type exists.
    fn find_room(&self, course: &Course) -> Option<&Room> {
        let preferred = if course.course_type.requires_lab() {
            RoomType::Lab
        } else {
            RoomType::Classroom
        };
        self.rooms
            .iter()
            .find(|r| r.room_type == preferred)
            .or_else(|| self.rooms.first())
    }

    /// First regular slot where faculty and room are both free.
    fn find_free_slot(
        &self,
        solution: &Solution,
        faculty: &Faculty,
        room: &Room,
    ) -> Option<&TimeSlot> {
        self.slots.iter().filter(|s| s.is_regular()).find(|slot| {
            !solution.assignments().any(|a| {
                a.day_of_week == slot.day_of_week
                    && (a.faculty_id == faculty.id || a.room_id == room.id)
                    && crate::models::intervals_overlap(a.start, a.end, slot.start, slot.end)
            })
        })
    }
}
