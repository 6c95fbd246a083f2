//! Timetabling domain models.
//!
//! Core data types for representing timetabling problems and solutions:
//! the input snapshot (courses, faculty, rooms, time slots) and the
//! output [`Solution`] of class assignments.
//!
//! All clock times are minutes since midnight ([`TimeOfDay`]), parsed
//! once from `"HH:MM"` text when the snapshot is built.

mod course;
mod faculty;
mod room;
mod solution;
mod time_slot;

pub use course::{Course, CourseType};
pub use faculty::{AvailabilityWindow, CourseExpertise, Faculty};
pub use room::{Room, RoomType};
pub use solution::{assignment_key, ClassAssignment, Solution};
pub use time_slot::{intervals_overlap, SlotType, TimeOfDay, TimeSlot};
