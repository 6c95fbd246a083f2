//! Course model.

use serde::{Deserialize, Serialize};

/// Course delivery format.
///
/// Determines room requirements: [`CourseType::Lab`] and
/// [`CourseType::Practical`] sessions must be held in lab rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    /// Lecture-style teaching.
    Theory,
    /// Hands-on practice session.
    Practical,
    /// Laboratory session.
    Lab,
    /// Discussion-driven seminar.
    Seminar,
    /// Supervised project work.
    Project,
    /// Off-campus field work.
    Fieldwork,
}

impl CourseType {
    /// Whether sessions of this type must be held in a lab room.
    #[inline]
    pub fn requires_lab(self) -> bool {
        matches!(self, CourseType::Lab | CourseType::Practical)
    }
}

/// A course offering.
///
/// `hours_per_week` is the number of weekly teaching hours the engine
/// must place; each placed hour becomes one class assignment. Only
/// active courses participate in search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable course code (e.g., "CS-301").
    pub code: String,
    /// Course name.
    pub name: String,
    /// Delivery format.
    pub course_type: CourseType,
    /// Credit weight.
    pub credits: u32,
    /// Required weekly teaching hours.
    pub hours_per_week: u32,
    /// Whether this course is offered this term.
    pub is_active: bool,
}

impl Course {
    /// Creates a new active course with one weekly hour.
    pub fn new(id: impl Into<String>, code: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: String::new(),
            course_type,
            credits: 0,
            hours_per_week: 1,
            is_active: true,
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the required weekly hours.
    pub fn with_hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Marks the course inactive (excluded from search).
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
