//! Faculty model: availability windows and course expertise.

use serde::{Deserialize, Serialize};

use super::time_slot::TimeOfDay;

/// A recurring weekly availability window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Day of week (0 = Sunday .. 6 = Saturday).
    pub day_of_week: u8,
    /// Window start.
    pub start: TimeOfDay,
    /// Window end.
    pub end: TimeOfDay,
}

impl AvailabilityWindow {
    /// Creates a new window.
    pub fn new(day_of_week: u8, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day_of_week,
            start,
            end,
        }
    }

    /// Whether `[start, end)` lies fully inside this window.
    #[inline]
    pub fn contains_interval(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start >= self.start && end <= self.end
    }
}

/// A course a faculty member is qualified to teach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseExpertise {
    /// The course.
    pub course_id: String,
    /// Teaching preference, 1 (reluctant) to 5 (preferred).
    pub preference_level: u8,
}

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Employee code.
    pub employee_id: String,
    /// Home department.
    pub department: String,
    /// Weekly teaching hour cap (0..=40).
    pub max_hours_per_week: u32,
    /// Weekly availability windows.
    pub availability: Vec<AvailabilityWindow>,
    /// Courses this faculty member can teach.
    pub expertise: Vec<CourseExpertise>,
}

impl Faculty {
    /// Creates a new faculty member with the default 20-hour cap.
    pub fn new(id: impl Into<String>, employee_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            department: String::new(),
            max_hours_per_week: 20,
            availability: Vec::new(),
            expertise: Vec::new(),
        }
    }

    /// Sets the home department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the weekly hour cap (clamped to 0..=40).
    pub fn with_max_hours(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours.min(40);
        self
    }

    /// Adds an availability window.
    pub fn with_availability(mut self, day_of_week: u8, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.availability
            .push(AvailabilityWindow::new(day_of_week, start, end));
        self
    }

    /// Adds course expertise (preference clamped to 1..=5).
    pub fn with_expertise(mut self, course_id: impl Into<String>, preference_level: u8) -> Self {
        self.expertise.push(CourseExpertise {
            course_id: course_id.into(),
            preference_level: preference_level.clamp(1, 5),
        });
        self
    }

    /// Whether this faculty member is qualified to teach a course.
    pub fn can_teach(&self, course_id: &str) -> bool {
        self.expertise.iter().any(|e| e.course_id == course_id)
    }

    /// Preference level for a course, if qualified.
    pub fn preference_for(&self, course_id: &str) -> Option<u8> {
        self.expertise
            .iter()
            .find(|e| e.course_id == course_id)
            .map(|e| e.preference_level)
    }

    /// Whether `[start, end)` on `day` lies fully inside some
    /// availability window.
    pub fn is_available(&self, day: u8, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.availability
            .iter()
            .any(|w| w.day_of_week == day && w.contains_interval(start, end))
    }
}
