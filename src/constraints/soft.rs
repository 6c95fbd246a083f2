//! Soft constraints.
//!
//! Soft penalties subtract directly from the base fitness without a
//! multiplier; they express scheduling preferences rather than
//! feasibility.

use std::collections::{HashMap, HashSet};

use crate::models::{ClassAssignment, Course, Faculty, Solution, TimeOfDay};

use super::Constraint;

const NOON: TimeOfDay = TimeOfDay::hm(12, 0);
const LATE_AFTERNOON: TimeOfDay = TimeOfDay::hm(15, 0);

/// Theory classes are preferred in the morning.
///
/// Penalty per theory assignment: +5 for a start after 12:00, and a
/// further +10 for a start after 15:00.
pub struct PreferMorningForTheory {
    theory_courses: HashSet<String>,
}

impl PreferMorningForTheory {
    /// Captures which courses are theory courses.
    pub fn new(courses: &[Course]) -> Self {
        Self {
            theory_courses: courses
                .iter()
                .filter(|c| c.course_type == crate::models::CourseType::Theory)
                .map(|c| c.id.clone())
                .collect(),
        }
    }
}

impl Constraint for PreferMorningForTheory {
    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut penalty = 0.0;
        for a in solution.assignments() {
            if self.theory_courses.contains(&a.course_id) {
                if a.start > NOON {
                    penalty += 5.0;
                }
                if a.start > LATE_AFTERNOON {
                    penalty += 10.0;
                }
            }
        }
        (penalty > 0.0, penalty)
    }

    fn description(&self) -> &str {
        "Theory classes are preferred in morning time slots"
    }
}

/// Faculty should teach the courses they prefer.
///
/// Penalty per assignment: `5 - preference_level`; a missing expertise
/// entry counts as the maximum penalty of 5.
pub struct FacultyPreference {
    preferences: HashMap<String, HashMap<String, u8>>,
}

impl FacultyPreference {
    /// Captures preference levels from the faculty roster.
    pub fn new(faculty: &[Faculty]) -> Self {
        let preferences = faculty
            .iter()
            .map(|f| {
                let prefs = f
                    .expertise
                    .iter()
                    .map(|e| (e.course_id.clone(), e.preference_level))
                    .collect();
                (f.id.clone(), prefs)
            })
            .collect();
        Self { preferences }
    }
}

impl Constraint for FacultyPreference {
    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut penalty = 0.0;
        for a in solution.assignments() {
            let level = self
                .preferences
                .get(&a.faculty_id)
                .and_then(|prefs| prefs.get(&a.course_id))
                .copied()
                .unwrap_or(0);
            penalty += (5 - level.min(5)) as f64;
        }
        (penalty > 0.0, penalty)
    }

    fn description(&self) -> &str {
        "Faculty are preferred to teach courses they have higher preference for"
    }
}

/// Lab sessions should not run back-to-back on the same day.
///
/// Penalty: +10 for each same-day pair of lab assignments where one
/// ends exactly when the other starts.
pub struct AvoidBackToBackLabs {
    lab_courses: HashSet<String>,
}

impl AvoidBackToBackLabs {
    /// Captures which courses are lab or practical courses.
    pub fn new(courses: &[Course]) -> Self {
        Self {
            lab_courses: courses
                .iter()
                .filter(|c| c.course_type.requires_lab())
                .map(|c| c.id.clone())
                .collect(),
        }
    }
}

impl Constraint for AvoidBackToBackLabs {
    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        let mut by_day: HashMap<u8, Vec<&ClassAssignment>> = HashMap::new();
        for a in solution.assignments() {
            if self.lab_courses.contains(&a.course_id) {
                by_day.entry(a.day_of_week).or_default().push(a);
            }
        }

        let mut penalty = 0.0;
        for labs in by_day.values() {
            for first in labs {
                for second in labs.iter() {
                    if first.end == second.start && first.key() != second.key() {
                        penalty += 10.0;
                    }
                }
            }
        }
        (penalty > 0.0, penalty)
    }

    fn description(&self) -> &str {
        "Lab sessions should not be scheduled back-to-back"
    }
}

/// Classes should spread evenly across the week.
///
/// Penalty: the variance of per-day assignment counts over the days
/// that hold at least one class.
pub struct BalancedDailyDistribution;

impl Constraint for BalancedDailyDistribution {
    fn is_hard(&self) -> bool {
        false
    }

    fn evaluate(&self, solution: &Solution) -> (bool, f64) {
        // Ordered map: the float summation order must not vary run to run
        let mut day_counts: std::collections::BTreeMap<u8, usize> = std::collections::BTreeMap::new();
        for a in solution.assignments() {
            *day_counts.entry(a.day_of_week).or_insert(0) += 1;
        }
        if day_counts.is_empty() {
            return (false, 0.0);
        }

        let mean = day_counts.values().sum::<usize>() as f64 / day_counts.len() as f64;
        let variance = day_counts
            .values()
            .map(|&count| {
                let diff = count as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / day_counts.len() as f64;

        (variance > 0.0, variance)
    }

    fn description(&self) -> &str {
        "Classes should be evenly distributed across weekdays"
    }
}
