//! Neighborhood operators.
//!
//! A neighbor is produced by cloning the current solution and applying
//! one operator:
//!
//! - **move**: re-slot one assignment (optionally re-drawing its room)
//! - **swap**: exchange the (day, slot, room) triples of two assignments
//! - **reassign faculty**: re-draw one assignment's faculty from the
//!   qualified pool
//!
//! An operator that would collide with an existing third key leaves the
//! solution unchanged; the degenerate neighbor is still re-evaluated.
//! A neighbor therefore always differs from its origin by at most two
//! keys.

use rand::Rng;

use crate::constraints::ConstraintSet;
use crate::models::{Faculty, Room, Solution, TimeSlot};

use super::evaluator::evaluate_solution;

/// Neighborhood over a fixed domain snapshot.
///
/// Holds the regular time slots, schedulable rooms, and faculty roster
/// the operators draw replacements from, plus the constraint set used
/// to re-evaluate each neighbor.
pub struct Neighborhood<'a> {
    slots: Vec<&'a TimeSlot>,
    rooms: &'a [Room],
    faculty: &'a [Faculty],
    constraints: &'a ConstraintSet,
}

impl<'a> Neighborhood<'a> {
    /// Creates a neighborhood. Non-regular slots are filtered out here
    /// so the operators can draw uniformly.
    pub fn new(
        slots: &'a [TimeSlot],
        rooms: &'a [Room],
        faculty: &'a [Faculty],
        constraints: &'a ConstraintSet,
    ) -> Self {
        Self {
            slots: slots.iter().filter(|s| s.is_regular()).collect(),
            rooms,
            faculty,
            constraints,
        }
    }

    /// Produces one evaluated neighbor: move with probability 0.5,
    /// swap otherwise.
    pub fn generate_neighbor<R: Rng>(&self, current: &Solution, rng: &mut R) -> Solution {
        let mut neighbor = current.clone();
        if rng.random_bool(0.5) {
            self.move_assignment(&mut neighbor, rng);
        } else {
            self.swap_assignments(&mut neighbor, rng);
        }
        evaluate_solution(self.constraints, &mut neighbor);
        neighbor
    }

    /// Produces `count` independent evaluated neighbors.
    pub fn generate_neighbors<R: Rng>(
        &self,
        current: &Solution,
        count: usize,
        rng: &mut R,
    ) -> Vec<Solution> {
        (0..count).map(|_| self.generate_neighbor(current, rng)).collect()
    }

    /// Produces the best of a batch of 10 neighbors.
    pub fn generate_best_neighbor<R: Rng>(&self, current: &Solution, rng: &mut R) -> Solution {
        self.generate_neighbors(current, 10, rng)
            .into_iter()
            .max_by(|a, b| a.fitness_score.total_cmp(&b.fitness_score))
            .unwrap_or_else(|| current.clone())
    }

    /// Moves one uniformly chosen assignment to a uniformly chosen
    /// regular slot; with probability 0.5 the room is re-drawn too.
    ///
    /// Returns `false` if there is nothing to move, no slot to move to,
    /// or the re-keyed entry would collide with another assignment.
    pub fn move_assignment<R: Rng>(&self, solution: &mut Solution, rng: &mut R) -> bool {
        if solution.is_empty() || self.slots.is_empty() {
            return false;
        }

        let key = self.pick_key(solution, rng);
        let slot = self.slots[rng.random_range(0..self.slots.len())];
        let original = solution.schedule.remove(&key).expect("picked key exists");

        let mut moved = original.clone();
        moved.day_of_week = slot.day_of_week;
        moved.start = slot.start;
        moved.end = slot.end;
        moved.time_slot_id = slot.id.clone();
        if !self.rooms.is_empty() && rng.random_bool(0.5) {
            moved.room_id = self.rooms[rng.random_range(0..self.rooms.len())].id.clone();
        }

        let new_key = moved.key();
        if new_key != key && solution.schedule.contains_key(&new_key) {
            solution.schedule.insert(key, original);
            return false;
        }
        solution.schedule.insert(new_key, moved);
        true
    }

    /// Exchanges the (day, slot, room) triples of two uniformly chosen
    /// assignments, leaving course and faculty in place.
    pub fn swap_assignments<R: Rng>(&self, solution: &mut Solution, rng: &mut R) -> bool {
        if solution.len() < 2 {
            return false;
        }

        let first_key = self.pick_key(solution, rng);
        let mut second_key = self.pick_key(solution, rng);
        while second_key == first_key {
            second_key = self.pick_key(solution, rng);
        }

        let first = solution.schedule.remove(&first_key).expect("picked key exists");
        let second = solution.schedule.remove(&second_key).expect("picked key exists");

        let (mut new_first, mut new_second) = (first.clone(), second.clone());
        new_first.day_of_week = second.day_of_week;
        new_first.start = second.start;
        new_first.end = second.end;
        new_first.time_slot_id = second.time_slot_id.clone();
        new_first.room_id = second.room_id.clone();
        new_second.day_of_week = first.day_of_week;
        new_second.start = first.start;
        new_second.end = first.end;
        new_second.time_slot_id = first.time_slot_id.clone();
        new_second.room_id = first.room_id.clone();

        let new_first_key = new_first.key();
        let new_second_key = new_second.key();
        if solution.schedule.contains_key(&new_first_key)
            || solution.schedule.contains_key(&new_second_key)
        {
            solution.schedule.insert(first_key, first);
            solution.schedule.insert(second_key, second);
            return false;
        }

        solution.schedule.insert(new_first_key, new_first);
        solution.schedule.insert(new_second_key, new_second);
        true
    }

    /// Re-draws the faculty of one uniformly chosen assignment from the
    /// other faculty with expertise in that course.
    pub fn reassign_faculty<R: Rng>(&self, solution: &mut Solution, rng: &mut R) -> bool {
        if solution.is_empty() {
            return false;
        }

        let key = self.pick_key(solution, rng);
        let assignment = solution.schedule.get_mut(&key).expect("picked key exists");

        let candidates: Vec<&Faculty> = self
            .faculty
            .iter()
            .filter(|f| f.id != assignment.faculty_id && f.can_teach(&assignment.course_id))
            .collect();
        if candidates.is_empty() {
            return false;
        }

        assignment.faculty_id = candidates[rng.random_range(0..candidates.len())].id.clone();
        true
    }

    /// The constraint set neighbors are evaluated against.
    pub fn constraints(&self) -> &'a ConstraintSet {
        self.constraints
    }

    fn pick_key<R: Rng>(&self, solution: &Solution, rng: &mut R) -> String {
        let index = rng.random_range(0..solution.len());
        solution
            .schedule
            .keys()
            .nth(index)
            .expect("index within bounds")
            .clone()
    }
}
