//! Timetable optimization engine.
//!
//! [`TimetableEngine`] consumes a read-only snapshot of the domain
//! (courses, faculty, rooms, time slots) plus a [`ConstraintSet`] and
//! produces a [`Solution`]. Constraint violations are data, not errors:
//! `generate` always returns the best solution found, even on timeout,
//! and malformed inputs simply earn their natural penalties.
//!
//! # Algorithms
//!
//! | Algorithm | Behavior |
//! |-----------|----------|
//! | [`Algorithm::Hybrid`] | greedy → annealing → tabu → hill climbing |
//! | [`Algorithm::SimulatedAnnealing`] | standalone annealing over `max_iterations` |
//! | [`Algorithm::TabuSearch`] | standalone tabu over `max_iterations` |
//! | [`Algorithm::Genetic`] | population search, `max_iterations / population_size` generations |
//!
//! # Quick Start
//!
//! ```no_run
//! use u_timetable::engine::{EngineConfig, SolveContext, TimetableEngine};
//! use std::collections::HashMap;
//!
//! let mut engine = TimetableEngine::new("TT1", EngineConfig::default().with_seed(42));
//! engine.load_data(
//!     vec![/* courses */],
//!     vec![/* faculty */],
//!     vec![/* rooms */],
//!     vec![/* time slots */],
//! );
//! engine.add_standard_constraints(&HashMap::new());
//!
//! let solution = engine.generate(&SolveContext::new());
//! println!("fitness: {}", solution.fitness_score);
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seeded RNG per `generate` call.
//! Identical snapshot + constraints + config + seed yields an identical
//! solution.

pub mod annealing;
pub mod evaluator;
pub mod genetic;
pub mod greedy;
pub mod hybrid;
pub mod neighborhood;
pub mod tabu;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constraints::{Constraint, ConstraintSet};
use crate::models::{Course, Faculty, Room, Solution, TimeSlot};

pub use evaluator::{evaluate_solution, BASE_FITNESS, HARD_PENALTY_MULTIPLIER};
pub use greedy::GreedyConstructor;
pub use neighborhood::Neighborhood;

/// Search algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Greedy construction refined by annealing, tabu, and hill climbing.
    #[default]
    Hybrid,
    /// Genetic search.
    Genetic,
    /// Simulated annealing.
    SimulatedAnnealing,
    /// Tabu search.
    TabuSearch,
}

impl Algorithm {
    /// Parses an algorithm name; unknown names fall back to `Hybrid`.
    pub fn parse(name: &str) -> Self {
        match name {
            "genetic" => Self::Genetic,
            "simulated_annealing" => Self::SimulatedAnnealing,
            "tabu_search" => Self::TabuSearch,
            _ => Self::Hybrid,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which search algorithm to run.
    pub algorithm: Algorithm,
    /// Outer-loop bound for the chosen algorithm.
    pub max_iterations: usize,
    /// Wall-clock ceiling for one `generate` call.
    pub timeout: Duration,
    /// Advisory parallelism; the canonical pipeline is single-threaded.
    pub workers: usize,
    /// Population size for genetic search.
    pub population_size: usize,
    /// Initial temperature for standalone annealing.
    pub temperature: f64,
    /// RNG seed; `None` draws entropy from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Hybrid,
            max_iterations: 10_000,
            timeout: Duration::from_secs(5 * 60),
            workers: 8,
            population_size: 100,
            temperature: 1000.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the wall-clock ceiling.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the genetic population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the annealing start temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Cooperative cancellation signal for a solve run.
///
/// Combines an optional deadline with an optional shared cancel flag.
/// Every outer search loop polls [`SolveContext::is_cancelled`] and
/// returns its best-so-far when it fires; individual iterations are
/// not preempted.
#[derive(Debug, Clone, Default)]
pub struct SolveContext {
    deadline: Option<Instant>,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl SolveContext {
    /// Creates an unbounded context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the context by a timeout from now.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Attaches a shared cancel flag.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Derives a child context whose deadline is at most `timeout` from
    /// now (the tighter of the two deadlines wins).
    pub fn bounded_by(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        Self {
            deadline: Some(match self.deadline {
                Some(existing) => existing.min(candidate),
                None => candidate,
            }),
            cancel_flag: self.cancel_flag.clone(),
        }
    }

    /// Whether the run should stop.
    pub fn is_cancelled(&self) -> bool {
        if let Some(flag) = &self.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        matches!(self.deadline, Some(deadline) if Instant::now() >= deadline)
    }
}

/// Mutex-guarded best-solution tracker.
///
/// Writers compare fitness under the lock and overwrite only when
/// strictly better, so concurrent offers never regress the best.
#[derive(Debug, Default)]
pub struct SharedBest {
    inner: Mutex<Option<Solution>>,
}

impl SharedBest {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate; returns whether it became the new best.
    pub fn offer(&self, candidate: &Solution) -> bool {
        let mut guard = self.inner.lock().expect("best-solution lock poisoned");
        let better = guard
            .as_ref()
            .map(|best| candidate.fitness_score > best.fitness_score)
            .unwrap_or(true);
        if better {
            *guard = Some(candidate.clone());
        }
        better
    }

    /// Clones the current best, if any.
    pub fn snapshot(&self) -> Option<Solution> {
        self.inner.lock().expect("best-solution lock poisoned").clone()
    }
}

/// The timetable optimization engine.
///
/// Owns a snapshot of the input entities and a named constraint set.
/// `load_data` is idempotent (last call wins) and `add_constraint`
/// replaces on duplicate names.
pub struct TimetableEngine {
    timetable_id: String,
    config: EngineConfig,
    courses: Vec<Course>,
    faculty: Vec<Faculty>,
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
    constraints: ConstraintSet,
    best: SharedBest,
}

impl TimetableEngine {
    /// Creates an engine for a timetable.
    pub fn new(timetable_id: impl Into<String>, config: EngineConfig) -> Self {
        Self {
            timetable_id: timetable_id.into(),
            config,
            courses: Vec::new(),
            faculty: Vec::new(),
            rooms: Vec::new(),
            time_slots: Vec::new(),
            constraints: ConstraintSet::new(),
            best: SharedBest::new(),
        }
    }

    /// The timetable this engine solves for.
    pub fn timetable_id(&self) -> &str {
        &self.timetable_id
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads the domain snapshot. Replaces any previously loaded data.
    pub fn load_data(
        &mut self,
        courses: Vec<Course>,
        faculty: Vec<Faculty>,
        rooms: Vec<Room>,
        time_slots: Vec<TimeSlot>,
    ) {
        self.courses = courses;
        self.faculty = faculty;
        self.rooms = rooms;
        self.time_slots = time_slots;
    }

    /// Registers a constraint, replacing any constraint with the same
    /// name.
    pub fn add_constraint(&mut self, name: impl Into<String>, constraint: Box<dyn Constraint>) {
        self.constraints.register(name, constraint);
    }

    /// Registers the standard constraint catalog built from the loaded
    /// snapshot. `enrollments` maps course id → enrolled student count.
    pub fn add_standard_constraints(&mut self, enrollments: &HashMap<String, u32>) {
        let standard =
            ConstraintSet::standard(&self.courses, &self.faculty, &self.rooms, enrollments);
        self.constraints.extend(standard);
    }

    /// The best solution produced by any `generate` call so far.
    pub fn best_solution(&self) -> Option<Solution> {
        self.best.snapshot()
    }

    /// Runs the configured algorithm under `config.timeout` and returns
    /// the best solution found. Never fails: a cancelled or timed-out
    /// run returns the best-so-far, and input problems surface as
    /// violations on the returned solution.
    pub fn generate(&self, ctx: &SolveContext) -> Solution {
        let ctx = ctx.bounded_by(self.config.timeout);
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let active_courses: Vec<Course> =
            self.courses.iter().filter(|c| c.is_active).cloned().collect();
        let rooms: Vec<Room> = self.rooms.iter().filter(|r| r.is_available).cloned().collect();

        info!(
            timetable = %self.timetable_id,
            algorithm = ?self.config.algorithm,
            courses = active_courses.len(),
            rooms = rooms.len(),
            slots = self.time_slots.len(),
            "starting timetable generation"
        );

        let greedy = GreedyConstructor::new(
            &active_courses,
            &self.faculty,
            &rooms,
            &self.time_slots,
            &self.constraints,
        );
        let neighborhood =
            Neighborhood::new(&self.time_slots, &rooms, &self.faculty, &self.constraints);

        let solution = match self.config.algorithm {
            Algorithm::Hybrid => hybrid::hybrid(&ctx, &greedy, &neighborhood, &mut rng),
            Algorithm::SimulatedAnnealing => annealing::simulated_annealing(
                &ctx,
                &neighborhood,
                greedy.construct(),
                self.config.max_iterations,
                self.config.temperature,
                annealing::STANDALONE_COOLING,
                &mut rng,
            ),
            Algorithm::TabuSearch => tabu::tabu_search(
                &ctx,
                &neighborhood,
                greedy.construct(),
                self.config.max_iterations,
                tabu::STANDALONE_TENURE,
                tabu::STANDALONE_NEIGHBORS,
                &mut rng,
            ),
            Algorithm::Genetic => genetic::genetic_search(
                &ctx,
                &greedy,
                &neighborhood,
                self.config.population_size,
                self.config.max_iterations,
                &mut rng,
            ),
        };

        self.best.offer(&solution);
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassAssignment, CourseType, RoomType, SlotType, TimeOfDay};

    fn monday_slot(id: &str, start_hour: u16) -> TimeSlot {
        TimeSlot::new(
            id,
            "TT1",
            1,
            TimeOfDay::hm(start_hour, 0),
            TimeOfDay::hm(start_hour + 1, 0),
        )
    }

    fn engine_with(
        courses: Vec<Course>,
        faculty: Vec<Faculty>,
        rooms: Vec<Room>,
        slots: Vec<TimeSlot>,
        config: EngineConfig,
    ) -> TimetableEngine {
        let mut engine = TimetableEngine::new("TT1", config);
        engine.load_data(courses, faculty, rooms, slots);
        engine.add_standard_constraints(&HashMap::new());
        engine
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!(Algorithm::parse("hybrid"), Algorithm::Hybrid);
        assert_eq!(Algorithm::parse("genetic"), Algorithm::Genetic);
        assert_eq!(
            Algorithm::parse("simulated_annealing"),
            Algorithm::SimulatedAnnealing
        );
        assert_eq!(Algorithm::parse("tabu_search"), Algorithm::TabuSearch);
        // Unknown names fall back to hybrid
        assert_eq!(Algorithm::parse("quantum"), Algorithm::Hybrid);
        assert_eq!(Algorithm::parse(""), Algorithm::Hybrid);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.algorithm, Algorithm::Hybrid);
        assert_eq!(config.max_iterations, 10_000);
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.population_size, 100);
        assert_eq!(config.temperature, 1000.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_solve_context_deadline() {
        let ctx = SolveContext::new();
        assert!(!ctx.is_cancelled());

        let expired = SolveContext::new().with_timeout(Duration::ZERO);
        assert!(expired.is_cancelled());

        // A child never outlives its parent deadline
        let child = expired.bounded_by(Duration::from_secs(60));
        assert!(child.is_cancelled());
    }

    #[test]
    fn test_solve_context_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let ctx = SolveContext::new().with_cancel_flag(flag.clone());
        assert!(!ctx.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_shared_best_strictly_better() {
        let best = SharedBest::new();
        let mut a = Solution::new();
        a.fitness_score = 10.0;
        let mut b = Solution::new();
        b.fitness_score = 10.0;
        let mut c = Solution::new();
        c.fitness_score = 11.0;

        assert!(best.offer(&a));
        assert!(!best.offer(&b)); // equal is not better
        assert!(best.offer(&c));
        assert_eq!(best.snapshot().unwrap().fitness_score, 11.0);
    }

    // Scenario: one course, one qualified faculty, one room, one slot.
    // The unique placement is found and carries no penalty at all.
    #[test]
    fn test_trivial_feasible_instance() {
        let engine = engine_with(
            vec![Course::new("C1", "CS-101", CourseType::Theory).with_hours_per_week(1)],
            vec![Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0))
                .with_expertise("C1", 5)],
            vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)],
            vec![monday_slot("S1", 9)],
            EngineConfig::default().with_seed(42),
        );

        let solution = engine.generate(&SolveContext::new());

        assert_eq!(solution.len(), 1);
        let a = solution.assignments().next().unwrap();
        assert_eq!(
            (a.course_id.as_str(), a.faculty_id.as_str(), a.room_id.as_str()),
            ("C1", "F1", "R1")
        );
        assert_eq!(a.day_of_week, 1);
        assert_eq!(a.start, TimeOfDay::hm(9, 0));
        assert_eq!(a.end, TimeOfDay::hm(10, 0));
        assert_eq!(solution.hard_violations, 0);
        assert_eq!(solution.soft_violations, 0);
        assert_eq!(solution.fitness_score, 1000.0);
    }

    // Scenario: a lab course with only a classroom available. The hour
    // is still placed; the lab-room requirement surfaces as a hard
    // violation instead of a refusal.
    #[test]
    fn test_lab_course_without_lab_room() {
        let engine = engine_with(
            vec![Course::new("C1", "PHY-L", CourseType::Lab).with_hours_per_week(1)],
            vec![Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0))
                .with_expertise("C1", 5)],
            vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)],
            vec![monday_slot("S1", 9)],
            EngineConfig::default().with_seed(42),
        );

        let solution = engine.generate(&SolveContext::new());

        assert_eq!(solution.len(), 1);
        assert!(solution.hard_violations >= 1);
        assert!(solution.fitness_score <= 0.0);
    }

    // Scenario: two back-to-back labs, otherwise clean. Exactly one
    // soft constraint fires, costing 10 points.
    #[test]
    fn test_back_to_back_labs_cost_ten_points() {
        let courses = vec![
            Course::new("C1", "L1", CourseType::Lab),
            Course::new("C2", "L2", CourseType::Lab),
        ];
        let faculty = vec![
            Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                .with_expertise("C1", 5),
            Faculty::new("F2", "E2")
                .with_availability(1, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                .with_expertise("C2", 5),
        ];
        let rooms = vec![Room::new("R1", "L1", RoomType::Lab).with_capacity(30)];
        let constraints = ConstraintSet::standard(&courses, &faculty, &rooms, &HashMap::new());

        let mut solution = Solution::new();
        solution.insert(ClassAssignment::new(
            "C1", "F1", "R1", 1, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0), "S1",
        ));
        solution.insert(ClassAssignment::new(
            "C2", "F2", "R1", 1, TimeOfDay::hm(10, 0), TimeOfDay::hm(11, 0), "S2",
        ));
        evaluate_solution(&constraints, &mut solution);

        assert_eq!(solution.hard_violations, 0);
        assert_eq!(solution.soft_violations, 1);
        assert_eq!(solution.fitness_score, 990.0);
    }

    // Scenario: greedy parks a theory course at 16:00 because the
    // evening slot comes first in input order; the improvement phases
    // move it to the free 09:00 slot and clear the penalty.
    #[test]
    fn test_improvement_clears_evening_theory_penalty() {
        let engine = engine_with(
            vec![Course::new("C1", "CS-101", CourseType::Theory)],
            vec![Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                .with_expertise("C1", 5)],
            vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)],
            vec![monday_slot("S1", 16), monday_slot("S2", 9)],
            EngineConfig::default().with_seed(42),
        );

        let solution = engine.generate(&SolveContext::new());

        assert_eq!(solution.len(), 1);
        assert_eq!(solution.fitness_score, 1000.0);
        assert_eq!(
            solution.assignments().next().unwrap().start,
            TimeOfDay::hm(9, 0)
        );
    }

    // Scenario: a 1ms budget against a larger problem. The call still
    // returns promptly with a self-consistent solution.
    #[test]
    fn test_timeout_returns_consistent_solution() {
        let courses: Vec<Course> = (0..30)
            .map(|i| {
                Course::new(format!("C{i}"), format!("CRS-{i}"), CourseType::Theory)
                    .with_credits(i % 5)
                    .with_hours_per_week(2)
            })
            .collect();
        let faculty: Vec<Faculty> = (0..5)
            .map(|i| {
                let mut f = Faculty::new(format!("F{i}"), format!("E{i}"));
                for day in 1..=5u8 {
                    f = f.with_availability(day, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0));
                }
                for c in 0..30 {
                    if c % 5 == i {
                        f = f.with_expertise(format!("C{c}"), 3);
                    }
                }
                f
            })
            .collect();
        let rooms: Vec<Room> = (0..5)
            .map(|i| Room::new(format!("R{i}"), format!("10{i}"), RoomType::Classroom))
            .collect();
        let slots: Vec<TimeSlot> = (1..=5u8)
            .flat_map(|day| {
                (0..8u16).map(move |i| {
                    TimeSlot::new(
                        format!("S{day}{i}"),
                        "TT1",
                        day,
                        TimeOfDay::hm(9 + i, 0),
                        TimeOfDay::hm(10 + i, 0),
                    )
                })
            })
            .collect();

        let engine = engine_with(
            courses,
            faculty,
            rooms,
            slots,
            EngineConfig::default()
                .with_seed(42)
                .with_timeout(Duration::from_millis(1)),
        );

        let solution = engine.generate(&SolveContext::new());

        // Cached score equals a fresh evaluation
        let mut check = solution.clone();
        let constraints = ConstraintSet::standard(
            &engine.courses,
            &engine.faculty,
            &engine.rooms,
            &HashMap::new(),
        );
        let rescored = evaluate_solution(&constraints, &mut check);
        assert_eq!(solution.fitness_score, rescored);
        assert_eq!(solution.hard_violations, check.hard_violations);
        assert_eq!(solution.soft_violations, check.soft_violations);
    }

    // Boundary: no courses at all.
    #[test]
    fn test_empty_input() {
        let engine = engine_with(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            EngineConfig::default().with_seed(42),
        );

        let solution = engine.generate(&SolveContext::new());
        assert!(solution.is_empty());
        assert_eq!(solution.fitness_score, 1000.0);
        assert_eq!(solution.hard_violations, 0);
        assert_eq!(solution.soft_violations, 0);
    }

    // Boundary: only break/lunch slots. Nothing can be scheduled and
    // the improvement phases add nothing.
    #[test]
    fn test_all_slots_non_regular() {
        let engine = engine_with(
            vec![Course::new("C1", "CS-101", CourseType::Theory)],
            vec![Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0))
                .with_expertise("C1", 5)],
            vec![Room::new("R1", "101", RoomType::Classroom)],
            vec![
                monday_slot("S1", 9).with_slot_type(SlotType::Break),
                monday_slot("S2", 12).with_slot_type(SlotType::Lunch),
            ],
            EngineConfig::default().with_seed(42),
        );

        let solution = engine.generate(&SolveContext::new());
        assert!(solution.is_empty());
    }

    #[test]
    fn test_generate_is_deterministic_for_a_seed() {
        let make = || {
            engine_with(
                vec![
                    Course::new("C1", "A", CourseType::Theory).with_credits(3).with_hours_per_week(2),
                    Course::new("C2", "B", CourseType::Lab).with_credits(2),
                ],
                vec![
                    Faculty::new("F1", "E1")
                        .with_availability(1, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                        .with_availability(2, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                        .with_expertise("C1", 4)
                        .with_expertise("C2", 3),
                    Faculty::new("F2", "E2")
                        .with_availability(1, TimeOfDay::hm(8, 0), TimeOfDay::hm(18, 0))
                        .with_expertise("C2", 5),
                ],
                vec![
                    Room::new("R1", "101", RoomType::Classroom).with_capacity(40),
                    Room::new("R2", "L1", RoomType::Lab).with_capacity(20),
                ],
                vec![
                    monday_slot("S1", 9),
                    monday_slot("S2", 10),
                    monday_slot("S3", 11),
                    TimeSlot::new("S4", "TT1", 2, TimeOfDay::hm(9, 0), TimeOfDay::hm(10, 0)),
                ],
                EngineConfig::default().with_seed(7),
            )
        };

        let first = make().generate(&SolveContext::new());
        let second = make().generate(&SolveContext::new());

        assert_eq!(first.schedule, second.schedule);
        assert_eq!(first.fitness_score, second.fitness_score);
        assert_eq!(first.hard_violations, second.hard_violations);
        assert_eq!(first.soft_violations, second.soft_violations);
    }

    #[test]
    fn test_standalone_algorithms_run() {
        for algorithm in [
            Algorithm::SimulatedAnnealing,
            Algorithm::TabuSearch,
            Algorithm::Genetic,
        ] {
            let engine = engine_with(
                vec![Course::new("C1", "CS-101", CourseType::Theory)],
                vec![Faculty::new("F1", "E1")
                    .with_availability(1, TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0))
                    .with_expertise("C1", 5)],
                vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)],
                vec![monday_slot("S1", 9), monday_slot("S2", 10)],
                EngineConfig::default()
                    .with_seed(42)
                    .with_algorithm(algorithm)
                    .with_max_iterations(200)
                    .with_population_size(10),
            );

            let solution = engine.generate(&SolveContext::new());
            assert_eq!(solution.len(), 1, "{algorithm:?} lost the assignment");
            assert_eq!(solution.hard_violations, 0, "{algorithm:?} broke feasibility");
        }
    }

    #[test]
    fn test_best_solution_tracked_across_runs() {
        let engine = engine_with(
            vec![Course::new("C1", "CS-101", CourseType::Theory)],
            vec![Faculty::new("F1", "E1")
                .with_availability(1, TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0))
                .with_expertise("C1", 5)],
            vec![Room::new("R1", "101", RoomType::Classroom).with_capacity(30)],
            vec![monday_slot("S1", 9)],
            EngineConfig::default().with_seed(42),
        );

        assert!(engine.best_solution().is_none());
        let solution = engine.generate(&SolveContext::new());
        let best = engine.best_solution().unwrap();
        assert_eq!(best.fitness_score, solution.fitness_score);
    }

    #[test]
    fn test_load_data_last_call_wins() {
        let mut engine = TimetableEngine::new("TT1", EngineConfig::default().with_seed(42));
        engine.load_data(
            vec![Course::new("C1", "A", CourseType::Theory)],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        engine.load_data(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        engine.add_standard_constraints(&HashMap::new());

        let solution = engine.generate(&SolveContext::new());
        assert!(solution.is_empty());
    }
}
