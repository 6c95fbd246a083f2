//! University timetable optimization engine.
//!
//! Produces conflict-free weekly class schedules: given courses,
//! faculty (with availability and expertise), rooms, and discrete time
//! slots, the engine assigns each course hour to a (faculty, room, day,
//! slot) tuple, honoring hard constraints and minimizing weighted soft
//! penalties under a wall-clock budget.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Faculty`, `Room`,
//!   `TimeSlot`, `ClassAssignment`, `Solution`
//! - **`constraints`**: The `Constraint` trait, the named registry, and
//!   the standard hard/soft catalog
//! - **`engine`**: `TimetableEngine` with greedy construction,
//!   simulated annealing, tabu search, genetic search, hill climbing,
//!   and the hybrid pipeline
//! - **`conflict`**: Online conflict detection for manual edits
//! - **`validation`**: Advisory snapshot diagnostics for the
//!   surrounding service
//!
//! # Design
//!
//! Constraint violations are data, not errors: `generate` always
//! returns the best solution found — on timeout it returns the
//! best-so-far, and malformed inputs earn their natural penalties
//! instead of being rejected. All randomness flows through a single
//! seeded RNG per run, so identical inputs and seed reproduce the same
//! schedule exactly.
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//!   Annealing"
//! - Glover (1989), "Tabu Search — Part I"

pub mod conflict;
pub mod constraints;
pub mod engine;
pub mod models;
pub mod validation;
