//! Tabu search.
//!
//! Keeps a short-term memory of recently visited solutions (by content
//! hash) and always moves to the best non-tabu neighbor, allowing the
//! search to climb out of local optima without immediately cycling
//! back.
//!
//! # Reference
//! Glover (1989), "Tabu Search — Part I"

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::debug;

use crate::models::Solution;

use super::neighborhood::Neighborhood;
use super::SolveContext;

/// Tenure and batch size for a standalone run.
pub const STANDALONE_TENURE: usize = 10;
pub const STANDALONE_NEIGHBORS: usize = 20;

/// Tenure and batch size for the hybrid improvement phase.
pub const IMPROVEMENT_TENURE: usize = 5;
pub const IMPROVEMENT_NEIGHBORS: usize = 10;
pub const IMPROVEMENT_ITERATIONS: usize = 50;

/// Content hash of a solution's assignment set.
///
/// Equal schedules hash equally regardless of how they were reached;
/// the iteration order of the underlying map is already sorted by key.
pub fn solution_hash(solution: &Solution) -> u64 {
    let mut hasher = DefaultHasher::new();
    for (key, a) in &solution.schedule {
        key.hash(&mut hasher);
        a.faculty_id.hash(&mut hasher);
        a.room_id.hash(&mut hasher);
        a.day_of_week.hash(&mut hasher);
        a.start.minutes().hash(&mut hasher);
        a.end.minutes().hash(&mut hasher);
    }
    hasher.finish()
}

/// Runs tabu search from `initial`, returning the best solution seen.
///
/// Each iteration draws `neighbors_per_iteration` candidates, steps to
/// the best one whose hash is not tabu, and marks the departed solution
/// tabu for `tenure` iterations. Terminates early when every candidate
/// is tabu, and on cancellation.
pub fn tabu_search<R: Rng>(
    ctx: &SolveContext,
    neighborhood: &Neighborhood<'_>,
    initial: Solution,
    iterations: usize,
    tenure: usize,
    neighbors_per_iteration: usize,
    rng: &mut R,
) -> Solution {
    let mut current = initial;
    let mut best = current.clone();
    let mut tabu_list: HashMap<u64, usize> = HashMap::new();

    for iteration in 0..iterations {
        if ctx.is_cancelled() {
            debug!(iteration, "tabu search cancelled, returning best-so-far");
            return best;
        }

        let candidates = neighborhood.generate_neighbors(&current, neighbors_per_iteration, rng);
        let best_candidate = candidates
            .into_iter()
            .filter(|n| !tabu_list.contains_key(&solution_hash(n)))
            .max_by(|a, b| a.fitness_score.total_cmp(&b.fitness_score));

        let Some(next) = best_candidate else {
            debug!(iteration, "all neighbors tabu, terminating early");
            break;
        };

        tabu_list.insert(solution_hash(&current), iteration + tenure);
        tabu_list.retain(|_, expiry| *expiry > iteration);

        current = next;
        if current.fitness_score > best.fitness_score {
            best = current.clone();
            debug!(iteration, fitness = best.fitness_score, "tabu search improved best");
        }
    }

    best
}

/// The short tabu pass the hybrid pipeline applies after annealing.
pub fn improve<R: Rng>(
    ctx: &SolveContext,
    neighborhood: &Neighborhood<'_>,
    initial: Solution,
    rng: &mut R,
) -> Solution {
    tabu_search(
        ctx,
        neighborhood,
        initial,
        IMPROVEMENT_ITERATIONS,
        IMPROVEMENT_TENURE,
        IMPROVEMENT_NEIGHBORS,
        rng,
    )
}
