//! Hybrid optimization pipeline.
//!
//! Chains the strategies in increasing order of locality:
//!
//! 1. Greedy construction (fast feasible start)
//! 2. Simulated annealing, 100 iterations (global exploration)
//! 3. Tabu search, 50 iterations (cycle-free local optimization)
//! 4. Hill climbing, 20 iterations (final polish)
//!
//! Each phase observes the solve context and hands its best-so-far to
//! the next; cancellation short-circuits the remaining phases.

use rand::Rng;
use tracing::info;

use crate::models::Solution;

use super::greedy::GreedyConstructor;
use super::neighborhood::Neighborhood;
use super::{annealing, tabu, SolveContext};

/// Hill-climbing iterations in the hybrid pipeline.
pub const HILL_CLIMBING_ITERATIONS: usize = 20;

/// Runs the full hybrid pipeline.
pub fn hybrid<R: Rng>(
    ctx: &SolveContext,
    greedy: &GreedyConstructor<'_>,
    neighborhood: &Neighborhood<'_>,
    rng: &mut R,
) -> Solution {
    let initial = greedy.construct();
    info!(
        assignments = initial.len(),
        fitness = initial.fitness_score,
        "greedy construction complete"
    );

    let annealed = annealing::improve(ctx, neighborhood, initial, rng);
    let tuned = tabu::improve(ctx, neighborhood, annealed, rng);
    let polished = hill_climb(ctx, neighborhood, tuned, HILL_CLIMBING_ITERATIONS, rng);
    info!(
        assignments = polished.len(),
        fitness = polished.fitness_score,
        hard = polished.hard_violations,
        "hybrid pipeline complete"
    );
    polished
}

/// Steepest-ascent hill climbing: repeatedly takes the best of a batch
/// of 10 neighbors, stopping at the first non-improving batch, on
/// iteration exhaustion, or on cancellation.
pub fn hill_climb<R: Rng>(
    ctx: &SolveContext,
    neighborhood: &Neighborhood<'_>,
    initial: Solution,
    iterations: usize,
    rng: &mut R,
) -> Solution {
    let mut current = initial;

    for _ in 0..iterations {
        if ctx.is_cancelled() {
            return current;
        }

        let neighbor = neighborhood.generate_best_neighbor(&current, rng);
        if neighbor.fitness_score > current.fitness_score {
            current = neighbor;
        } else {
            break;
        }
    }

    current
}
