//! Simulated annealing.
//!
//! Single-solution trajectory search. Worsening neighbors are accepted
//! with probability `exp(delta / T)`, which shrinks as the temperature
//! cools by a constant factor each iteration.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated
//!   Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman
//!   Problem"

use rand::Rng;
use tracing::debug;

use crate::models::Solution;

use super::neighborhood::Neighborhood;
use super::SolveContext;

/// Cooling factor for a standalone annealing run.
pub const STANDALONE_COOLING: f64 = 0.995;

/// Parameters of the short post-greedy improvement phase.
pub const IMPROVEMENT_TEMPERATURE: f64 = 500.0;
pub const IMPROVEMENT_COOLING: f64 = 0.98;
pub const IMPROVEMENT_ITERATIONS: usize = 100;

/// Runs simulated annealing from `initial`, returning the best
/// solution seen. Checks the context every iteration and returns the
/// best-so-far on cancellation.
pub fn simulated_annealing<R: Rng>(
    ctx: &SolveContext,
    neighborhood: &Neighborhood<'_>,
    initial: Solution,
    iterations: usize,
    initial_temperature: f64,
    cooling: f64,
    rng: &mut R,
) -> Solution {
    let mut current = initial;
    let mut best = current.clone();
    let mut temperature = initial_temperature;

    for iteration in 0..iterations {
        if ctx.is_cancelled() {
            debug!(iteration, "annealing cancelled, returning best-so-far");
            return best;
        }

        let neighbor = neighborhood.generate_neighbor(&current, rng);
        let delta = neighbor.fitness_score - current.fitness_score;

        if delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp() {
            current = neighbor;
            if current.fitness_score > best.fitness_score {
                best = current.clone();
                debug!(iteration, fitness = best.fitness_score, "annealing improved best");
            }
        }

        temperature *= cooling;
    }

    best
}

/// The short annealing pass the hybrid pipeline applies after greedy
/// construction.
pub fn improve<R: Rng>(
    ctx: &SolveContext,
    neighborhood: &Neighborhood<'_>,
    initial: Solution,
    rng: &mut R,
) -> Solution {
    simulated_annealing(
        ctx,
        neighborhood,
        initial,
        IMPROVEMENT_ITERATIONS,
        IMPROVEMENT_TEMPERATURE,
        IMPROVEMENT_COOLING,
        rng,
    )
}
