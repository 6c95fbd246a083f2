//! Genetic search.
//!
//! Population-based search over whole timetables. Individuals are
//! complete solutions; recombination is a one-point crossover over the
//! sorted assignment-key ordering, and mutation is a single move
//! operator.
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Burke, Elliman & Weare (1994), "A genetic algorithm based
//!   university timetabling system"

use rand::Rng;
use tracing::debug;

use crate::models::Solution;

use super::evaluator::evaluate_solution;
use super::greedy::GreedyConstructor;
use super::neighborhood::Neighborhood;
use super::SolveContext;

/// Probability that a child is mutated.
const MUTATION_RATE: f64 = 0.1;

/// Number of perturbation moves applied to diversify each seeded
/// individual beyond the first.
const SEED_PERTURBATIONS: usize = 3;

/// Runs genetic search and returns the best individual ever seen.
///
/// The population is seeded from the greedy constructor and
/// diversified by random moves. Each generation: binary-tournament
/// selection of `population_size / 2` parents, pairwise one-point
/// crossover, move-mutation with probability 0.1, then replacement by
/// the top half of the parents plus the offspring, padded from the
/// previous generation and truncated to the population size.
pub fn genetic_search<R: Rng>(
    ctx: &SolveContext,
    greedy: &GreedyConstructor<'_>,
    neighborhood: &Neighborhood<'_>,
    population_size: usize,
    max_iterations: usize,
    rng: &mut R,
) -> Solution {
    let population_size = population_size.max(2);
    let generations = (max_iterations / population_size).max(1);

    let seed = greedy.construct();
    let mut population: Vec<Solution> = Vec::with_capacity(population_size);
    population.push(seed.clone());
    for _ in 1..population_size {
        let mut individual = seed.clone();
        for _ in 0..SEED_PERTURBATIONS {
            neighborhood.move_assignment(&mut individual, rng);
        }
        evaluate_solution(neighborhood.constraints(), &mut individual);
        population.push(individual);
    }

    let mut best = best_of(&population).clone();

    for generation in 0..generations {
        if ctx.is_cancelled() {
            debug!(generation, "genetic search cancelled, returning best-so-far");
            return best;
        }

        // Selection: binary tournament
        let parent_count = (population_size / 2).max(2);
        let mut parents: Vec<Solution> = Vec::with_capacity(parent_count);
        for _ in 0..parent_count {
            let a = &population[rng.random_range(0..population.len())];
            let b = &population[rng.random_range(0..population.len())];
            parents.push(if a.fitness_score >= b.fitness_score {
                a.clone()
            } else {
                b.clone()
            });
        }

        // Crossover: consecutive pairs
        let mut offspring: Vec<Solution> = Vec::with_capacity(parent_count);
        for pair in parents.chunks_exact(2) {
            let (c1, c2) = crossover(&pair[0], &pair[1], rng);
            offspring.push(c1);
            offspring.push(c2);
        }

        // Mutation + evaluation
        for child in &mut offspring {
            if rng.random::<f64>() < MUTATION_RATE {
                neighborhood.move_assignment(child, rng);
            }
            evaluate_solution(neighborhood.constraints(), child);
        }

        // Replacement: top half of parents + offspring, padded from the
        // previous generation, truncated to the population size
        parents.sort_by(|a, b| b.fitness_score.total_cmp(&a.fitness_score));
        parents.truncate(parent_count / 2);

        let mut next: Vec<Solution> = parents;
        next.append(&mut offspring);
        if next.len() < population_size {
            let mut previous = population;
            previous.sort_by(|a, b| b.fitness_score.total_cmp(&a.fitness_score));
            for individual in previous {
                if next.len() >= population_size {
                    break;
                }
                next.push(individual);
            }
        }
        next.truncate(population_size);
        population = next;

        let generation_best = best_of(&population);
        if generation_best.fitness_score > best.fitness_score {
            best = generation_best.clone();
            debug!(generation, fitness = best.fitness_score, "genetic search improved best");
        }
    }

    best
}

/// One-point crossover over the union of both parents' assignment
/// keys, in sorted order. The first child takes the left span from the
/// first parent and the right span from the second; the second child
/// mirrors it. A key missing on the designated side is taken from the
/// other parent, so no scheduled hour is lost by recombination.
/// Children carry stale fitness and must be re-evaluated.
fn crossover<R: Rng>(p1: &Solution, p2: &Solution, rng: &mut R) -> (Solution, Solution) {
    let keys: Vec<&String> = {
        let mut union: Vec<&String> = p1.schedule.keys().chain(p2.schedule.keys()).collect();
        union.sort();
        union.dedup();
        union
    };
    if keys.is_empty() {
        return (p1.clone(), p2.clone());
    }

    let pivot = rng.random_range(0..=keys.len());
    let mut c1 = Solution::new();
    let mut c2 = Solution::new();
    for (index, key) in keys.iter().enumerate() {
        let (left, right) = if index < pivot { (p1, p2) } else { (p2, p1) };
        let for_c1 = left.schedule.get(*key).or_else(|| right.schedule.get(*key));
        let for_c2 = right.schedule.get(*key).or_else(|| left.schedule.get(*key));
        if let Some(a) = for_c1 {
            c1.schedule.insert((*key).clone(), a.clone());
        }
        if let Some(a) = for_c2 {
            c2.schedule.insert((*key).clone(), a.clone());
        }
    }
    (c1, c2)
}

fn best_of(population: &[Solution]) -> &Solution {
    population
        .iter()
        .max_by(|a, b| a.fitness_score.total_cmp(&b.fitness_score))
        .expect("population is never empty")
}
