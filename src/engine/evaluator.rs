//! Solution evaluator.
//!
//! Fitness is `BASE - Σ penalties`, where every hard penalty is scaled
//! by [`HARD_PENALTY_MULTIPLIER`] before subtraction. Higher is better;
//! a feasible, preference-perfect timetable scores exactly [`BASE_FITNESS`].
//!
//! Evaluation also refreshes the violation counters cached on the
//! solution. The cache is invalidated by any mutation, so every search
//! step re-evaluates before comparing scores.

use crate::constraints::ConstraintSet;
use crate::models::Solution;

/// Fitness of an empty, violation-free solution.
pub const BASE_FITNESS: f64 = 1000.0;

/// Scale factor applied to hard-constraint penalties.
pub const HARD_PENALTY_MULTIPLIER: f64 = 1000.0;

/// Evaluates a solution against a constraint set.
///
/// Writes `fitness_score`, `hard_violations`, and `soft_violations`
/// onto the solution and returns the score. Evaluating twice without a
/// mutation in between yields identical results.
pub fn evaluate_solution(constraints: &ConstraintSet, solution: &mut Solution) -> f64 {
    let mut score = BASE_FITNESS;
    let mut hard_violations = 0;
    let mut soft_violations = 0;

    for (_, constraint) in constraints.iter() {
        let (violated, penalty) = constraint.evaluate(solution);
        if violated {
            if constraint.is_hard() {
                hard_violations += 1;
                score -= HARD_PENALTY_MULTIPLIER * penalty;
            } else {
                soft_violations += 1;
                score -= penalty;
            }
        }
    }

    solution.hard_violations = hard_violations;
    solution.soft_violations = soft_violations;
    solution.fitness_score = score;
    score
}
