//! Fast non-dominated sort as used by NSGA-II.
//!
//! Time complexity is `O(K * N^2)`, where `K` is the number of objectives and `N`
//! the number of solutions. Large populations compute the pairwise domination
//! relation in parallel.

use rayon::prelude::*;
use std::mem;

use super::{FitnessMatrix, ParetoFronts};

/// Returns `true` if `a` dominates `b` under maximization.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (x, y) in a.iter().zip(b) {
        if x < y {
            return false;
        }
        if x > y {
            strictly_better = true;
        }
    }
    strictly_better
}

// solutions dominated by `p`, and how many solutions dominate `p`
fn domination_relation(fitness: &FitnessMatrix, p: usize) -> (Vec<usize>, usize) {
    let p_row = fitness.row(p);
    let mut dominated = Vec::new();
    let mut domination_count = 0;

    for q in 0..fitness.num_solutions() {
        if q == p {
            continue;
        }
        let q_row = fitness.row(q);
        if dominates(p_row, q_row) {
            dominated.push(q);
        } else if dominates(q_row, p_row) {
            domination_count += 1;
        }
    }

    (dominated, domination_count)
}

/// Sorts the population into Pareto fronts. Members of each front are listed in
/// ascending index order.
pub fn non_dominated_sort(fitness: &FitnessMatrix, parallel_threshold: usize) -> ParetoFronts {
    let num_solutions = fitness.num_solutions();

    let relations: Vec<(Vec<usize>, usize)> = if num_solutions >= parallel_threshold {
        (0..num_solutions)
            .into_par_iter()
            .map(|p| domination_relation(fitness, p))
            .collect()
    } else {
        (0..num_solutions)
            .map(|p| domination_relation(fitness, p))
            .collect()
    };

    let (dominated_solutions, mut domination_count): (Vec<Vec<usize>>, Vec<usize>) =
        relations.into_iter().unzip();

    let mut front_of = vec![0; num_solutions];
    let mut fronts = Vec::new();
    let mut current_front: Vec<usize> = (0..num_solutions)
        .filter(|&p| domination_count[p] == 0)
        .collect();

    while !current_front.is_empty() {
        let mut next_front = Vec::new();
        for &p in current_front.iter() {
            for &q in dominated_solutions[p].iter() {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next_front.push(q);
                }
            }
        }
        next_front.sort_unstable();

        let front = mem::replace(&mut current_front, next_front);
        for &p in front.iter() {
            front_of[p] = fronts.len();
        }
        fronts.push(front);
    }

    tracing::trace!(num_solutions, num_fronts = fronts.len(), "non-dominated sort");

    ParetoFronts { fronts, front_of }
}
