use crate::error::{Result, SelectionError};

use super::{CrowdingDistance, FitnessMatrix};

/// Assigns a crowding distance to each member of `front`.
///
/// For every objective the front is sorted by value; both extremes receive an
/// infinite distance and every interior member receives the gap between its
/// neighbours divided by the spread of the objective. An objective without spread
/// contributes nothing to interior members. Values are halved for objectives whose
/// spread overflows `f64`, so distances stay finite near `±f64::MAX`.
pub fn crowding_distance(front: &[usize], fitness: &FitnessMatrix) -> Result<CrowdingDistance> {
    if let Some(&outside) = front.iter().find(|&&idx| idx >= fitness.num_solutions()) {
        return Err(SelectionError::Ranking(format!(
            "Front member {} is outside of a population of {}",
            outside,
            fitness.num_solutions()
        )));
    }

    let len = front.len();
    let per_objective: Vec<Vec<f64>> = (0..fitness.num_objectives())
        .map(|objective| {
            let mut distances = vec![0.0; len];
            if len == 0 {
                return distances;
            }

            // front positions, sorted by this objective
            let mut sorted: Vec<usize> = (0..len).collect();
            sorted.sort_by(|&a, &b| {
                fitness
                    .value(front[a], objective)
                    .total_cmp(&fitness.value(front[b], objective))
            });

            let raw = |k: usize| fitness.value(front[sorted[k]], objective);
            // halved values keep every gap between finite extremes finite
            let scale = if (raw(len - 1) - raw(0)).is_finite() {
                1.0
            } else {
                0.5
            };
            let value_at = |k: usize| raw(k) * scale;
            let spread = value_at(len - 1) - value_at(0);

            distances[sorted[0]] = f64::INFINITY;
            distances[sorted[len - 1]] = f64::INFINITY;

            if spread.is_finite() && spread > 0.0 {
                for k in 1..len.saturating_sub(1) {
                    distances[sorted[k]] = (value_at(k + 1) - value_at(k - 1)) / spread;
                }
            }

            distances
        })
        .collect();

    let summed: Vec<(usize, f64)> = front
        .iter()
        .enumerate()
        .map(|(pos, &idx)| (idx, per_objective.iter().map(|d| d[pos]).sum()))
        .collect();

    let mut front_order: Vec<usize> = (0..len).collect();
    front_order.sort_by(|&a, &b| summed[b].1.total_cmp(&summed[a].1));

    let population_order = front_order.iter().map(|&pos| front[pos]).collect();

    Ok(CrowdingDistance {
        per_objective,
        summed,
        front_order,
        population_order,
    })
}
