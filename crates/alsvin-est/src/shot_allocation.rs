//! Distributing a finite shot budget across estimation tasks.
//!
//! Two policies are provided: uniform (every task gets the full per-task
//! count) and variance-proportional (the budget is split according to each
//! frame's term-weight magnitude, optionally damped by prior expectation
//! values). [`estimate_nmeas_for_frames`] computes the matching theoretical
//! lower bound on the total number of measurements.

use tracing::debug;

use crate::error::{EstError, EstResult};
use crate::operators::{ExpectationValues, PauliSum};
use crate::task::EstimationTask;

/// Assign the same shot count to every task.
///
/// Returns new tasks; the originals are untouched. A negative count is a
/// validation error.
pub fn allocate_shots_uniformly(
    tasks: &[EstimationTask],
    number_of_shots: i64,
) -> EstResult<Vec<EstimationTask>> {
    if number_of_shots < 0 {
        return Err(EstError::InvalidShotCount(number_of_shots));
    }
    let n = number_of_shots as u64;
    Ok(tasks.iter().map(|t| t.with_shots(n)).collect())
}

/// Split a total shot budget across tasks proportionally to frame weight.
///
/// Each task's weight is the sum of absolute coefficients of its operator.
/// When `prior_expectation_values` supplies a per-task prior E, the weight
/// is scaled by `sqrt(1 − E²)`: a frame whose expectation is already known
/// to sit at ±1 has zero sampling variance and receives zero shots, with its
/// share redistributed over the remaining frames.
///
/// Integer rounding uses the largest-remainder method: every task gets the
/// floor of its ideal allocation, and the leftover shots go one each to the
/// tasks with the largest fractional parts (ties broken by lower task
/// index). The returned counts always sum to exactly `total_n_shots`.
///
/// A priors vector must carry exactly one value per task.
pub fn allocate_shots_proportionally(
    tasks: &[EstimationTask],
    total_n_shots: i64,
    prior_expectation_values: Option<&ExpectationValues>,
) -> EstResult<Vec<EstimationTask>> {
    if total_n_shots < 0 {
        return Err(EstError::InvalidShotCount(total_n_shots));
    }
    if let Some(priors) = prior_expectation_values {
        if priors.len() != tasks.len() {
            return Err(EstError::ParamCountMismatch {
                expected: tasks.len(),
                got: priors.len(),
            });
        }
    }
    let total = total_n_shots as u64;

    let weights: Vec<f64> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let mut w = task.operator.weight_sum();
            if let Some(priors) = prior_expectation_values {
                let e = priors.get(i).unwrap_or(0.0);
                w *= (1.0 - e * e).max(0.0).sqrt();
            }
            w
        })
        .collect();

    let weight_total: f64 = weights.iter().sum();
    if weight_total == 0.0 {
        // All frames fully determined (or empty): nothing worth measuring.
        return Ok(tasks.iter().map(|t| t.with_shots(0)).collect());
    }

    let ideal: Vec<f64> = weights
        .iter()
        .map(|w| total as f64 * w / weight_total)
        .collect();
    let mut counts: Vec<u64> = ideal.iter().map(|x| x.floor() as u64).collect();

    let assigned: u64 = counts.iter().sum();
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = ideal[a] - ideal[a].floor();
        let fb = ideal[b] - ideal[b].floor();
        fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal).then(a.cmp(&b))
    });
    for &i in order.iter().take((total - assigned) as usize) {
        counts[i] += 1;
    }

    debug!(total, n_tasks = tasks.len(), "proportional shot allocation");

    Ok(tasks
        .iter()
        .zip(counts)
        .map(|(t, n)| t.with_shots(n))
        .collect())
}

/// Theoretical measurement count for a target estimator precision of 1.
///
/// For each frame, the variance proxy is
///
///   K_f = Σ_terms c² · (1 − E²)
///
/// over the frame's non-identity terms (identity terms have zero sampling
/// variance), with E taken from `prior_expectation_values` one value per
/// non-identity term in frame order (E = 0 when no priors are given). The
/// Lagrange-optimal allocation across frames then needs
///
///   K² = (Σ_f √K_f)²
///
/// total shots for unit absolute error, with frame f's share √K_f · Σ_g √K_g.
///
/// Returns `(K², n_terms, frame_shares)` where `n_terms` counts all terms
/// (identity included) and `frame_shares` sums to K². Zero frames yield
/// `(0.0, 0, [])`. A priors vector must carry exactly one value per
/// non-identity term.
pub fn estimate_nmeas_for_frames(
    frames: &[PauliSum],
    prior_expectation_values: Option<&ExpectationValues>,
) -> EstResult<(f64, usize, Vec<f64>)> {
    if let Some(priors) = prior_expectation_values {
        let non_identity = frames
            .iter()
            .flat_map(|f| f.terms())
            .filter(|t| !t.string.is_identity())
            .count();
        if priors.len() != non_identity {
            return Err(EstError::ParamCountMismatch {
                expected: non_identity,
                got: priors.len(),
            });
        }
    }

    let mut n_terms = 0;
    let mut sqrt_ks: Vec<f64> = Vec::with_capacity(frames.len());
    let mut cursor = 0;

    for frame in frames {
        n_terms += frame.n_terms();
        let mut k = 0.0;
        for term in frame.terms() {
            if term.string.is_identity() {
                continue;
            }
            let e = prior_expectation_values
                .and_then(|p| p.get(cursor))
                .unwrap_or(0.0);
            cursor += 1;
            k += term.coeff * term.coeff * (1.0 - e * e);
        }
        sqrt_ks.push(k.sqrt());
    }

    let sqrt_sum: f64 = sqrt_ks.iter().sum();
    let k2 = sqrt_sum * sqrt_sum;
    let shares: Vec<f64> = sqrt_ks.iter().map(|s| s * sqrt_sum).collect();

    Ok((k2, n_terms, shares))
}
