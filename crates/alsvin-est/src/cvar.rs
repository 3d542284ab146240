//! CVaR (Conditional Value at Risk) estimator.
//!
//! For diagonal operators the ground state is a basis state, so during
//! combinatorial optimization only the best sampled bitstrings carry
//! signal. The CVaR estimator keeps the lowest-energy tail of probability
//! mass α and reports its mean, discarding the inferior samples entirely.
//!
//! Reference: https://arxiv.org/abs/1907.04769
//! "Improving Variational Quantum Optimization using CVaR",
//! P. Barkoutsos, G. Nannicini, A. Robert, I. Tavernelli, and S. Woerner

use alsvin_hal::Backend;

use crate::error::{EstError, EstResult};
use crate::estimator::EstimateExpectationValues;
use crate::operators::ExpectationValues;
use crate::task::EstimationTask;

/// Estimator reporting the mean of the lowest-energy α tail.
#[derive(Debug, Clone, Copy)]
pub struct CvarEstimator {
    /// Tail mass to keep; must satisfy 0 < α ≤ 1 at call time.
    pub alpha: f64,
}

impl CvarEstimator {
    /// Create an estimator with the given α.
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl EstimateExpectationValues for CvarEstimator {
    fn estimate(
        &self,
        backend: &dyn Backend,
        tasks: &[EstimationTask],
    ) -> EstResult<Vec<ExpectationValues>> {
        for task in tasks {
            if !task.operator.is_ising() {
                return Err(EstError::NonIsingOperator(format!("{:?}", task.operator)));
            }
        }
        if self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(EstError::InvalidAlpha {
                estimator: "CvarEstimator",
                alpha: self.alpha,
            });
        }

        tasks
            .iter()
            .map(|task| {
                let measurements = backend.execute(&task.circuit, task.number_of_shots)?;
                if task.operator.min_qubits() > measurements.num_qubits() {
                    return Err(EstError::MeasurementWidthMismatch {
                        needed: task.operator.min_qubits(),
                        measured: measurements.num_qubits(),
                    });
                }
                let total = measurements.total_shots();
                if total == 0 {
                    return Err(EstError::EmptyMeasurements);
                }

                // Energy and probability of each observed bitstring, lowest
                // energy first.
                let mut outcomes: Vec<(f64, f64)> = measurements
                    .iter()
                    .map(|(bits, count)| {
                        (
                            task.operator.ising_energy(bits),
                            count as f64 / total as f64,
                        )
                    })
                    .collect();
                outcomes.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

                // Accumulate the tail until mass α is covered; the boundary
                // outcome contributes only its remaining fraction.
                let mut cumulative_prob = 0.0;
                let mut cumulative_value = 0.0;
                for (energy, prob) in outcomes {
                    if cumulative_prob + prob < self.alpha {
                        cumulative_prob += prob;
                        cumulative_value += prob * energy;
                    } else {
                        cumulative_value += (self.alpha - cumulative_prob) * energy;
                        break;
                    }
                }

                Ok(ExpectationValues::single(cumulative_value / self.alpha))
            })
            .collect()
    }
}
