//! Expectation-value estimator contract.

use alsvin_hal::Backend;

use crate::context::expectation_values_for_frame;
use crate::error::{EstError, EstResult};
use crate::operators::ExpectationValues;
use crate::task::EstimationTask;

/// Capability contract for expectation-value estimators.
///
/// An estimator consumes a backend and a batch of estimation tasks and
/// produces exactly one [`ExpectationValues`] per task, in task order.
/// Implementations never mutate the input tasks, and given a fixed set of
/// measurements the result is deterministic.
pub trait EstimateExpectationValues {
    /// Estimate expectation values for every task.
    fn estimate(
        &self,
        backend: &dyn Backend,
        tasks: &[EstimationTask],
    ) -> EstResult<Vec<ExpectationValues>>;
}

/// Plain sample-mean estimator.
///
/// Executes each task and averages the per-term bit parities, yielding one
/// value per operator term. Operators must be in measured (Ising) form, as
/// produced by [`perform_context_selection`](crate::context::perform_context_selection).
#[derive(Debug, Clone, Copy, Default)]
pub struct AveragingEstimator;

impl EstimateExpectationValues for AveragingEstimator {
    fn estimate(
        &self,
        backend: &dyn Backend,
        tasks: &[EstimationTask],
    ) -> EstResult<Vec<ExpectationValues>> {
        // Contract errors surface before the first backend call.
        for task in tasks {
            if !task.operator.is_ising() {
                return Err(EstError::NonIsingOperator(format!("{:?}", task.operator)));
            }
        }

        tasks
            .iter()
            .map(|task| {
                let measurements = backend.execute(&task.circuit, task.number_of_shots)?;
                expectation_values_for_frame(&measurements, &task.operator)
            })
            .collect()
    }
}
