//! Estimation task records.

use serde::{Deserialize, Serialize};

use alsvin_ir::Circuit;

use crate::operators::PauliSum;

/// One unit of estimation work: measure `operator` on the state prepared by
/// `circuit`, using `number_of_shots` repetitions.
///
/// Tasks are immutable records. Shot allocation produces new tasks via
/// [`with_shots`](EstimationTask::with_shots); the operator and circuit of an
/// existing task are never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationTask {
    /// The operator (frame) to estimate.
    pub operator: PauliSum,
    /// The state-preparation circuit.
    pub circuit: Circuit,
    /// Number of measurement shots assigned to this task.
    pub number_of_shots: u64,
}

impl EstimationTask {
    /// Create a new task.
    pub fn new(operator: PauliSum, circuit: Circuit, number_of_shots: u64) -> Self {
        Self {
            operator,
            circuit,
            number_of_shots,
        }
    }

    /// Copy of this task with a replaced shot count.
    pub fn with_shots(&self, number_of_shots: u64) -> Self {
        Self {
            operator: self.operator.clone(),
            circuit: self.circuit.clone(),
            number_of_shots,
        }
    }
}
