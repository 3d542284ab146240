//! Simulator backend implementation.

use std::time::Instant;

use tracing::debug;

use alsvin_hal::{Backend, HalError, HalResult, Measurements};
use alsvin_ir::Circuit;

use crate::statevector::Statevector;

/// Local statevector simulator backend.
///
/// Evolves the statevector once per circuit, then samples the requested
/// number of shots from the final distribution. The circuit IR has no
/// mid-circuit measurement, so a single evolution is exact.
pub struct SimulatorBackend {
    /// Backend name.
    name: String,
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self {
            name: "simulator".into(),
            max_qubits: 20,
        }
    }

    /// Create a simulator with a custom qubit cap.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            max_qubits,
        }
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_qubits(&self) -> u32 {
        self.max_qubits
    }

    fn execute(&self, circuit: &Circuit, shots: u64) -> HalResult<Measurements> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "circuit has {} qubits but simulator only supports {}",
                num_qubits, self.max_qubits
            )));
        }

        let start = Instant::now();
        debug!(num_qubits, shots, "starting simulation");

        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let mut measurements = Measurements::new(num_qubits as u32);
        let mut rng = rand::thread_rng();
        for _ in 0..shots {
            let outcome = sv.sample(&mut rng);
            measurements.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        debug!(elapsed = ?start.elapsed(), "simulation completed");
        Ok(measurements)
    }
}
