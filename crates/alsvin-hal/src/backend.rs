//! Backend trait.

use alsvin_ir::Circuit;

use crate::error::HalResult;
use crate::result::Measurements;

/// Trait for measurement backends.
///
/// A backend executes a circuit repeatedly and returns the sampled
/// bitstrings. The call is blocking: there is no job lifecycle, queueing, or
/// retry here — a backend failure surfaces directly as a [`HalResult`] error.
///
/// # Contract
///
/// - `execute()` MUST sample every qubit of the circuit register, so the
///   returned bitstrings have length `circuit.num_qubits()`.
/// - `execute()` MUST return exactly `shots` recorded observations on
///   success (`measurements.total_shots() == shots`).
/// - Implementations MUST NOT retain state between calls that affects
///   subsequent results.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Largest circuit width this backend accepts.
    fn max_qubits(&self) -> u32;

    /// Execute `circuit` for `shots` repetitions and collect the outcomes.
    fn execute(&self, circuit: &Circuit, shots: u64) -> HalResult<Measurements>;
}
