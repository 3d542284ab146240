//! Measurement context selection.
//!
//! A frame of qubit-wise commuting terms is measured by rotating every
//! touched qubit into the computational basis first:
//!
//!   X → H,   Y → H · S†,   Z → (nothing)
//!
//! after which each term's expectation value is the signed parity of the
//! measured bits over the term's support.

use rustc_hash::FxHashMap;

use alsvin_hal::Measurements;
use alsvin_ir::{Circuit, QubitId};

use crate::error::{EstError, EstResult};
use crate::operators::{ExpectationValues, PauliOp, PauliSum, PauliTerm};
use crate::task::EstimationTask;

/// Build the basis-rotation circuit for one frame.
///
/// The frame must already be internally qubit-wise commuting — that is the
/// caller's contract, established by the grouping functions. The consensus
/// assignment is taken first-occurrence-wins and is not re-validated here.
pub fn context_selection_circuit(frame: &PauliSum) -> EstResult<Circuit> {
    let mut context: FxHashMap<u32, PauliOp> = FxHashMap::default();
    for term in frame.terms() {
        for &(q, op) in term.string.ops() {
            context.entry(q).or_insert(op);
        }
    }

    let mut assignments: Vec<(u32, PauliOp)> = context.into_iter().collect();
    assignments.sort_by_key(|(q, _)| *q);

    let mut circuit = Circuit::with_size("context_selection", frame.min_qubits(), 0);
    for (q, op) in assignments {
        let qid = QubitId(q);
        match op {
            PauliOp::X => {
                circuit.h(qid)?;
            }
            PauliOp::Y => {
                circuit.sdg(qid)?;
                circuit.h(qid)?;
            }
            PauliOp::Z | PauliOp::I => {}
        }
    }
    Ok(circuit)
}

/// The frame's operator as it reads after basis rotation: every non-identity
/// factor becomes Z on the same qubit, coefficients unchanged.
fn measurement_operator(frame: &PauliSum) -> PauliSum {
    frame
        .terms()
        .iter()
        .map(|t| PauliTerm::new(t.coeff, t.string.to_ising()))
        .collect()
}

/// Append each task's basis-rotation circuit and rewrite its operator to the
/// measured (Ising) form.
///
/// Shot counts carry over unchanged; input tasks are not modified.
pub fn perform_context_selection(tasks: &[EstimationTask]) -> EstResult<Vec<EstimationTask>> {
    tasks
        .iter()
        .map(|task| {
            let rotation = context_selection_circuit(&task.operator)?;
            Ok(EstimationTask::new(
                measurement_operator(&task.operator),
                task.circuit.then(&rotation),
                task.number_of_shots,
            ))
        })
        .collect()
}

/// Reinterpret raw measurements as per-term expectation values.
///
/// For each term, every observed bitstring contributes its frequency times
/// the term's bit-parity sign over the term's support; identity terms
/// evaluate to their coefficient. The frame must be in measured (Ising)
/// form, as produced by [`perform_context_selection`], and must fit inside
/// the measured register.
pub fn expectation_values_for_frame(
    measurements: &Measurements,
    frame: &PauliSum,
) -> EstResult<ExpectationValues> {
    if !frame.is_ising() {
        return Err(EstError::NonIsingOperator(format!("{frame:?}")));
    }
    if frame.min_qubits() > measurements.num_qubits() {
        return Err(EstError::MeasurementWidthMismatch {
            needed: frame.min_qubits(),
            measured: measurements.num_qubits(),
        });
    }
    let total = measurements.total_shots();
    if total == 0 {
        return Err(EstError::EmptyMeasurements);
    }
    let total = total as f64;

    let values = frame
        .terms()
        .iter()
        .map(|term| {
            if term.string.is_identity() {
                return term.coeff;
            }
            let single = PauliSum::from_terms([term.clone()]);
            measurements
                .iter()
                .map(|(bits, count)| single.ising_energy(bits) * count as f64 / total)
                .sum()
        })
        .collect::<Vec<f64>>();

    Ok(ExpectationValues::new(values))
}
