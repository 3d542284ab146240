//! Parametrized circuit ansätze.

use alsvin_ir::{Circuit, QubitId};

use crate::error::{EstError, EstResult};

/// A parametrized quantum circuit template.
pub trait Ansatz {
    /// Width of the generated circuits.
    fn num_qubits(&self) -> u32;

    /// Number of free parameters the template expects.
    fn num_params(&self) -> usize;

    /// Generate the circuit for a concrete parameter vector.
    ///
    /// Fails with [`EstError::ParamCountMismatch`] when the parameter count
    /// is wrong.
    fn circuit(&mut self, params: &[f64]) -> EstResult<Circuit>;
}

/// One slot of the gate layout template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutOp {
    /// Ry rotation taking the parameter at `param`.
    Ry { qubit: u32, param: usize },
    /// Entangling CNOT.
    Cx { control: u32, target: u32 },
}

/// Hardware-efficient ansatz: per layer, one Ry rotation on every qubit
/// followed by a linear CNOT entangling ladder.
///
/// The gate layout is derived from `num_qubits` and `num_layers` and built
/// lazily; every setter that changes one of those fields clears the cached
/// layout so the next [`circuit`](Ansatz::circuit) call rebuilds it.
#[derive(Debug, Clone)]
pub struct HardwareEfficientAnsatz {
    num_qubits: u32,
    num_layers: usize,
    /// Cached gate/parameter-slot template; `None` when stale.
    layout: Option<Vec<LayoutOp>>,
}

impl HardwareEfficientAnsatz {
    /// Create an ansatz for the given width and depth.
    pub fn new(num_qubits: u32, num_layers: usize) -> Self {
        Self {
            num_qubits,
            num_layers,
            layout: None,
        }
    }

    /// Number of layers.
    pub fn num_layers(&self) -> usize {
        self.num_layers
    }

    /// Change the number of layers, invalidating the cached layout.
    pub fn set_num_layers(&mut self, num_layers: usize) {
        self.num_layers = num_layers;
        self.layout = None;
    }

    /// Change the circuit width, invalidating the cached layout.
    pub fn set_num_qubits(&mut self, num_qubits: u32) {
        self.num_qubits = num_qubits;
        self.layout = None;
    }

    fn layout(&mut self) -> &[LayoutOp] {
        if self.layout.is_none() {
            let mut ops = vec![];
            let mut param = 0;
            for _ in 0..self.num_layers {
                for q in 0..self.num_qubits {
                    ops.push(LayoutOp::Ry { qubit: q, param });
                    param += 1;
                }
                for q in 0..self.num_qubits.saturating_sub(1) {
                    ops.push(LayoutOp::Cx {
                        control: q,
                        target: q + 1,
                    });
                }
            }
            self.layout = Some(ops);
        }
        self.layout.as_deref().unwrap_or(&[])
    }

    #[cfg(test)]
    fn is_cached(&self) -> bool {
        self.layout.is_some()
    }
}

impl Ansatz for HardwareEfficientAnsatz {
    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn num_params(&self) -> usize {
        self.num_qubits as usize * self.num_layers
    }

    fn circuit(&mut self, params: &[f64]) -> EstResult<Circuit> {
        if params.len() != self.num_params() {
            return Err(EstError::ParamCountMismatch {
                expected: self.num_params(),
                got: params.len(),
            });
        }

        let num_qubits = self.num_qubits;
        let mut circuit = Circuit::with_size("hardware_efficient", num_qubits, 0);
        for op in self.layout().to_vec() {
            match op {
                LayoutOp::Ry { qubit, param } => {
                    circuit.ry(params[param], QubitId(qubit))?;
                }
                LayoutOp::Cx { control, target } => {
                    circuit.cx(QubitId(control), QubitId(target))?;
                }
            }
        }
        Ok(circuit)
    }
}
