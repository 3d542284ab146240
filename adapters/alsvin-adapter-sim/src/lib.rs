//! Alsvin local simulator backend.
//!
//! Provides [`SimulatorBackend`], a statevector simulator implementing the
//! [`alsvin_hal::Backend`] trait. Suitable for circuits up to ~20 qubits
//! (limited by memory).
//!
//! # Example
//!
//! ```rust
//! use alsvin_adapter_sim::SimulatorBackend;
//! use alsvin_hal::Backend;
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("plus", 1, 1);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let backend = SimulatorBackend::new();
//! let measurements = backend.execute(&circuit, 100).unwrap();
//! assert_eq!(measurements.total_shots(), 100);
//! ```

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
