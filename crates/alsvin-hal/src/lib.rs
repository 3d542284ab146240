//! Alsvin Backend Abstraction Layer
//!
//! This crate provides a unified interface for executing quantum circuits on
//! measurement backends, so estimators can run unchanged against simulators
//! or hardware adapters.
//!
//! # Overview
//!
//! - A common [`Backend`] trait: one blocking `execute(circuit, shots)` call
//!   returning sampled [`Measurements`]
//! - [`Measurements`]: a multiset of observed bitstrings with query helpers
//! - [`HalError`] for backend-side failures
//!
//! The execution model is deliberately synchronous: a backend owns no
//! resources across calls and reports each failure directly to the caller.
//!
//! # Example
//!
//! ```ignore
//! use alsvin_hal::Backend;
//! use alsvin_adapter_sim::SimulatorBackend;
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
//! circuit.measure_all()?;
//!
//! let backend = SimulatorBackend::new();
//! let measurements = backend.execute(&circuit, 1000)?;
//! if let Some((bitstring, count)) = measurements.most_frequent() {
//!     println!("most frequent: {bitstring} ({count} times)");
//! }
//! ```

pub mod backend;
pub mod error;
pub mod result;

pub use backend::Backend;
pub use error::{HalError, HalResult};
pub use result::Measurements;
