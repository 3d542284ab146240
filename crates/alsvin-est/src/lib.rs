//! `alsvin-est` — measurement grouping, shot allocation and estimators.
//!
//! Research utilities for Variational Quantum Algorithms: partition a
//! Hamiltonian into simultaneously-measurable frames, distribute a finite
//! measurement budget over them, and estimate expectation values (or
//! risk-averse objectives) from sampled bitstrings.
//!
//! # Pipeline
//!
//! ```text
//!   PauliSum ──group_greedily──→ frames ──→ EstimationTasks
//!       │                                       │
//!       │                        perform_context_selection
//!       │                                       │
//!       └──estimate_nmeas_for_frames     allocate_shots_*
//!                                               │
//!                                 EstimateExpectationValues::estimate
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use alsvin_est::grouping::group_greedily;
//! use alsvin_est::operators::{PauliSum, PauliTerm};
//! use alsvin_est::shot_allocation::estimate_nmeas_for_frames;
//!
//! // Transverse-field Ising model: H = -J·Z₀Z₁ - h·X₀ - h·X₁
//! let h = PauliSum::from_terms(vec![
//!     PauliTerm::zz(0, 1, -1.0),
//!     PauliTerm::x(0, -0.5),
//!     PauliTerm::x(1, -0.5),
//! ]);
//!
//! let frames = group_greedily(&h);
//! assert_eq!(frames.len(), 2); // ZZ alone; the two X terms share a frame
//!
//! let (k2, n_terms, shares) = estimate_nmeas_for_frames(&frames, None).unwrap();
//! assert_eq!(n_terms, 3);
//! assert!(k2 > 0.0);
//! assert_eq!(shares.len(), 2);
//! ```

pub mod ansatz;
pub mod context;
pub mod cvar;
pub mod error;
pub mod estimator;
pub mod fourier;
pub mod gibbs;
pub mod grouping;
pub mod operators;
pub mod shot_allocation;
pub mod task;

pub use ansatz::{Ansatz, HardwareEfficientAnsatz};
pub use context::{
    context_selection_circuit, expectation_values_for_frame, perform_context_selection,
};
pub use cvar::CvarEstimator;
pub use error::{EstError, EstResult};
pub use estimator::{AveragingEstimator, EstimateExpectationValues};
pub use fourier::{convert_u_v_to_gamma_beta, perturb_params_randomly};
pub use gibbs::GibbsObjectiveEstimator;
pub use grouping::{group_greedily, group_individually};
pub use operators::{ExpectationValues, PauliOp, PauliString, PauliSum, PauliTerm};
pub use shot_allocation::{
    allocate_shots_proportionally, allocate_shots_uniformly, estimate_nmeas_for_frames,
};
pub use task::EstimationTask;
