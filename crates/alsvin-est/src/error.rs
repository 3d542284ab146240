//! Error types for the estimation crate.

use thiserror::Error;

/// Errors produced by grouping, allocation and estimation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstError {
    /// A shot budget was negative.
    #[error("Shot count must be non-negative, got {0}")]
    InvalidShotCount(i64),

    /// An estimator parameter α is outside its valid range.
    #[error("Invalid alpha for {estimator}: {alpha}")]
    InvalidAlpha {
        /// Name of the estimator rejecting the value.
        estimator: &'static str,
        /// The rejected value.
        alpha: f64,
    },

    /// An operator contains X or Y factors where only Z and identity are
    /// measurable without a basis rotation.
    #[error("Operator is not an Ising operator (Z/identity only): {0}")]
    NonIsingOperator(String),

    /// An input parameter vector has the wrong length: ansatz parameters,
    /// or a prior-expectation vector not matching its task/term count.
    #[error("Expected {expected} parameters, got {got}")]
    ParamCountMismatch {
        /// Number of parameters the operation requires.
        expected: usize,
        /// Number of parameters supplied.
        got: usize,
    },

    /// A Fourier amplitude vector did not interleave (u, v) pairs.
    #[error("Fourier amplitude vector must have even length, got {0}")]
    UnpairedFourierAmplitudes(usize),

    /// Post-processing was asked to average over zero recorded shots.
    #[error("Measurements contain no shots")]
    EmptyMeasurements,

    /// Measurements cover fewer qubits than the operator acts on.
    #[error("Operator needs {needed} qubits but measurements cover {measured}")]
    MeasurementWidthMismatch {
        /// Qubits the operator's support requires.
        needed: u32,
        /// Width of the measured register.
        measured: u32,
    },

    /// Circuit construction failed.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] alsvin_ir::IrError),

    /// Backend execution failed; passed through unmodified.
    #[error("Backend error: {0}")]
    Hal(#[from] alsvin_hal::HalError),
}

/// Result type for estimation operations.
pub type EstResult<T> = Result<T, EstError>;
