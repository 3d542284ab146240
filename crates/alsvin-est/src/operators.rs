//! Pauli operator data structures.
//!
//! An operator is a sum of weighted Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (I, X, Y, Z) and c_k ∈ ℝ.  [`PauliSum`] keeps terms in insertion order
//! and combines terms with identical Pauli strings, so equivalent sums built
//! in the same order compare equal.
//!
//! # Example
//!
//! ```rust
//! use alsvin_est::operators::{PauliOp, PauliString, PauliSum, PauliTerm};
//!
//! // H = -1.0·Z₀Z₁  +  0.5·X₀
//! let h = PauliSum::from_terms(vec![
//!     PauliTerm::new(-1.0, PauliString::from_ops(vec![(0, PauliOp::Z), (1, PauliOp::Z)])),
//!     PauliTerm::new(0.5, PauliString::from_ops(vec![(0, PauliOp::X)])),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! assert!(!h.is_ising());
//! ```

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identity factors
/// omitted.  Qubits not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Construct a PauliString from an iterator of (qubit, op) pairs.
    ///
    /// Identity factors are dropped; the remaining ops are sorted by qubit.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// The identity string.
    pub fn identity() -> Self {
        Self { ops: vec![] }
    }

    /// Return the non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// True if there are no non-identity factors.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }

    /// True if every factor is Z.
    pub fn is_ising(&self) -> bool {
        self.ops.iter().all(|(_, op)| *op == PauliOp::Z)
    }

    /// The same support measured in the computational basis: every
    /// non-identity factor replaced by Z.
    pub fn to_ising(&self) -> Self {
        Self {
            ops: self.ops.iter().map(|&(q, _)| (q, PauliOp::Z)).collect(),
        }
    }
}

/// A single weighted Pauli term: `coeff · string`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub string: PauliString,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(coeff: f64, string: PauliString) -> Self {
        Self { coeff, string }
    }

    /// Shorthand: constant (identity) term.
    pub fn constant(coeff: f64) -> Self {
        Self::new(coeff, PauliString::identity())
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::Z)]))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        Self::new(
            coeff,
            PauliString::from_ops([(q0, PauliOp::Z), (q1, PauliOp::Z)]),
        )
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::X)]))
    }

    /// Shorthand: single-qubit Y term.
    pub fn y(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::Y)]))
    }
}

/// A sum-of-Pauli-strings operator.
///
/// Terms are kept in first-insertion order.  Invariant: no two stored terms
/// share a Pauli string — inserting a term whose string already appears sums
/// the coefficients in place, and a term whose combined coefficient reaches
/// exactly zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PauliSum {
    terms: Vec<PauliTerm>,
}

impl PauliSum {
    /// The empty operator.
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    /// Create from a list of terms, combining like terms.
    pub fn from_terms(terms: impl IntoIterator<Item = PauliTerm>) -> Self {
        let mut sum = Self::new();
        for term in terms {
            sum.push(term);
        }
        sum
    }

    /// A constant operator `c·I`.
    pub fn constant(coeff: f64) -> Self {
        Self::from_terms([PauliTerm::constant(coeff)])
    }

    /// Insert a term, combining with an existing term of the same string.
    pub fn push(&mut self, term: PauliTerm) {
        if let Some(existing) = self.terms.iter_mut().find(|t| t.string == term.string) {
            existing.coeff += term.coeff;
            if existing.coeff == 0.0 {
                let string = term.string;
                self.terms.retain(|t| t.string != string);
            }
        } else {
            self.terms.push(term);
        }
    }

    /// All terms, in first-insertion order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of absolute coefficients, Σ |c_k|.
    pub fn weight_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// The minimum number of qubits required to represent this operator.
    ///
    /// Returns 0 if the operator is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.string.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// True if every term contains only Z and identity factors.
    pub fn is_ising(&self) -> bool {
        self.terms.iter().all(|t| t.string.is_ising())
    }

    /// True if every term is an identity term.
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|t| t.string.is_identity())
    }

    /// Energy of a single measured bitstring under an Ising operator.
    ///
    /// Each Z factor contributes +1 for `'0'` and −1 for `'1'` at its qubit's
    /// character position; identity terms contribute their coefficient.
    /// Callers must hold the Ising invariant and supply a bitstring covering
    /// the operator's support; both are checked at the measurement boundary
    /// by the estimators and frame post-processing.
    pub fn ising_energy(&self, bitstring: &str) -> f64 {
        let bits = bitstring.as_bytes();
        self.terms
            .iter()
            .map(|t| {
                let parity: f64 = t
                    .string
                    .ops()
                    .iter()
                    .map(|&(q, _)| {
                        if bits.get(q as usize) == Some(&b'1') {
                            -1.0
                        } else {
                            1.0
                        }
                    })
                    .product();
                t.coeff * parity
            })
            .sum()
    }
}

impl FromIterator<PauliTerm> for PauliSum {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}

impl Add for PauliSum {
    type Output = PauliSum;

    fn add(self, rhs: PauliSum) -> PauliSum {
        let mut out = self;
        for term in rhs.terms {
            out.push(term);
        }
        out
    }
}

impl Add<PauliTerm> for PauliSum {
    type Output = PauliSum;

    fn add(self, rhs: PauliTerm) -> PauliSum {
        let mut out = self;
        out.push(rhs);
        out
    }
}

impl Mul<f64> for PauliSum {
    type Output = PauliSum;

    fn mul(self, rhs: f64) -> PauliSum {
        PauliSum {
            terms: self
                .terms
                .into_iter()
                .map(|t| PauliTerm::new(t.coeff * rhs, t.string))
                .collect(),
        }
    }
}

impl Mul<PauliSum> for f64 {
    type Output = PauliSum;

    fn mul(self, rhs: PauliSum) -> PauliSum {
        rhs * self
    }
}

/// An ordered sequence of real expectation estimates, one per frame or term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpectationValues {
    values: Vec<f64>,
}

impl ExpectationValues {
    /// Wrap a sequence of values.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// A single-valued sequence.
    pub fn single(value: f64) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// The values in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if there are no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at position `i`, if present.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Sum of all values.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}
