//! Partitioning operators into simultaneously-measurable frames.
//!
//! Two Pauli terms commute qubit-wise when, on every qubit, their
//! non-identity factors agree. All terms of such a frame can be measured
//! with one shared basis-rotation circuit, so grouping reduces the number of
//! distinct circuits a Hamiltonian estimation needs.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::operators::{PauliOp, PauliSum, PauliTerm};

struct Frame {
    terms: Vec<PauliTerm>,
    /// Consensus non-identity assignment per qubit.
    context: FxHashMap<u32, PauliOp>,
}

impl Frame {
    fn accepts(&self, term: &PauliTerm) -> bool {
        term.string
            .ops()
            .iter()
            .all(|(q, op)| self.context.get(q).is_none_or(|c| c == op))
    }

    fn merge(&mut self, term: PauliTerm) {
        for &(q, op) in term.string.ops() {
            self.context.insert(q, op);
        }
        self.terms.push(term);
    }
}

/// Partition an operator into qubit-wise commuting frames, greedily.
///
/// Terms are visited in their stored order; each term joins the first
/// existing frame whose accumulated per-qubit assignment it does not
/// conflict with, or opens a new frame. The result therefore depends on the
/// term order of the input — no canonicalization is applied, and callers
/// needing reproducibility must fix their term order.
///
/// An empty operator yields no frames.
pub fn group_greedily(operator: &PauliSum) -> Vec<PauliSum> {
    let mut frames: Vec<Frame> = vec![];

    for term in operator.terms() {
        match frames.iter_mut().find(|f| f.accepts(term)) {
            Some(frame) => frame.merge(term.clone()),
            None => {
                let mut frame = Frame {
                    terms: vec![],
                    context: FxHashMap::default(),
                };
                frame.merge(term.clone());
                frames.push(frame);
            }
        }
    }

    debug!(
        n_terms = operator.n_terms(),
        n_frames = frames.len(),
        "greedy grouping"
    );

    frames
        .into_iter()
        .map(|f| PauliSum::from_terms(f.terms))
        .collect()
}

/// Trivial grouping: every term becomes its own singleton frame.
///
/// Baseline comparator for [`group_greedily`]; never merges anything.
pub fn group_individually(operator: &PauliSum) -> Vec<PauliSum> {
    operator
        .terms()
        .iter()
        .map(|t| PauliSum::from_terms([t.clone()]))
        .collect()
}
