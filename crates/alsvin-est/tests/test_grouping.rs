//! Tests for qubit-wise commuting frame grouping.

use alsvin_est::grouping::{group_greedily, group_individually};
use alsvin_est::operators::{PauliOp, PauliString, PauliSum, PauliTerm};

fn tfim() -> PauliSum {
    // H = -Z₀Z₁ - Z₁Z₂ - 0.5·X₀ - 0.5·X₁ - 0.5·X₂
    PauliSum::from_terms(vec![
        PauliTerm::zz(0, 1, -1.0),
        PauliTerm::zz(1, 2, -1.0),
        PauliTerm::x(0, -0.5),
        PauliTerm::x(1, -0.5),
        PauliTerm::x(2, -0.5),
    ])
}

#[test]
fn greedy_merges_compatible_terms() {
    let frames = group_greedily(&tfim());
    // All-Z terms share one frame, all-X terms share another.
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].n_terms(), 2);
    assert!(frames[0].is_ising());
    assert_eq!(frames[1].n_terms(), 3);
}

#[test]
fn greedy_preserves_all_terms() {
    let h = tfim();
    let frames = group_greedily(&h);
    let total: usize = frames.iter().map(|f| f.n_terms()).sum();
    assert_eq!(total, h.n_terms());
    let weight: f64 = frames.iter().map(|f| f.weight_sum()).sum();
    assert!((weight - h.weight_sum()).abs() < 1e-12);
}

#[test]
fn greedy_splits_conflicting_bases() {
    // Z₀ and X₀ disagree on qubit 0 and must not share a frame.
    let h = PauliSum::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::x(0, 1.0)]);
    let frames = group_greedily(&h);
    assert_eq!(frames.len(), 2);
}

#[test]
fn greedy_accepts_disjoint_supports() {
    // X₀ and Z₁ touch different qubits: one frame suffices.
    let h = PauliSum::from_terms(vec![PauliTerm::x(0, 1.0), PauliTerm::z(1, 1.0)]);
    let frames = group_greedily(&h);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].n_terms(), 2);
}

#[test]
fn greedy_identity_joins_first_frame() {
    let h = PauliSum::from_terms(vec![
        PauliTerm::constant(-0.5),
        PauliTerm::z(0, 1.0),
        PauliTerm::x(0, 1.0),
    ]);
    let frames = group_greedily(&h);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].n_terms(), 2);
    assert!(frames[0].terms()[0].string.is_identity());
}

#[test]
fn greedy_is_order_dependent() {
    // X₀Y₁ placed first absorbs X₀ and Y₁; Z₀Z₁ opens a second frame.
    let h = PauliSum::from_terms(vec![
        PauliTerm::new(
            1.0,
            PauliString::from_ops([(0, PauliOp::X), (1, PauliOp::Y)]),
        ),
        PauliTerm::x(0, 1.0),
        PauliTerm::y(1, 1.0),
        PauliTerm::zz(0, 1, 1.0),
    ]);
    let frames = group_greedily(&h);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].n_terms(), 3);
    assert_eq!(frames[1].n_terms(), 1);
}

#[test]
fn greedy_empty_operator_yields_no_frames() {
    assert!(group_greedily(&PauliSum::new()).is_empty());
}

#[test]
fn individual_grouping_is_singletons() {
    let h = tfim();
    let frames = group_individually(&h);
    assert_eq!(frames.len(), h.n_terms());
    for (frame, term) in frames.iter().zip(h.terms()) {
        assert_eq!(frame.n_terms(), 1);
        assert_eq!(&frame.terms()[0], term);
    }
}

#[test]
fn greedy_never_worse_than_individual() {
    let h = tfim();
    assert!(group_greedily(&h).len() <= group_individually(&h).len());
}
