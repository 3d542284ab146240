//! Tests for Pauli operator data structures.

use alsvin_est::operators::{ExpectationValues, PauliOp, PauliString, PauliSum, PauliTerm};

// ---------------------------------------------------------------------------
// PauliString
// ---------------------------------------------------------------------------

#[test]
fn pauli_string_drops_identity() {
    let ps = PauliString::from_ops([(0, PauliOp::I), (1, PauliOp::Z)]);
    assert_eq!(ps.ops().len(), 1);
    assert_eq!(ps.ops()[0], (1, PauliOp::Z));
}

#[test]
fn pauli_string_sorted_by_qubit() {
    let ps = PauliString::from_ops([(3, PauliOp::X), (1, PauliOp::Z), (0, PauliOp::Y)]);
    let qubits: Vec<u32> = ps.ops().iter().map(|(q, _)| *q).collect();
    assert_eq!(qubits, vec![0, 1, 3]);
}

#[test]
fn pauli_string_identity_is_empty() {
    let ps = PauliString::identity();
    assert!(ps.is_identity());
    assert_eq!(ps.max_qubit(), None);
    assert!(ps.is_ising());
}

#[test]
fn pauli_string_to_ising_keeps_support() {
    let ps = PauliString::from_ops([(0, PauliOp::X), (2, PauliOp::Y), (5, PauliOp::Z)]);
    assert!(!ps.is_ising());
    let ising = ps.to_ising();
    assert!(ising.is_ising());
    let qubits: Vec<u32> = ising.ops().iter().map(|(q, _)| *q).collect();
    assert_eq!(qubits, vec![0, 2, 5]);
}

// ---------------------------------------------------------------------------
// PauliTerm shorthands
// ---------------------------------------------------------------------------

#[test]
fn term_z_shorthand() {
    let t = PauliTerm::z(3, -0.5);
    assert!((t.coeff - (-0.5)).abs() < 1e-15);
    assert_eq!(t.string.ops(), &[(3, PauliOp::Z)]);
}

#[test]
fn term_zz_shorthand() {
    let t = PauliTerm::zz(1, 0, 2.0);
    assert_eq!(t.string.ops(), &[(0, PauliOp::Z), (1, PauliOp::Z)]);
}

#[test]
fn term_constant_is_identity() {
    let t = PauliTerm::constant(0.25);
    assert!(t.string.is_identity());
}

// ---------------------------------------------------------------------------
// PauliSum
// ---------------------------------------------------------------------------

#[test]
fn sum_combines_like_terms() {
    let h = PauliSum::from_terms(vec![
        PauliTerm::z(0, 1.0),
        PauliTerm::x(1, 0.5),
        PauliTerm::z(0, 0.25),
    ]);
    assert_eq!(h.n_terms(), 2);
    assert!((h.terms()[0].coeff - 1.25).abs() < 1e-15);
}

#[test]
fn sum_drops_cancelled_terms() {
    let mut h = PauliSum::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::x(1, 0.5)]);
    h.push(PauliTerm::z(0, -1.0));
    assert_eq!(h.n_terms(), 1);
    assert_eq!(h.terms()[0].string.ops(), &[(1, PauliOp::X)]);
}

#[test]
fn sum_preserves_insertion_order() {
    let h = PauliSum::from_terms(vec![
        PauliTerm::zz(2, 3, 1.0),
        PauliTerm::z(0, -1.0),
        PauliTerm::constant(0.5),
    ]);
    assert_eq!(h.terms()[0].string.ops().len(), 2);
    assert_eq!(h.terms()[1].string.ops(), &[(0, PauliOp::Z)]);
    assert!(h.terms()[2].string.is_identity());
}

#[test]
fn sum_weight_sum() {
    let h = PauliSum::from_terms(vec![
        PauliTerm::z(0, -1.0),
        PauliTerm::z(1, 0.5),
        PauliTerm::zz(0, 1, -0.25),
    ]);
    assert!((h.weight_sum() - 1.75).abs() < 1e-15);
}

#[test]
fn sum_min_qubits() {
    let h = PauliSum::from_terms(vec![PauliTerm::z(4, 1.0), PauliTerm::x(1, 1.0)]);
    assert_eq!(h.min_qubits(), 5);
    assert_eq!(PauliSum::constant(1.0).min_qubits(), 0);
    assert_eq!(PauliSum::new().min_qubits(), 0);
}

#[test]
fn sum_is_ising() {
    let ising = PauliSum::from_terms(vec![
        PauliTerm::constant(-0.5),
        PauliTerm::z(0, 1.0),
        PauliTerm::zz(0, 1, 0.3),
    ]);
    assert!(ising.is_ising());

    let mixed = PauliSum::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::x(1, 1.0)]);
    assert!(!mixed.is_ising());
}

#[test]
fn sum_add_and_scale() {
    let a = PauliSum::from_terms(vec![PauliTerm::z(0, 1.0)]);
    let b = PauliSum::from_terms(vec![PauliTerm::z(0, 1.0), PauliTerm::z(1, 2.0)]);
    let c = (a + b) * 0.5;
    assert_eq!(c.n_terms(), 2);
    assert!((c.terms()[0].coeff - 1.0).abs() < 1e-15);
    assert!((c.terms()[1].coeff - 1.0).abs() < 1e-15);

    let d = 2.0 * c;
    assert!((d.terms()[1].coeff - 2.0).abs() < 1e-15);
}

// ---------------------------------------------------------------------------
// ising_energy
// ---------------------------------------------------------------------------

#[test]
fn ising_energy_single_z() {
    let h = PauliSum::from_terms(vec![PauliTerm::z(0, 2.0)]);
    assert!((h.ising_energy("0") - 2.0).abs() < 1e-15);
    assert!((h.ising_energy("1") + 2.0).abs() < 1e-15);
}

#[test]
fn ising_energy_parity_of_zz() {
    let h = PauliSum::from_terms(vec![PauliTerm::zz(0, 1, 1.0)]);
    assert!((h.ising_energy("00") - 1.0).abs() < 1e-15);
    assert!((h.ising_energy("11") - 1.0).abs() < 1e-15);
    assert!((h.ising_energy("01") + 1.0).abs() < 1e-15);
    assert!((h.ising_energy("10") + 1.0).abs() < 1e-15);
}

#[test]
fn ising_energy_includes_constant() {
    // H = 0.5·I − Z₀ on |1⟩: 0.5 + 1 = 1.5
    let h = PauliSum::from_terms(vec![PauliTerm::constant(0.5), PauliTerm::z(0, -1.0)]);
    assert!((h.ising_energy("1") - 1.5).abs() < 1e-15);
}

#[test]
fn ising_energy_first_char_is_qubit_zero() {
    let h = PauliSum::from_terms(vec![PauliTerm::z(2, 1.0)]);
    assert!((h.ising_energy("001") + 1.0).abs() < 1e-15);
    assert!((h.ising_energy("100") - 1.0).abs() < 1e-15);
}

// ---------------------------------------------------------------------------
// ExpectationValues
// ---------------------------------------------------------------------------

#[test]
fn expectation_values_accessors() {
    let ev = ExpectationValues::new(vec![0.1, -0.2, 0.3]);
    assert_eq!(ev.len(), 3);
    assert_eq!(ev.get(1), Some(-0.2));
    assert_eq!(ev.get(3), None);
    assert!((ev.sum() - 0.2).abs() < 1e-15);

    let single = ExpectationValues::single(-1.0);
    assert_eq!(single.values(), &[-1.0]);
}
