//! Measurement results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A multiset of observed measurement bitstrings.
///
/// Bitstrings are stored as counts: repeated execution of one circuit
/// accumulates into the same key. Character `i` of a bitstring is the
/// observed value of qubit `i` (`'0'` or `'1'`), so the first character is
/// qubit 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    /// Observed bitstring → occurrence count.
    counts: FxHashMap<String, u64>,
    /// Width of the measured register.
    num_qubits: u32,
}

impl Measurements {
    /// Create an empty result set for a register of the given width.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            counts: FxHashMap::default(),
            num_qubits,
        }
    }

    /// Record `count` observations of `bitstring`, accumulating.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrence count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Iterate over (bitstring, count) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(b, &c)| (b.as_str(), c))
    }

    /// Total number of recorded shots.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Width of the measured register.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of distinct observed bitstrings.
    pub fn num_outcomes(&self) -> usize {
        self.counts.len()
    }

    /// True if no shots were recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The most frequently observed bitstring, if any.
    ///
    /// Ties are broken lexicographically so the result is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .map(|(b, &c)| (b.as_str(), c))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut m = Measurements::new(2);
        m.insert("01", 3);
        m.insert("01", 2);
        m.insert("10", 1);

        assert_eq!(m.get("01"), 5);
        assert_eq!(m.get("10"), 1);
        assert_eq!(m.get("11"), 0);
        assert_eq!(m.total_shots(), 6);
        assert_eq!(m.num_outcomes(), 2);
    }

    #[test]
    fn test_most_frequent() {
        let mut m = Measurements::new(1);
        m.insert("0", 7);
        m.insert("1", 3);
        assert_eq!(m.most_frequent(), Some(("0", 7)));
    }

    #[test]
    fn test_empty() {
        let m = Measurements::new(3);
        assert!(m.is_empty());
        assert_eq!(m.total_shots(), 0);
        assert_eq!(m.most_frequent(), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut m = Measurements::new(2);
        m.insert("00", 4);
        m.insert("11", 6);

        let json = serde_json::to_string(&m).unwrap();
        let back: Measurements = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.num_qubits(), 2);
    }
}
