//! Structural tests for QFT synthesis.

use phasor_algo::{AlgoError, Qft};
use proptest::prelude::*;

fn hadamards(circuit: &phasor_ir::Circuit) -> usize {
    circuit.count_ops(|i| i.name() == "h")
}

fn rotations(circuit: &phasor_ir::Circuit) -> usize {
    circuit.count_ops(|i| i.name() == "cp")
}

fn swaps(circuit: &phasor_ir::Circuit) -> usize {
    circuit.count_ops(|i| i.name() == "swap")
}

/// Expected CP count: distances `1..=n-1-level` survive the skip rule,
/// and distance `d` pairs `n-d` qubit couples.
fn expected_rotations(n: u32, level: u32) -> usize {
    (1..=n.saturating_sub(1 + level))
        .map(|d| (n - d) as usize)
        .sum()
}

// ---------------------------------------------------------------------------
// Gate-count structure
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn gate_counts_match_closed_form(n in 1u32..=8) {
        let circuit = Qft::new(n).build().unwrap();
        prop_assert_eq!(hadamards(&circuit), n as usize);
        prop_assert_eq!(rotations(&circuit), (n * (n - 1) / 2) as usize);
        prop_assert_eq!(swaps(&circuit), 0);
    }

    #[test]
    fn approximate_gate_counts_match_closed_form(n in 1u32..=8, level in 0u32..8) {
        prop_assume!(level < n);
        let circuit = Qft::new(n).with_approximation_level(level).build().unwrap();
        prop_assert_eq!(hadamards(&circuit), n as usize);
        prop_assert_eq!(rotations(&circuit), expected_rotations(n, level));
    }

    #[test]
    fn inverse_mirrors_forward_counts(n in 1u32..=8) {
        let forward = Qft::new(n).with_swaps(true).build().unwrap();
        let inverse = Qft::new(n).inverse().with_swaps(true).build().unwrap();
        prop_assert_eq!(hadamards(&forward), hadamards(&inverse));
        prop_assert_eq!(rotations(&forward), rotations(&inverse));
        prop_assert_eq!(swaps(&forward), swaps(&inverse));
        prop_assert_eq!(swaps(&forward), (n / 2) as usize);
    }
}

#[test]
fn approximation_monotonically_reduces_rotations() {
    let n = 6;
    let mut previous = usize::MAX;
    for level in 0..n {
        let circuit = Qft::new(n).with_approximation_level(level).build().unwrap();
        let count = rotations(&circuit);
        assert!(count < previous || (count == previous && count == 0));
        previous = count;
    }
    // Maximum level leaves only the Hadamard column.
    assert_eq!(previous, 0);
}

#[test]
fn approximation_level_one_drops_longest_distance_only() {
    let exact = Qft::new(5).build().unwrap();
    let approx = Qft::new(5).with_approximation_level(1).build().unwrap();
    // Distance n-1 occurs exactly once.
    assert_eq!(rotations(&exact) - rotations(&approx), 1);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_qubits_rejected_before_allocation() {
    let err = Qft::new(0).build().unwrap_err();
    assert!(matches!(err, AlgoError::InvalidConfiguration(_)));
}

#[test]
fn approximation_level_must_stay_below_width() {
    assert!(Qft::new(4).with_approximation_level(3).build().is_ok());
    assert!(matches!(
        Qft::new(4).with_approximation_level(4).build(),
        Err(AlgoError::InvalidConfiguration(_))
    ));
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

#[test]
fn default_labels_distinguish_direction() {
    assert_eq!(Qft::new(3).build().unwrap().name(), "QFT (3)");
    assert_eq!(Qft::new(3).inverse().build().unwrap().name(), "QFT† (3)");
    assert_eq!(
        Qft::new(3).with_label("my_qft").build().unwrap().name(),
        "my_qft"
    );
}
