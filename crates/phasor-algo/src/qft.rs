//! Quantum Fourier Transform circuit synthesis.
//!
//! Maps computational-basis index `j` onto the Fourier-basis amplitude
//! distribution `e^{2πijk/2^n}`. The gate order is load-bearing: each
//! controlled-phase rotation fails to commute with the Hadamards of
//! later-processed qubits, so the traversal direction and sign convention
//! below follow directly from the transform's definition.
//!
//! # Structure (forward, n = 3)
//!
//! ```text
//! q[0]: ---------------*----------*--[h]--X
//! q[1]: -------*--[p(π/2)]--[h]---|-------|
//! q[2]: --[h]--|--[p(π/4)]----[p(π/2)]----X
//! ```
//!
//! The inverse transform is the reverse-order, sign-negated adjoint;
//! swaps (when requested) move to the front so that forward-then-inverse
//! composes to the identity.

use phasor_ir::{Circuit, render};
use std::f64::consts::PI;
use tracing::debug;

use crate::error::{AlgoError, AlgoResult};

/// Configurable (inverse) Quantum Fourier Transform generator.
///
/// A pure description of the transform: `build` has no side effects
/// beyond optional diagram logging when `debug` is set, and every call
/// allocates a fresh circuit.
#[derive(Debug, Clone)]
pub struct Qft {
    /// Number of qubits the transform acts on.
    num_qubits: u32,
    /// Build the inverse (adjoint) transform.
    inverse: bool,
    /// Reverse qubit order with swaps at the boundary of the rotation ladder.
    do_swaps: bool,
    /// How many of the smallest-angle CP gates to skip (depth/fidelity trade).
    approximation_level: u32,
    /// Insert visualization barriers between per-qubit blocks.
    insert_barrier: bool,
    /// Log the finished diagram at debug level.
    debug: bool,
    /// Optional label overriding the default circuit name.
    label: Option<String>,
}

impl Qft {
    /// Construct a forward QFT over `num_qubits` qubits with defaults:
    /// no swaps, no approximation, no barriers.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            inverse: false,
            do_swaps: false,
            approximation_level: 0,
            insert_barrier: false,
            debug: false,
            label: None,
        }
    }

    /// Build the inverse (adjoint) transform instead of the forward one.
    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Include the qubit-order-reversing swap network.
    #[must_use]
    pub fn with_swaps(mut self, do_swaps: bool) -> Self {
        self.do_swaps = do_swaps;
        self
    }

    /// Skip the `level` smallest-angle rotation distances.
    #[must_use]
    pub fn with_approximation_level(mut self, level: u32) -> Self {
        self.approximation_level = level;
        self
    }

    /// Insert visualization barriers between logical blocks.
    #[must_use]
    pub fn with_barriers(mut self, insert_barrier: bool) -> Self {
        self.insert_barrier = insert_barrier;
        self
    }

    /// Log the constructed diagram at debug level.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the circuit label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The circuit/gate label in effect.
    pub fn label(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            if self.inverse {
                format!("QFT† ({})", self.num_qubits)
            } else {
                format!("QFT ({})", self.num_qubits)
            }
        })
    }

    /// Number of qubits the transform acts on.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Whether this is the inverse transform.
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub(crate) fn barriers_off(mut self) -> Self {
        self.insert_barrier = false;
        self.debug = false;
        self
    }

    /// Synthesise the (approximate) QFT or inverse QFT circuit.
    ///
    /// Emits exactly `num_qubits` Hadamards and at most
    /// `n(n−1)/2` controlled-phase gates (fewer under approximation).
    pub fn build(&self) -> AlgoResult<Circuit> {
        self.validate()?;
        let n = self.num_qubits;

        let mut circuit = Circuit::new(self.label());
        let q = circuit.add_qreg("q", n);
        debug!(
            num_qubits = n,
            inverse = self.inverse,
            approximation_level = self.approximation_level,
            "synthesising QFT circuit"
        );

        // Pre-swaps reverse the output order before the inverse ladder, so
        // that forward (post-swapped) and inverse cancel exactly.
        if self.inverse && self.do_swaps {
            for (a, b) in self.swap_pairs() {
                circuit.swap(q[a as usize], q[b as usize])?;
            }
            self.add_barrier(&mut circuit)?;
        }

        for control in self.qubit_order() {
            circuit.h(q[control as usize])?;

            for target in self.targets_for(control) {
                let distance = control.abs_diff(target);
                if self.should_skip(distance) {
                    continue;
                }

                let angle = PI * 0.5f64.powi(distance as i32);
                if self.inverse {
                    circuit.cp(-angle, q[target as usize], q[control as usize])?;
                } else {
                    circuit.cp(angle, q[control as usize], q[target as usize])?;
                }
            }

            self.add_barrier(&mut circuit)?;
        }

        if !self.inverse && self.do_swaps {
            for (a, b) in self.swap_pairs() {
                circuit.swap(q[a as usize], q[b as usize])?;
            }
        }

        if self.debug {
            debug!("\n{}", render::draw(&circuit));
        }

        Ok(circuit)
    }

    fn validate(&self) -> AlgoResult<()> {
        if self.num_qubits < 1 {
            return Err(AlgoError::InvalidConfiguration(
                "number of qubits must be a positive integer".into(),
            ));
        }
        if self.approximation_level >= self.num_qubits {
            return Err(AlgoError::InvalidConfiguration(format!(
                "approximation level {} out of range for {} qubits (valid: 0..{})",
                self.approximation_level, self.num_qubits, self.num_qubits
            )));
        }
        Ok(())
    }

    /// Per-qubit processing order: most-significant first for the forward
    /// transform, ascending for the inverse.
    fn qubit_order(&self) -> Vec<u32> {
        if self.inverse {
            (0..self.num_qubits).collect()
        } else {
            (0..self.num_qubits).rev().collect()
        }
    }

    /// Rotation targets for a given control qubit: lower-indexed qubits in
    /// forward mode, higher-indexed in inverse mode, nearest first.
    fn targets_for(&self, control: u32) -> Vec<u32> {
        if self.inverse {
            (control + 1..self.num_qubits).collect()
        } else {
            (0..control).rev().collect()
        }
    }

    /// Skip rule for approximate synthesis: the `approximation_level`
    /// largest index distances carry the smallest rotation angles and are
    /// dropped first.
    fn should_skip(&self, distance: u32) -> bool {
        distance > self.num_qubits - 1 - self.approximation_level
    }

    /// Symmetric qubit pairs reversing the register's bit order.
    fn swap_pairs(&self) -> Vec<(u32, u32)> {
        (0..self.num_qubits / 2)
            .map(|i| (i, self.num_qubits - 1 - i))
            .collect()
    }

    fn add_barrier(&self, circuit: &mut Circuit) -> AlgoResult<()> {
        if self.insert_barrier {
            circuit.barrier_all()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasor_ir::StandardGate;

    fn cp_angles(circuit: &Circuit) -> Vec<f64> {
        circuit
            .dag()
            .topological_ops()
            .filter_map(|(_, i)| match i.as_gate().map(|g| &g.kind) {
                Some(phasor_ir::GateKind::Standard(StandardGate::CP(theta))) => Some(*theta),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_qubit_is_one_hadamard() {
        let circuit = Qft::new(1).with_swaps(true).build().unwrap();
        assert_eq!(circuit.dag().num_ops(), 1);
        assert_eq!(circuit.count_ops(|i| i.name() == "h"), 1);
        // A single qubit has no swap partner.
        assert_eq!(circuit.count_ops(|i| i.name() == "swap"), 0);
    }

    #[test]
    fn test_forward_gate_sequence_n2() {
        let circuit = Qft::new(2).build().unwrap();
        let names: Vec<_> = circuit
            .dag()
            .topological_ops()
            .map(|(_, i)| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["h", "cp", "h"]);
    }

    #[test]
    fn test_angle_at_distance_two_is_quarter_pi() {
        // control = 3, target = 1 → distance 2 → π/4.
        let circuit = Qft::new(4).build().unwrap();
        let angles = cp_angles(&circuit);
        assert!(angles.iter().any(|a| (a - PI / 4.0).abs() < 1e-12));
        // Forward mode emits only positive angles.
        assert!(angles.iter().all(|a| *a > 0.0));
    }

    #[test]
    fn test_inverse_negates_angles() {
        let circuit = Qft::new(3).inverse().build().unwrap();
        let angles = cp_angles(&circuit);
        assert_eq!(angles.len(), 3);
        assert!(angles.iter().all(|a| *a < 0.0));
    }

    #[test]
    fn test_swap_placement() {
        // Forward: swaps trail. Inverse: swaps lead.
        let forward = Qft::new(4).with_swaps(true).build().unwrap();
        let f_names: Vec<_> = forward
            .dag()
            .topological_ops()
            .map(|(_, i)| i.name().to_string())
            .collect();
        assert_eq!(&f_names[f_names.len() - 2..], &["swap", "swap"]);

        let inverse = Qft::new(4).inverse().with_swaps(true).build().unwrap();
        let i_names: Vec<_> = inverse
            .dag()
            .topological_ops()
            .map(|(_, i)| i.name().to_string())
            .collect();
        assert_eq!(&i_names[..2], &["swap", "swap"]);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            Qft::new(0).build(),
            Err(AlgoError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Qft::new(3).with_approximation_level(3).build(),
            Err(AlgoError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_barriers_do_not_change_gate_counts() {
        let plain = Qft::new(4).build().unwrap();
        let barred = Qft::new(4).with_barriers(true).build().unwrap();
        assert_eq!(
            plain.count_ops(|i| i.is_gate()),
            barred.count_ops(|i| i.is_gate())
        );
        assert!(barred.count_ops(|i| i.is_barrier()) > 0);
    }
}
