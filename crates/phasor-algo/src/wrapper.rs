//! Gate-wrapper adapters.
//!
//! Package a built QFT/QPE circuit as a single opaque gate for
//! composition into larger circuits. Measurements are stripped (an
//! opaque sub-gate must stay unitary) and barrier/debug instrumentation
//! is forced off regardless of the underlying builder's configuration:
//! visualization artifacts have no meaning once opacified.

use phasor_ir::{Circuit, Gate};

use crate::error::AlgoResult;
use crate::qft::Qft;
use crate::qpe::Qpe;

/// Reusable-gate form of the [`Qft`] builder.
#[derive(Debug, Clone)]
pub struct QftGate {
    inner: Qft,
}

impl QftGate {
    /// Wrap a QFT configuration. Barriers and debug output are disabled
    /// on the wrapped configuration.
    pub fn new(qft: Qft) -> Self {
        Self {
            inner: qft.barriers_off(),
        }
    }

    /// Build the transform and package it as an opaque gate.
    pub fn build(&self) -> AlgoResult<Gate> {
        let circuit = self.inner.build()?;
        // The QFT never measures, so only the (already disabled) barriers
        // would need stripping; `to_gate` drops any that slipped through.
        Ok(circuit.to_gate(self.inner.label())?)
    }
}

impl From<Qft> for QftGate {
    fn from(qft: Qft) -> Self {
        Self::new(qft)
    }
}

/// Reusable-gate form of the [`Qpe`] builder.
///
/// The wrapped circuit has its classical register and measurement
/// instructions removed; what remains is the unitary estimation block
/// (superposition, controlled rotations, inverse QFT).
#[derive(Debug, Clone)]
pub struct QpeGate {
    inner: Qpe,
}

impl QpeGate {
    /// Wrap a QPE configuration. Barriers and debug output are disabled
    /// on the wrapped configuration.
    pub fn new(qpe: Qpe) -> Self {
        Self {
            inner: qpe.barriers_off(),
        }
    }

    /// Build the estimation circuit, strip measurements, and package the
    /// remainder as an opaque gate over control ⊗ phase qubits.
    pub fn build(&self) -> AlgoResult<Gate> {
        let circuit = self.inner.build()?;

        let mut unitary = Circuit::new(self.inner.label());
        let qubits: Vec<_> = (0..circuit.num_qubits())
            .map(|_| unitary.add_qubit())
            .collect();
        for (_, inst) in circuit.dag().topological_ops() {
            if inst.is_measure() || inst.is_barrier() {
                continue;
            }
            let mut remapped = inst.clone();
            remapped.qubits = inst.qubits.iter().map(|q| qubits[q.0 as usize]).collect();
            unitary.apply(remapped)?;
        }

        Ok(unitary.to_gate(self.inner.label())?)
    }
}

impl From<Qpe> for QpeGate {
    fn from(qpe: Qpe) -> Self {
        Self::new(qpe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasor_ir::QubitId;

    #[test]
    fn test_qft_gate_is_clean() {
        let gate = QftGate::new(Qft::new(3).with_swaps(true).with_barriers(true))
            .build()
            .unwrap();
        let opaque = gate.as_opaque().unwrap();
        assert_eq!(opaque.num_qubits, 3);
        assert!(opaque.definition.iter().all(|i| !i.is_measure()));
        assert!(opaque.definition.iter().all(|i| !i.is_barrier()));
        // 3 Hadamards + 3 rotations + 1 swap.
        assert_eq!(opaque.definition.len(), 7);
    }

    #[test]
    fn test_qpe_gate_strips_measurements() {
        let gate = QpeGate::new(Qpe::new(3, 0.125).with_init_phase(true).with_barriers(true))
            .build()
            .unwrap();
        let opaque = gate.as_opaque().unwrap();
        assert_eq!(opaque.num_qubits, 4);
        assert!(opaque.definition.iter().all(|i| !i.is_measure()));
        assert!(opaque.definition.iter().all(|i| !i.is_barrier()));
    }

    #[test]
    fn test_wrapped_gate_appends_into_larger_circuit() {
        let gate = QftGate::new(Qft::new(2)).build().unwrap();

        let mut circuit = Circuit::with_size("outer", 4, 0);
        circuit.append(gate, [QubitId(1), QubitId(3)]).unwrap();
        assert_eq!(circuit.dag().num_ops(), 1);
    }

    #[test]
    fn test_wrapper_propagates_invalid_configuration() {
        assert!(QftGate::new(Qft::new(0)).build().is_err());
        assert!(QpeGate::new(Qpe::new(0, 0.5)).build().is_err());
    }
}
