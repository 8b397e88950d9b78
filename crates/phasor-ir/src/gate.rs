//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;

/// Standard gates with known semantics.
///
/// Rotation angles are concrete `f64` radians. The QFT/QPE builders only
/// ever emit numeric angles, so there is no symbolic parameter layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Phase gate.
    P(f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate.
    CP(f64),
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::P(_) => "p",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::CP(_) => "cp",
            StandardGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::P(_) => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::CP(_) | StandardGate::Swap => 2,
        }
    }

    /// Get the rotation angle, if this is a parameterized gate.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::P(theta) | StandardGate::CP(theta) => Some(*theta),
            _ => None,
        }
    }
}

/// A circuit packaged as a single opaque, appendable unit.
///
/// The definition is a flat instruction sequence in local qubit
/// coordinates `0..num_qubits`. An opaque gate is unitary by
/// construction: [`crate::Circuit::to_gate`] refuses circuits that
/// contain measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueGate {
    /// Display label for the gate.
    pub label: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// Defining instruction sequence, local qubit coordinates.
    pub definition: Vec<Instruction>,
}

impl OpaqueGate {
    /// Create a new opaque gate from a definition sequence.
    pub fn new(
        label: impl Into<String>,
        num_qubits: u32,
        definition: Vec<Instruction>,
    ) -> Self {
        Self {
            label: label.into(),
            num_qubits,
            definition,
        }
    }
}

/// A quantum gate, either standard or opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// An opaque circuit-defined gate.
    Opaque(OpaqueGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Opaque(g) => &g.label,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Opaque(g) => g.num_qubits,
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label overriding the default display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from an opaque gate.
    pub fn opaque(gate: OpaqueGate) -> Self {
        Self {
            kind: GateKind::Opaque(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the display name of this gate.
    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.kind.name())
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }

    /// Get the opaque definition, if this is an opaque gate.
    pub fn as_opaque(&self) -> Option<&OpaqueGate> {
        match &self.kind {
            GateKind::Opaque(g) => Some(g),
            GateKind::Standard(_) => None,
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<OpaqueGate> for Gate {
    fn from(gate: OpaqueGate) -> Self {
        Gate::opaque(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CP(PI / 4.0).num_qubits(), 2);
        assert_eq!(StandardGate::Swap.num_qubits(), 2);

        assert_eq!(StandardGate::H.angle(), None);
        assert_eq!(StandardGate::CP(PI / 4.0).angle(), Some(PI / 4.0));
    }

    #[test]
    fn test_gate_creation() {
        let h = Gate::standard(StandardGate::H);
        assert_eq!(h.name(), "h");
        assert_eq!(h.num_qubits(), 1);
        assert!(h.label.is_none());

        let h_labeled = Gate::standard(StandardGate::H).with_label("my_hadamard");
        assert_eq!(h_labeled.name(), "my_hadamard");
    }

    #[test]
    fn test_opaque_gate() {
        let opaque = OpaqueGate::new("QFT (2)", 2, vec![]);
        let gate = Gate::opaque(opaque);
        assert_eq!(gate.name(), "QFT (2)");
        assert_eq!(gate.num_qubits(), 2);
        assert!(gate.as_opaque().is_some());
    }
}
