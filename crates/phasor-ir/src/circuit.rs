//! High-level circuit builder API.

use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, OpaqueGate, StandardGate};
use crate::instruction::Instruction;
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit.
///
/// This provides a high-level API for building quantum circuits, with
/// convenient methods for common gates and operations. Construction is
/// append-only: instructions are validated and spliced into the DAG in
/// the order they arrive and are never reordered afterwards.
#[derive(Debug)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit, in allocation order.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit, in allocation order.
    clbits: Vec<Clbit>,
    /// The underlying DAG representation.
    dag: CircuitDag,
    /// Counter for generating qubit IDs.
    next_qubit_id: u32,
    /// Counter for generating classical bit IDs.
    next_clbit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            dag: CircuitDag::new(),
            next_qubit_id: 0,
            next_clbit_id: 0,
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.next_qubit_id);
        self.next_qubit_id += 1;
        self.qubits.push(Qubit::new(id));
        self.dag.add_qubit(id);
        id
    }

    /// Add a named quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.next_qubit_id);
            self.next_qubit_id += 1;
            self.qubits.push(Qubit::with_register(id, &name, i));
            self.dag.add_qubit(id);
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.next_clbit_id);
        self.next_clbit_id += 1;
        self.clbits.push(Clbit::new(id));
        self.dag.add_clbit(id);
        id
    }

    /// Add a named classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = ClbitId(self.next_clbit_id);
            self.next_clbit_id += 1;
            self.clbits.push(Clbit::with_register(id, &name, i));
            self.dag.add_clbit(id);
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::T, qubit))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))?;
        Ok(self)
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::two_qubit_gate(
            StandardGate::CX,
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::two_qubit_gate(
            StandardGate::CZ,
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::two_qubit_gate(
            StandardGate::CP(theta),
            control,
            target,
        ))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Append a gate (standard or opaque) to the given qubits.
    pub fn append(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    /// Append a raw instruction.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.dag.apply(instruction)?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.dag.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Compose another circuit's instruction sequence onto the given qubits.
    ///
    /// The sub-circuit's qubits (in allocation order) are mapped one-to-one
    /// onto `qubits`, and its instructions are appended in topological
    /// order. The sub-circuit must be purely quantum: circuits carrying
    /// classical bits cannot be composed through a qubit-only mapping.
    pub fn compose(&mut self, other: &Circuit, qubits: &[QubitId]) -> IrResult<&mut Self> {
        if other.num_qubits() != qubits.len() {
            return Err(IrError::ComposeMismatch {
                name: other.name.clone(),
                sub_qubits: other.num_qubits() as u32,
                mapped: qubits.len() as u32,
            });
        }
        if other.num_clbits() > 0 {
            return Err(IrError::InvalidDag(format!(
                "Cannot compose '{}': sub-circuit carries classical bits",
                other.name
            )));
        }

        let map = other.local_qubit_map();
        for (_, inst) in other.dag.topological_ops() {
            let mut remapped = inst.clone();
            remapped.qubits = inst
                .qubits
                .iter()
                .map(|q| qubits[map[&q.0] as usize])
                .collect();
            self.dag.apply(remapped)?;
        }
        Ok(self)
    }

    /// Package this circuit as a single opaque gate.
    ///
    /// The definition keeps the gate sequence in local qubit coordinates
    /// `0..num_qubits`. Barriers are dropped: they are visualization-only
    /// and have no meaning inside an opaque unit. Circuits containing
    /// measurements are rejected, since an opaque gate must be unitary to
    /// be composable into an arbitrary larger circuit.
    pub fn to_gate(&self, label: impl Into<String>) -> IrResult<Gate> {
        let map = self.local_qubit_map();
        let mut definition = vec![];
        for (_, inst) in self.dag.topological_ops() {
            if inst.is_measure() {
                return Err(IrError::NonUnitaryCircuit(self.name.clone()));
            }
            if inst.is_barrier() {
                continue;
            }
            let mut local = inst.clone();
            local.qubits = inst.qubits.iter().map(|q| QubitId(map[&q.0])).collect();
            definition.push(local);
        }
        Ok(Gate::opaque(OpaqueGate::new(
            label,
            self.num_qubits() as u32,
            definition,
        )))
    }

    /// Map from raw qubit id to position in allocation order.
    fn local_qubit_map(&self) -> rustc_hash::FxHashMap<u32, u32> {
        self.qubits
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.0, i as u32))
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Count instructions matching a predicate, in topological order.
    pub fn count_ops(&self, pred: impl Fn(&Instruction) -> bool) -> usize {
        self.dag.topological_ops().filter(|(_, i)| pred(i)).count()
    }

    /// Get a reference to the underlying DAG.
    pub fn dag(&self) -> &CircuitDag {
        &self.dag
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }
}

impl Clone for Circuit {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            qubits: self.qubits.clone(),
            clbits: self.clbits.clone(),
            dag: self.dag.clone(),
            next_qubit_id: self.next_qubit_id,
            next_clbit_id: self.next_clbit_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn test_add_registers() {
        let mut circuit = Circuit::new("test");
        let qreg = circuit.add_qreg("control", 3);
        let creg = circuit.add_creg("result", 3);

        assert_eq!(qreg.len(), 3);
        assert_eq!(creg.len(), 3);
        assert_eq!(circuit.qubits()[1].register.as_deref(), Some("control"));
        assert_eq!(circuit.clbits()[2].index, Some(2));
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cp(PI / 2.0, QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.depth(), 3); // H, CP, parallel measures
    }

    #[test]
    fn test_compose_remaps_qubits() {
        let mut sub = Circuit::with_size("sub", 2, 0);
        sub.h(QubitId(0)).unwrap();
        sub.cp(PI / 2.0, QubitId(1), QubitId(0)).unwrap();

        let mut outer = Circuit::with_size("outer", 4, 0);
        outer.compose(&sub, &[QubitId(2), QubitId(3)]).unwrap();

        let ops: Vec<_> = outer
            .dag()
            .topological_ops()
            .map(|(_, i)| (i.name().to_string(), i.qubits.clone()))
            .collect();
        assert_eq!(ops[0], ("h".to_string(), vec![QubitId(2)]));
        assert_eq!(ops[1], ("cp".to_string(), vec![QubitId(3), QubitId(2)]));
    }

    #[test]
    fn test_compose_size_mismatch() {
        let sub = Circuit::with_size("sub", 2, 0);
        let mut outer = Circuit::with_size("outer", 4, 0);
        assert!(matches!(
            outer.compose(&sub, &[QubitId(0)]),
            Err(IrError::ComposeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_gate_rejects_measurements() {
        let mut circuit = Circuit::with_size("meas", 1, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();

        assert!(matches!(
            circuit.to_gate("g"),
            Err(IrError::NonUnitaryCircuit(_))
        ));
    }

    #[test]
    fn test_to_gate_drops_barriers() {
        let mut circuit = Circuit::with_size("bar", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.barrier_all().unwrap();
        circuit.swap(QubitId(0), QubitId(1)).unwrap();

        let gate = circuit.to_gate("unit").unwrap();
        let opaque = gate.as_opaque().unwrap();
        assert_eq!(opaque.definition.len(), 2);
        assert!(opaque.definition.iter().all(|i| !i.is_barrier()));
    }

    proptest::proptest! {
        // Gates on a single wire can never parallelize, so the DAG depth
        // must match the instruction count exactly.
        #[test]
        fn prop_single_wire_depth(k in 1usize..40) {
            let mut circuit = Circuit::with_size("wire", 1, 0);
            for _ in 0..k {
                circuit.h(QubitId(0)).unwrap();
            }
            proptest::prop_assert_eq!(circuit.depth(), k);
            proptest::prop_assert_eq!(circuit.dag().num_ops(), k);
        }
    }

    #[test]
    fn test_append_opaque_gate() {
        let mut inner = Circuit::with_size("inner", 2, 0);
        inner.h(QubitId(0)).unwrap();
        inner.cx(QubitId(0), QubitId(1)).unwrap();
        let gate = inner.to_gate("bell_pair").unwrap();

        let mut outer = Circuit::with_size("outer", 3, 0);
        outer.append(gate, [QubitId(1), QubitId(2)]).unwrap();

        assert_eq!(outer.dag().num_ops(), 1);
        let (_, inst) = outer.dag().topological_ops().next().unwrap();
        assert_eq!(inst.name(), "bell_pair");
    }
}
