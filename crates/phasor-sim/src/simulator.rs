//! Shot-based circuit execution.

use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

use phasor_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Measurement histogram keyed by classical-register bitstring.
///
/// Keys read most-significant clbit first, so key `"001"` for a
/// three-bit register means `result[0] = 1`.
pub type Counts = FxHashMap<String, u32>;

/// Local statevector simulator.
///
/// Memory grows as 2^n, so circuits are capped at a configurable width.
pub struct Simulator {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl Simulator {
    /// Create a new simulator with default settings.
    pub fn new() -> Self {
        Self { max_qubits: 26 }
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    /// Evolve |0...0⟩ through every gate in the circuit.
    ///
    /// Measurements and barriers are skipped; the returned state is the
    /// pre-measurement statevector.
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        self.check_size(circuit)?;

        let start = Instant::now();
        let mut sv = Statevector::new(circuit.num_qubits());
        for (_, inst) in circuit.dag().topological_ops() {
            sv.apply(inst);
        }
        debug!(
            circuit = circuit.name(),
            qubits = circuit.num_qubits(),
            elapsed = ?start.elapsed(),
            "statevector evolution complete"
        );
        Ok(sv)
    }

    /// Execute the circuit for `shots` repetitions and histogram the
    /// classical-register readout.
    ///
    /// All terminal measurements observed in topological order are honored;
    /// clbits that are never written read as 0.
    pub fn counts(&self, circuit: &Circuit, shots: u32) -> SimResult<Counts> {
        self.check_size(circuit)?;

        let num_clbits = circuit.num_clbits();
        let mut readout: Vec<Option<usize>> = vec![None; num_clbits];
        for (_, inst) in circuit.dag().topological_ops() {
            if inst.is_measure() {
                readout[inst.clbits[0].0 as usize] = Some(inst.qubits[0].0 as usize);
            }
        }

        let sv = self.run(circuit)?;
        debug!(
            circuit = circuit.name(),
            shots,
            clbits = num_clbits,
            "sampling measurement outcomes"
        );

        let mut counts = Counts::default();
        for _ in 0..shots {
            let outcome = sv.sample();
            let bitstring: String = (0..num_clbits)
                .rev()
                .map(|k| match readout[k] {
                    Some(qubit) if outcome >> qubit & 1 == 1 => '1',
                    _ => '0',
                })
                .collect();
            *counts.entry(bitstring).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn check_size(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(SimError::CircuitTooLarge(format!(
                "circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }
        Ok(())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasor_ir::{ClbitId, QubitId};

    #[test]
    fn test_bell_counts() {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.measure(QubitId(1), ClbitId(1)).unwrap();

        let counts = Simulator::new().counts(&circuit, 1000).unwrap();
        let correlated =
            counts.get("00").copied().unwrap_or(0) + counts.get("11").copied().unwrap_or(0);
        assert_eq!(correlated, 1000);
    }

    #[test]
    fn test_unmeasured_clbits_read_zero() {
        let mut circuit = Circuit::with_size("partial", 1, 2);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();

        let counts = Simulator::new().counts(&circuit, 10).unwrap();
        assert_eq!(counts.get("01").copied().unwrap_or(0), 10);
    }

    #[test]
    fn test_too_many_qubits() {
        let circuit = Circuit::with_size("wide", 10, 0);
        let sim = Simulator::with_max_qubits(5);
        assert!(matches!(
            sim.run(&circuit),
            Err(SimError::CircuitTooLarge(_))
        ));
    }
}
