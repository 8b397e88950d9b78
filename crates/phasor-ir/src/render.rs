//! ASCII circuit rendering for terminal diagnostics.
//!
//! One column per instruction, one row per qubit wire. This is a
//! debugging surface only: the drawing has no effect on circuit
//! semantics and is not meant to be parsed.

use crate::circuit::Circuit;
use crate::gate::{GateKind, StandardGate};
use crate::instruction::{Instruction, InstructionKind};

/// Render a circuit as an ASCII diagram.
pub fn draw(circuit: &Circuit) -> String {
    let num_qubits = circuit.num_qubits();
    if num_qubits == 0 {
        return String::from("(empty circuit)");
    }

    let labels: Vec<String> = circuit
        .qubits()
        .iter()
        .map(|q| format!("{q}: "))
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut rows: Vec<String> = labels
        .into_iter()
        .map(|l| format!("{l:>label_width$}"))
        .collect();

    for (_, inst) in circuit.dag().topological_ops() {
        let cells = column_cells(inst, num_qubits);
        let width = cells.iter().map(String::len).max().unwrap_or(1) + 2;
        for (row, cell) in rows.iter_mut().zip(cells) {
            let pad = width - cell.len();
            let left = pad / 2;
            row.push_str(&"-".repeat(left + 1));
            row.push_str(&cell);
            row.push_str(&"-".repeat(pad - left + 1));
        }
    }

    rows.join("\n")
}

/// Build the per-qubit cell strings for one instruction column.
fn column_cells(inst: &Instruction, num_qubits: usize) -> Vec<String> {
    let mut cells = vec![String::from("-"); num_qubits];

    match &inst.kind {
        InstructionKind::Barrier => {
            for &q in &inst.qubits {
                cells[q.0 as usize] = String::from("░");
            }
        }
        InstructionKind::Measure => {
            for (&q, &c) in inst.qubits.iter().zip(&inst.clbits) {
                cells[q.0 as usize] = format!("[M->{}]", c.0);
            }
        }
        InstructionKind::Gate(gate) => {
            let rows: Vec<usize> = inst.qubits.iter().map(|q| q.0 as usize).collect();
            match &gate.kind {
                GateKind::Standard(StandardGate::Swap) => {
                    cells[rows[0]] = String::from("X");
                    cells[rows[1]] = String::from("X");
                }
                GateKind::Standard(StandardGate::CX) => {
                    cells[rows[0]] = String::from("*");
                    cells[rows[1]] = String::from("[X]");
                }
                GateKind::Standard(StandardGate::CZ) => {
                    cells[rows[0]] = String::from("*");
                    cells[rows[1]] = String::from("*");
                }
                GateKind::Standard(StandardGate::CP(theta)) => {
                    cells[rows[0]] = String::from("*");
                    cells[rows[1]] = format!("[p({theta:.3})]");
                }
                GateKind::Standard(StandardGate::P(theta)) => {
                    cells[rows[0]] = format!("[p({theta:.3})]");
                }
                GateKind::Standard(g) => {
                    cells[rows[0]] = format!("[{}]", g.name());
                }
                GateKind::Opaque(_) => {
                    for &r in &rows {
                        cells[r] = format!("[{}]", gate.name());
                    }
                }
            }
            // Vertical connector marks for wires strictly between the
            // outermost qubits of a multi-qubit gate.
            if rows.len() > 1 {
                let lo = *rows.iter().min().unwrap();
                let hi = *rows.iter().max().unwrap();
                for (r, cell) in cells.iter_mut().enumerate() {
                    if r > lo && r < hi && cell == "-" {
                        *cell = String::from("|");
                    }
                }
            }
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;
    use std::f64::consts::PI;

    #[test]
    fn test_draw_empty() {
        let circuit = Circuit::new("empty");
        assert_eq!(draw(&circuit), "(empty circuit)");
    }

    #[test]
    fn test_draw_contains_gates_and_labels() {
        let mut circuit = Circuit::new("qft");
        let q = circuit.add_qreg("q", 3);
        circuit.h(q[2]).unwrap();
        circuit.cp(PI / 2.0, q[2], q[1]).unwrap();
        circuit.swap(q[0], q[2]).unwrap();

        let art = draw(&circuit);
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("q[0]:"));
        assert!(art.contains("[h]"));
        assert!(art.contains("[p(1.571)]"));
        assert!(art.contains('X'));
    }

    #[test]
    fn test_draw_measure_marks_target_bit() {
        let mut circuit = Circuit::with_size("m", 1, 1);
        circuit.h(QubitId(0)).unwrap();
        circuit
            .measure(QubitId(0), crate::qubit::ClbitId(0))
            .unwrap();

        assert!(draw(&circuit).contains("[M->0]"));
    }
}
