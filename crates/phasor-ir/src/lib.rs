//! Phasor Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Phasor: the circuit sink the QFT/QPE builders append to.
//!
//! # Overview
//!
//! The circuit IR uses a DAG (Directed Acyclic Graph) representation
//! internally; per-wire instruction order is total and append-only. The
//! high-level [`Circuit`] API provides a convenient builder pattern over
//! named quantum and classical registers.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CP, Swap, …) and
//!   [`OpaqueGate`] for circuits packaged as single reusable units
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **DAG**: [`CircuitDag`] for the internal graph representation
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Rendering**: [`render::draw`] for ASCII diagrams
//!
//! # Example: a two-qubit phase kick
//!
//! ```rust
//! use phasor_ir::{Circuit, QubitId};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::new("kick");
//! let q = circuit.add_qreg("q", 2);
//!
//! circuit.h(q[1]).unwrap();
//! circuit.cp(PI / 2.0, q[1], q[0]).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod render;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex, WireId};
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, OpaqueGate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
