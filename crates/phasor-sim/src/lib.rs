//! Statevector simulator for Phasor circuits.
//!
//! Executes [`phasor_ir::Circuit`] values by dense statevector evolution.
//! Opaque gates are expanded recursively through their definitions, so
//! circuits built from packaged QFT/QPE gates simulate without any
//! pre-flattening step.
//!
//! # Example
//!
//! ```
//! use phasor_ir::{Circuit, ClbitId, QubitId};
//! use phasor_sim::Simulator;
//!
//! let mut circuit = Circuit::with_size("coin", 1, 1);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//!
//! let counts = Simulator::new().counts(&circuit, 100).unwrap();
//! assert_eq!(counts.values().sum::<u32>(), 100);
//! ```

pub mod error;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use simulator::{Counts, Simulator};
pub use statevector::Statevector;
