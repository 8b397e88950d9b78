//! Phasor Algorithm Builders
//!
//! Parameterized circuit generators for the Quantum Fourier Transform and
//! Quantum Phase Estimation, built on the [`phasor_ir`] circuit IR.
//!
//! Each builder is a pure description: configure it with `with_*`
//! methods, then call `build()` to validate the configuration and emit a
//! fresh [`phasor_ir::Circuit`]. Builds are synchronous, deterministic
//! and side-effect-free (optional diagram logging aside), so builders may
//! be shared and invoked concurrently without coordination.
//!
//! # Example: 3-bit estimate of θ = 1/8
//!
//! ```rust
//! use phasor_algo::Qpe;
//!
//! let circuit = Qpe::new(3, 0.125).with_init_phase(true).build().unwrap();
//! assert_eq!(circuit.num_qubits(), 4); // 3 counting + 1 phase
//! assert_eq!(circuit.num_clbits(), 3);
//! ```
//!
//! # Example: reusable inverse-QFT gate
//!
//! ```rust
//! use phasor_algo::{Qft, QftGate};
//! use phasor_ir::{Circuit, QubitId};
//!
//! let gate = QftGate::new(Qft::new(3).inverse().with_swaps(true))
//!     .build()
//!     .unwrap();
//!
//! let mut circuit = Circuit::with_size("host", 5, 0);
//! circuit.append(gate, [QubitId(0), QubitId(1), QubitId(2)]).unwrap();
//! ```

pub mod error;
pub mod qft;
pub mod qpe;
pub mod wrapper;

pub use error::{AlgoError, AlgoResult};
pub use qft::Qft;
pub use qpe::Qpe;
pub use wrapper::{QftGate, QpeGate};
