//! Quantum Phase Estimation circuit composition.
//!
//! Estimates the eigenphase of a toy unitary `U = P(2πθ)` by preparing a
//! uniform superposition over a counting register, applying controlled
//! powers `U^{2^k}`, and rotating the counting register back through the
//! inverse QFT. Measuring the counting register then yields an integer
//! `m` with `m / 2^c ≈ θ (mod 1)`, exact whenever `θ·2^c` is an integer.

use phasor_ir::{Circuit, render};
use std::f64::consts::PI;
use tracing::debug;

use crate::error::{AlgoError, AlgoResult};
use crate::qft::Qft;

/// Quantum Phase Estimation circuit builder.
///
/// Composes three registers: `control` (counting), `phase` (holds the
/// eigenstate) and the classical `result` register receiving the
/// counting-register measurement.
#[derive(Debug, Clone)]
pub struct Qpe {
    /// Counting-register width; determines estimation precision.
    control_qubits: u32,
    /// Phase-register width.
    phase_qubits: u32,
    /// Phase of the simulated unitary, as a fraction of a full turn.
    theta: f64,
    /// Flip the first phase qubit into the |1⟩ eigenstate before estimating.
    init_phase: bool,
    /// Insert visualization barriers between QPE stages.
    insert_barrier: bool,
    /// Log the finished diagram at debug level.
    debug: bool,
    /// Optional label overriding the default circuit name.
    label: Option<String>,
}

impl Qpe {
    /// Construct a QPE builder for a `control_qubits`-bit estimate of
    /// `theta`, with a single-qubit phase register by default.
    pub fn new(control_qubits: u32, theta: f64) -> Self {
        Self {
            control_qubits,
            phase_qubits: 1,
            theta,
            init_phase: false,
            insert_barrier: false,
            debug: false,
            label: None,
        }
    }

    /// Set the phase-register width.
    #[must_use]
    pub fn with_phase_qubits(mut self, phase_qubits: u32) -> Self {
        self.phase_qubits = phase_qubits;
        self
    }

    /// Initialize the first phase qubit to |1⟩ — the known eigenstate of
    /// the toy unitary `U = P(2πθ)` with eigenvalue `e^{2πiθ}`.
    #[must_use]
    pub fn with_init_phase(mut self, init_phase: bool) -> Self {
        self.init_phase = init_phase;
        self
    }

    /// Insert visualization barriers between QPE stages.
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
        self.label
            .clone()
            .unwrap_or_else(|| format!("QPE ({} x {})", self.control_qubits, self.phase_qubits))
    }

    /// Counting-register width.
    pub fn control_qubits(&self) -> u32 {
        self.control_qubits
    }

    /// Phase-register width.
    pub fn phase_qubits(&self) -> u32 {
        self.phase_qubits
    }

    pub(crate) fn barriers_off(mut self) -> Self {
        self.insert_barrier = false;
        self.debug = false;
        self
    }

    /// Assemble the full phase-estimation circuit.
    pub fn build(&self) -> AlgoResult<Circuit> {
        self.validate()?;

        let mut circuit = Circuit::new(self.label());
        let control = circuit.add_qreg("control", self.control_qubits);
        let phase = circuit.add_qreg("phase", self.phase_qubits);
        let result = circuit.add_creg("result", self.control_qubits);
        debug!(
            control_qubits = self.control_qubits,
            phase_qubits = self.phase_qubits,
            theta = self.theta,
            "composing QPE circuit"
        );

        // Known eigenstate for the toy unitary: U|1⟩ = e^{2πiθ}|1⟩.
        if self.init_phase {
            circuit.x(phase[0])?;
        }

        // Estimation basis: uniform superposition over the counting register.
        for &q in &control {
            circuit.h(q)?;
        }
        self.add_barrier(&mut circuit)?;

        // Controlled powers of U: qubit k controls U^{2^k}, realized as a
        // CP(2πθ·2^k) onto each phase qubit.
        for (k, &ctl) in control.iter().enumerate() {
            let angle = 2.0 * PI * self.theta * 2f64.powi(k as i32);
            for &ph in &phase {
                circuit.cp(angle, ctl, ph)?;
            }
            self.add_barrier(&mut circuit)?;
        }

        // Rotate the counting register back to the computational basis.
        let inverse_qft = Qft::new(self.control_qubits)
            .inverse()
            .with_swaps(true)
            .build()?;
        circuit.compose(&inverse_qft, &control)?;
        self.add_barrier(&mut circuit)?;

        for (&q, &c) in control.iter().zip(&result) {
            circuit.measure(q, c)?;
        }

        if self.debug {
            debug!("\n{}", render::draw(&circuit));
        }

        Ok(circuit)
    }

    fn validate(&self) -> AlgoResult<()> {
        if self.control_qubits < 1 || self.phase_qubits < 1 {
            return Err(AlgoError::InvalidConfiguration(
                "both control and phase registers must have at least 1 qubit".into(),
            ));
        }
        Ok(())
    }

    fn add_barrier(&self, circuit: &mut Circuit) -> AlgoResult<()> {
        if self.insert_barrier {
            circuit.barrier_all()?;
        }
        Ok(())
    }
}
