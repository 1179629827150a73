//! Closed-form steady-state solver.
//!
//! This module provides the numerical core of the crate.
//!
//! ## Phasor analysis
//!
//! In sinusoidal steady state every element of the series loop carries the
//! same current, so the loop reduces to a single complex impedance:
//!
//! ```text
//! Z = R + j(ωL - 1/(ωC))
//! ```
//!
//! where:
//! - |Z| sets the current amplitude I0 = E0/|Z|
//! - arg(Z) is the phase φ by which the current lags the source voltage
//! - the power factor cos(φ) = R/|Z| scales the average power
//!
//! The time-domain waveforms are then sampled directly from the
//! sinusoids; no differential equation is integrated.

mod circuit_solver;
mod solution;
mod window;

pub use circuit_solver::{CircuitSolver, SolverConfig};
pub use solution::{CircuitCharacter, CircuitSolution, Waveforms, RESONANCE_TOLERANCE};
pub use window::{linspace, WaveformWindow};

/// Default waveform window length in seconds.
pub const DEFAULT_WINDOW_DURATION: f64 = 0.1;

/// Default number of waveform samples.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
