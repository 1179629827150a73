//! # RLC Core
//!
//! Steady-state analysis of a series RLC circuit driven by a sinusoidal
//! voltage source.
//!
//! This library provides:
//! - Validated circuit parameters (R, L, C, E0, f)
//! - A closed-form solver for impedance, phase, resonance and power
//! - Sampled voltage, current and power waveforms
//! - Display data for front ends: schematic, charts and summary
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Input parameters and their validation
//! - [`components`] - Element models (resistor, inductor, capacitor, AC source)
//! - [`solver`] - Phasor solution and waveform sampling
//! - [`presentation`] - Schematic, chart and summary data for renderers
//! - [`output`] - Text, JSON and CSV writers (CLI only)
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use rlc_core::{CircuitParameters, CircuitSolver};
//!
//! let params = CircuitParameters::new(10.0, 0.1, 0.001, 10.0, 50.0)?;
//! let solution = CircuitSolver::new().solve(&params);
//!
//! assert!(solution.impedance >= params.resistance());
//! assert_eq!(solution.waveforms.len(), 1000);
//! # Ok::<(), rlc_core::RlcError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! rlc --resistance 10 --inductance 0.1 --capacitance 0.001 --amplitude 10 --frequency 50
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmRlcSolver } from 'rlc_core';
//!
//! const sol = new WasmRlcSolver(10, 0.1, 0.001, 10, 50);
//! console.log(sol.impedance, sol.phase_degrees);
//! ```
//!
//! ## Solution Method
//!
//! For the drive frequency f the solver computes:
//!
//! 1. ω = 2πf, X_L = ωL, X_C = 1/(ωC)
//! 2. |Z| = √(R² + (X_L - X_C)²) and φ = atan2(X_L - X_C, R)
//! 3. I0 = E0/|Z|, Q = ωL/R, f0 = 1/(2π√(LC)), P = ½·E0·I0·cos(φ)
//! 4. v(t) = E0·sin(ωt), i(t) = I0·sin(ωt - φ), p(t) = v(t)·i(t)
//!
//! The waveforms are sampled over a fixed 0.1 s window by default. That
//! window is not derived from f, so drives below 10 Hz show less than one
//! cycle; use [`SolverConfig::with_periods`] to size the window from the
//! drive period instead.

pub mod circuit;
pub mod components;
pub mod error;
pub mod presentation;
pub mod solver;

#[cfg(feature = "cli")]
pub mod output;

// Re-export main types for convenience
pub use circuit::{CircuitParameters, Parameter};
pub use error::{Result, RlcError};
pub use solver::{
    CircuitCharacter, CircuitSolution, CircuitSolver, SolverConfig, WaveformWindow, Waveforms,
    DEFAULT_SAMPLE_COUNT, DEFAULT_WINDOW_DURATION,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmRlcSolver;

/// Solve a parameter set with the default waveform window.
pub fn solve(params: &CircuitParameters) -> CircuitSolution {
    CircuitSolver::new().solve(params)
}
