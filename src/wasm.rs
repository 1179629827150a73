//! WASM bindings for RLC Core.
//!
//! This module provides JavaScript-friendly bindings so a browser UI can
//! drive the solver from its sliders and render the results.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmRlcSolver } from 'rlc_core';
//!
//! await init();
//!
//! // On every slider change:
//! const sol = new WasmRlcSolver(r, l, c, e0, f);
//! plot(sol.time(), sol.voltage(), sol.current());
//! plot(sol.time(), sol.power());
//! drawSchematic(JSON.parse(sol.schematic_json()));
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::CircuitParameters;
use crate::presentation::{format_summary, waveform_charts, Schematic};
use crate::solver::{CircuitSolution, CircuitSolver, SolverConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A solved series RLC circuit.
///
/// Each parameter change should construct a new instance; the handle is
/// never updated in place.
#[wasm_bindgen]
pub struct WasmRlcSolver {
    params: CircuitParameters,
    solution: CircuitSolution,
}

#[wasm_bindgen]
impl WasmRlcSolver {
    /// Solve with the default 0.1 s / 1000 sample window.
    ///
    /// # Arguments
    /// * `resistance` - R in ohms
    /// * `inductance` - L in henries
    /// * `capacitance` - C in farads
    /// * `amplitude` - E0 in volts
    /// * `frequency` - f in hertz
    ///
    /// # Returns
    /// The solved circuit, or an error string naming the invalid parameter.
    #[wasm_bindgen(constructor)]
    pub fn new(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        amplitude: f64,
        frequency: f64,
    ) -> Result<WasmRlcSolver, JsValue> {
        Self::solve_with(
            resistance,
            inductance,
            capacitance,
            amplitude,
            frequency,
            SolverConfig::new(),
        )
    }

    /// Solve with a window sized to a number of drive periods.
    ///
    /// # Arguments
    /// * `periods` - Number of drive periods to sample
    /// * `samples` - Number of samples across the window
    #[wasm_bindgen]
    pub fn with_periods(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        amplitude: f64,
        frequency: f64,
        periods: f64,
        samples: usize,
    ) -> Result<WasmRlcSolver, JsValue> {
        let config = SolverConfig::new()
            .with_periods(periods)
            .with_samples(samples);
        Self::solve_with(
            resistance,
            inductance,
            capacitance,
            amplitude,
            frequency,
            config,
        )
    }

    #[wasm_bindgen(getter)]
    pub fn angular_frequency(&self) -> f64 {
        self.solution.angular_frequency
    }

    #[wasm_bindgen(getter)]
    pub fn inductive_reactance(&self) -> f64 {
        self.solution.inductive_reactance
    }

    #[wasm_bindgen(getter)]
    pub fn capacitive_reactance(&self) -> f64 {
        self.solution.capacitive_reactance
    }

    #[wasm_bindgen(getter)]
    pub fn impedance(&self) -> f64 {
        self.solution.impedance
    }

    #[wasm_bindgen(getter)]
    pub fn current_amplitude(&self) -> f64 {
        self.solution.current_amplitude
    }

    /// Phase angle in radians.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> f64 {
        self.solution.phase
    }

    /// Phase angle in degrees.
    #[wasm_bindgen(getter)]
    pub fn phase_degrees(&self) -> f64 {
        self.solution.phase_degrees()
    }

    #[wasm_bindgen(getter)]
    pub fn quality_factor(&self) -> f64 {
        self.solution.quality_factor
    }

    #[wasm_bindgen(getter)]
    pub fn resonant_quality_factor(&self) -> f64 {
        self.solution.resonant_quality_factor
    }

    #[wasm_bindgen(getter)]
    pub fn resonant_frequency(&self) -> f64 {
        self.solution.resonant_frequency
    }

    #[wasm_bindgen(getter)]
    pub fn average_power(&self) -> f64 {
        self.solution.average_power
    }

    /// Sample times in seconds (Float64Array).
    #[wasm_bindgen]
    pub fn time(&self) -> Vec<f64> {
        self.solution.waveforms.time.clone()
    }

    /// Source voltage samples (Float64Array).
    #[wasm_bindgen]
    pub fn voltage(&self) -> Vec<f64> {
        self.solution.waveforms.voltage.clone()
    }

    /// Loop current samples (Float64Array).
    #[wasm_bindgen]
    pub fn current(&self) -> Vec<f64> {
        self.solution.waveforms.current.clone()
    }

    /// Instantaneous power samples (Float64Array).
    #[wasm_bindgen]
    pub fn power(&self) -> Vec<f64> {
        self.solution.waveforms.power.clone()
    }

    /// Formatted summary, one quantity per line.
    #[wasm_bindgen]
    pub fn summary(&self) -> String {
        format_summary(&self.solution)
    }

    /// Schematic wires and hoverable markers as JSON.
    #[wasm_bindgen]
    pub fn schematic_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&Schematic::series_rlc(&self.params))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The two waveform chart descriptions as JSON.
    #[wasm_bindgen]
    pub fn charts_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&waveform_charts(&self.solution))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl WasmRlcSolver {
    fn solve_with(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        amplitude: f64,
        frequency: f64,
        config: SolverConfig,
    ) -> Result<WasmRlcSolver, JsValue> {
        let params =
            CircuitParameters::new(resistance, inductance, capacitance, amplitude, frequency)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let solver =
            CircuitSolver::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let solution = solver.solve(&params);

        Ok(WasmRlcSolver { params, solution })
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
