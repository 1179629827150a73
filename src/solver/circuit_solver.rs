//! Main solver interface.

use crate::circuit::CircuitParameters;
use crate::components::{AcSource, SeriesRlc};
use crate::error::Result;

use super::solution::{CircuitSolution, Waveforms};
use super::window::WaveformWindow;

/// Configuration for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolverConfig {
    /// Time window used to sample the waveforms.
    pub window: WaveformWindow,
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the waveform window.
    pub fn with_window(mut self, window: WaveformWindow) -> Self {
        self.window = window;
        self
    }

    /// Use a fixed window of `duration` seconds, keeping the sample count.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.window = WaveformWindow::Fixed {
            duration,
            samples: self.window.samples(),
        };
        self
    }

    /// Size the window to `periods` drive periods, keeping the sample count.
    ///
    /// Useful at low frequencies where the fixed 0.1 s window shows less
    /// than one cycle.
    pub fn with_periods(mut self, periods: f64) -> Self {
        self.window = WaveformWindow::Periods {
            periods,
            samples: self.window.samples(),
        };
        self
    }

    /// Set the number of waveform samples.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.window = self.window.with_samples(samples);
        self
    }

    /// Check that the configuration can be used for solving.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()
    }
}

/// Steady-state solver for a series RLC circuit.
///
/// Solving is a pure function of the parameters: no state is carried
/// between calls, so one solver can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircuitSolver {
    config: SolverConfig,
}

impl CircuitSolver {
    /// Create a solver with the default 0.1 s / 1000 sample window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the closed-form steady-state response.
    pub fn solve(&self, params: &CircuitParameters) -> CircuitSolution {
        let rlc = SeriesRlc::from_parameters(params);
        let source = AcSource::new(params.amplitude(), params.frequency());

        let omega = source.angular_frequency();
        let inductive_reactance = rlc.inductor.reactance(omega);
        let capacitive_reactance = rlc.capacitor.reactance(omega);

        // z = R + j(X_L - X_C)
        let z = rlc.impedance(omega);
        let impedance = z.norm_sqr().sqrt();
        let current_amplitude = source.amplitude / impedance;
        let phase = z.im.atan2(z.re);

        let quality_factor = rlc.quality_factor_at(omega);
        let resonant_quality_factor = rlc.resonant_quality_factor();
        let resonant_frequency = rlc.resonant_frequency();
        let average_power = 0.5 * source.amplitude * current_amplitude * phase.cos();

        let duration = self.config.window.duration_for(source.frequency);
        if duration < source.period() {
            log::warn!(
                "waveform window of {:.4} s is shorter than one period ({:.4} s) at f = {} Hz",
                duration,
                source.period(),
                source.frequency
            );
        }

        let time = self.config.window.time_grid(source.frequency);
        let voltage: Vec<f64> = time.iter().map(|&t| source.voltage_at(t)).collect();
        let current: Vec<f64> = time
            .iter()
            .map(|&t| current_amplitude * (omega * t - phase).sin())
            .collect();
        let power = voltage.iter().zip(&current).map(|(v, i)| v * i).collect();

        log::debug!(
            "solved series RLC: |Z| = {:.4} Ω, φ = {:.4} rad, I0 = {:.4} A, {} samples over {:.4} s",
            impedance,
            phase,
            current_amplitude,
            time.len(),
            duration
        );

        CircuitSolution {
            angular_frequency: omega,
            inductive_reactance,
            capacitive_reactance,
            impedance,
            current_amplitude,
            phase,
            quality_factor,
            resonant_quality_factor,
            resonant_frequency,
            average_power,
            waveforms: Waveforms {
                time,
                voltage,
                current,
                power,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::CircuitCharacter;
    use approx::assert_relative_eq;

    fn reference_params() -> CircuitParameters {
        CircuitParameters::new(10.0, 0.1, 0.001, 10.0, 50.0).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let sol = CircuitSolver::new().solve(&reference_params());

        assert_relative_eq!(sol.angular_frequency, 314.16, max_relative = 0.01);
        assert_relative_eq!(sol.inductive_reactance, 31.42, max_relative = 0.01);
        assert_relative_eq!(sol.capacitive_reactance, 3.18, max_relative = 0.01);
        assert_relative_eq!(sol.impedance, 29.95, max_relative = 0.01);
        assert_relative_eq!(sol.current_amplitude, 0.333, max_relative = 0.01);
        assert_relative_eq!(sol.phase, 1.233, max_relative = 0.01);
        assert_relative_eq!(sol.quality_factor, 3.14, max_relative = 0.01);
        assert_relative_eq!(sol.resonant_frequency, 15.92, max_relative = 0.01);
        assert_relative_eq!(sol.average_power, 0.557, max_relative = 0.01);
        assert_eq!(sol.character(), CircuitCharacter::Inductive);
    }

    #[test]
    fn test_default_waveform_shape() {
        let sol = CircuitSolver::new().solve(&reference_params());
        let w = &sol.waveforms;
        assert_eq!(w.len(), 1000);
        assert_eq!(w.voltage.len(), 1000);
        assert_eq!(w.current.len(), 1000);
        assert_eq!(w.power.len(), 1000);
        assert_eq!(w.time[0], 0.0);
        assert_eq!(w.time[999], 0.1);
    }

    #[test]
    fn test_waveform_samples_follow_formulas() {
        let params = reference_params();
        let sol = CircuitSolver::new().solve(&params);
        let w = &sol.waveforms;
        for k in [0, 1, 137, 500, 999] {
            let t = w.time[k];
            let v = params.amplitude() * (sol.angular_frequency * t).sin();
            let i = sol.current_amplitude * (sol.angular_frequency * t - sol.phase).sin();
            assert!((w.voltage[k] - v).abs() < 1e-12);
            assert!((w.current[k] - i).abs() < 1e-12);
            assert!((w.power[k] - v * i).abs() < 1e-12);
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let solver = CircuitSolver::new();
        let params = reference_params();
        assert_eq!(solver.solve(&params), solver.solve(&params));
    }

    #[test]
    fn test_period_window() {
        let config = SolverConfig::new().with_periods(5.0).with_samples(200);
        let solver = CircuitSolver::with_config(config).unwrap();
        let params = reference_params().with(crate::Parameter::Frequency, 2.0).unwrap();
        let sol = solver.solve(&params);
        assert_eq!(sol.waveforms.len(), 200);
        assert_relative_eq!(sol.waveforms.time[199], 2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_with_config_rejects_invalid_window() {
        let config = SolverConfig::new().with_duration(-1.0);
        assert!(CircuitSolver::with_config(config).is_err());
        let config = SolverConfig::new().with_samples(0);
        assert!(CircuitSolver::with_config(config).is_err());
    }
}
