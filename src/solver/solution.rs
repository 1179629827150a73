//! Derived quantities of a solved circuit.

use num_complex::Complex64;
use serde::Serialize;

/// Relative tolerance used to call a net reactance zero.
pub const RESONANCE_TOLERANCE: f64 = 1e-9;

/// Whether the circuit behaves inductively, capacitively or resistively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitCharacter {
    /// X_L > X_C: current lags the voltage (φ > 0)
    Inductive,
    /// X_L < X_C: current leads the voltage (φ < 0)
    Capacitive,
    /// X_L = X_C: current in phase with the voltage
    Resonant,
}

/// Sampled steady-state waveforms. All four vectors have equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveforms {
    /// Sample times in seconds
    pub time: Vec<f64>,
    /// Source voltage v(t) = E0·sin(ωt)
    pub voltage: Vec<f64>,
    /// Loop current i(t) = I0·sin(ωt - φ)
    pub current: Vec<f64>,
    /// Instantaneous power p(t) = v(t)·i(t)
    pub power: Vec<f64>,
}

impl Waveforms {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when no samples were taken.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Arithmetic mean of the sampled power.
    pub fn mean_power(&self) -> f64 {
        if self.power.is_empty() {
            return 0.0;
        }
        self.power.iter().sum::<f64>() / self.power.len() as f64
    }

    /// Iterate over `(t, v, i, p)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.time
            .iter()
            .zip(&self.voltage)
            .zip(&self.current)
            .zip(&self.power)
            .map(|(((&t, &v), &i), &p)| (t, v, i, p))
    }
}

/// Everything derived from one set of circuit parameters.
///
/// Produced fresh by [`CircuitSolver::solve`](super::CircuitSolver::solve)
/// and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitSolution {
    /// Angular frequency ω = 2πf (rad/s)
    pub angular_frequency: f64,
    /// Inductive reactance X_L = ωL (Ω)
    pub inductive_reactance: f64,
    /// Capacitive reactance X_C = 1/(ωC) (Ω)
    pub capacitive_reactance: f64,
    /// Impedance magnitude |Z| = √(R² + (X_L - X_C)²) (Ω)
    pub impedance: f64,
    /// Current amplitude I0 = E0/|Z| (A)
    pub current_amplitude: f64,
    /// Phase angle φ = atan2(X_L - X_C, R) (rad)
    pub phase: f64,
    /// Quality factor ωL/R at the drive frequency
    pub quality_factor: f64,
    /// Quality factor at resonance √(L/C)/R
    pub resonant_quality_factor: f64,
    /// Resonance frequency f0 = 1/(2π√(LC)) (Hz)
    pub resonant_frequency: f64,
    /// Average real power 0.5·E0·I0·cos(φ) (W)
    pub average_power: f64,
    /// Sampled v(t), i(t), p(t)
    pub waveforms: Waveforms,
}

impl CircuitSolution {
    /// Net reactance X_L - X_C (Ω).
    pub fn net_reactance(&self) -> f64 {
        self.inductive_reactance - self.capacitive_reactance
    }

    /// Resistance recovered from the impedance triangle (Ω).
    pub fn resistance(&self) -> f64 {
        self.impedance * self.phase.cos()
    }

    /// Impedance phasor R + j(X_L - X_C).
    pub fn impedance_phasor(&self) -> Complex64 {
        Complex64::from_polar(self.impedance, self.phase)
    }

    /// Phase angle in degrees.
    pub fn phase_degrees(&self) -> f64 {
        self.phase.to_degrees()
    }

    /// Power factor cos(φ).
    pub fn power_factor(&self) -> f64 {
        self.phase.cos()
    }

    /// Classify the circuit by the sign of its net reactance.
    pub fn character(&self) -> CircuitCharacter {
        let x = self.net_reactance();
        let scale = self.inductive_reactance.max(self.capacitive_reactance);
        if x.abs() <= RESONANCE_TOLERANCE * scale {
            CircuitCharacter::Resonant
        } else if x > 0.0 {
            CircuitCharacter::Inductive
        } else {
            CircuitCharacter::Capacitive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waveforms() -> Waveforms {
        Waveforms {
            time: vec![0.0, 1.0, 2.0],
            voltage: vec![1.0, 2.0, 3.0],
            current: vec![1.0, 1.0, 2.0],
            power: vec![1.0, 2.0, 6.0],
        }
    }

    #[test]
    fn test_mean_power() {
        assert!((waveforms().mean_power() - 3.0).abs() < 1e-12);
        let empty = Waveforms {
            time: vec![],
            voltage: vec![],
            current: vec![],
            power: vec![],
        };
        assert!(empty.is_empty());
        assert_eq!(empty.mean_power(), 0.0);
    }

    #[test]
    fn test_rows_zip_columns() {
        let rows: Vec<_> = waveforms().rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], (2.0, 3.0, 2.0, 6.0));
    }
}
