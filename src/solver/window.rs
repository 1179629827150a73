//! Time grid used to sample the steady-state waveforms.

use serde::Serialize;

use crate::error::{RlcError, Result};

use super::{DEFAULT_SAMPLE_COUNT, DEFAULT_WINDOW_DURATION};

/// How the sampled time window is chosen.
///
/// The default reproduces the reference plots: 1000 samples over a fixed
/// 0.1 s, whatever the drive frequency. At low frequencies that window
/// shows less than one cycle, and at high frequencies the 1000 samples
/// alias; [`WaveformWindow::Periods`] sizes the window from the drive
/// period instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaveformWindow {
    /// A fixed duration in seconds, independent of frequency.
    Fixed { duration: f64, samples: usize },
    /// A whole number of drive periods (duration = periods / f).
    Periods { periods: f64, samples: usize },
}

impl Default for WaveformWindow {
    fn default() -> Self {
        WaveformWindow::Fixed {
            duration: DEFAULT_WINDOW_DURATION,
            samples: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl WaveformWindow {
    /// Number of samples in the grid.
    pub fn samples(&self) -> usize {
        match *self {
            WaveformWindow::Fixed { samples, .. } | WaveformWindow::Periods { samples, .. } => {
                samples
            }
        }
    }

    /// Return the same window with a different sample count.
    pub fn with_samples(self, samples: usize) -> Self {
        match self {
            WaveformWindow::Fixed { duration, .. } => WaveformWindow::Fixed { duration, samples },
            WaveformWindow::Periods { periods, .. } => WaveformWindow::Periods { periods, samples },
        }
    }

    /// Window length in seconds for a drive at `frequency` hertz.
    pub fn duration_for(&self, frequency: f64) -> f64 {
        match *self {
            WaveformWindow::Fixed { duration, .. } => duration,
            WaveformWindow::Periods { periods, .. } => periods / frequency,
        }
    }

    /// Evenly spaced sample times over `[0, duration]`, both ends included.
    pub fn time_grid(&self, frequency: f64) -> Vec<f64> {
        linspace(0.0, self.duration_for(frequency), self.samples())
    }

    /// Check that the window can produce a usable grid.
    pub fn validate(&self) -> Result<()> {
        let (name, span) = match *self {
            WaveformWindow::Fixed { duration, .. } => ("duration", duration),
            WaveformWindow::Periods { periods, .. } => ("period count", periods),
        };

        if !span.is_finite() || span <= 0.0 {
            return Err(RlcError::invalid_window(format!(
                "{name} must be positive and finite, got {span}"
            )));
        }

        if self.samples() < 2 {
            return Err(RlcError::invalid_window(format!(
                "at least 2 samples are required, got {}",
                self.samples()
            )));
        }

        Ok(())
    }
}

/// Generates `n` linearly spaced samples in `[start, stop]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            // Pin the last sample so the grid ends exactly on `stop`
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_default_window_grid() {
        let grid = WaveformWindow::default().time_grid(50.0);
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[999], 0.1);
        // step = 0.1 / 999 ≈ 1.001e-4 s
        assert_relative_eq!(grid[1] - grid[0], 1.001_001e-4, max_relative = 1e-6);
    }

    #[test]
    fn test_fixed_window_ignores_frequency() {
        let window = WaveformWindow::default();
        assert_eq!(window.duration_for(0.1), window.duration_for(100.0));
    }

    #[test]
    fn test_period_window_scales_with_frequency() {
        let window = WaveformWindow::Periods {
            periods: 5.0,
            samples: 500,
        };
        assert_relative_eq!(window.duration_for(50.0), 0.1, max_relative = 1e-12);
        assert_relative_eq!(window.duration_for(0.5), 10.0, max_relative = 1e-12);
        assert_eq!(window.time_grid(50.0).len(), 500);
    }

    #[test]
    fn test_validate_rejects_bad_windows() {
        assert!(WaveformWindow::default().validate().is_ok());
        assert!(WaveformWindow::Fixed { duration: 0.0, samples: 10 }.validate().is_err());
        assert!(WaveformWindow::Fixed { duration: f64::NAN, samples: 10 }.validate().is_err());
        assert!(WaveformWindow::Periods { periods: -2.0, samples: 10 }.validate().is_err());
        assert!(WaveformWindow::default().with_samples(1).validate().is_err());
    }
}
