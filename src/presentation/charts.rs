//! Chart descriptions for the time-domain plots.

use serde::Serialize;

use crate::solver::CircuitSolution;

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<'a> {
    pub name: &'static str,
    pub color: &'static str,
    pub x: &'a [f64],
    pub y: &'a [f64],
}

/// A titled chart with one or more overlaid series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart<'a> {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<Series<'a>>,
}

/// The two standard plots: v and i overlaid, then p on its own.
///
/// Series borrow the solution's sample vectors; nothing is copied.
pub fn waveform_charts(solution: &CircuitSolution) -> [Chart<'_>; 2] {
    let w = &solution.waveforms;
    [
        Chart {
            title: "Voltage & Current vs Time",
            x_label: "Time (s)",
            y_label: "Amplitude",
            series: vec![
                Series {
                    name: "Voltage (V)",
                    color: "magenta",
                    x: &w.time,
                    y: &w.voltage,
                },
                Series {
                    name: "Current (A)",
                    color: "orange",
                    x: &w.time,
                    y: &w.current,
                },
            ],
        },
        Chart {
            title: "Instantaneous Power vs Time",
            x_label: "Time (s)",
            y_label: "Power (W)",
            series: vec![Series {
                name: "Power (P = V × I)",
                color: "cyan",
                x: &w.time,
                y: &w.power,
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CircuitParameters, CircuitSolver};

    #[test]
    fn test_charts_reference_solution_samples() {
        let sol = CircuitSolver::new().solve(&CircuitParameters::default());
        let [vi, p] = waveform_charts(&sol);

        assert_eq!(vi.series.len(), 2);
        assert_eq!(vi.series[0].y, sol.waveforms.voltage.as_slice());
        assert_eq!(vi.series[1].y, sol.waveforms.current.as_slice());
        assert_eq!(p.series.len(), 1);
        assert_eq!(p.series[0].y, sol.waveforms.power.as_slice());
        assert!(p.series.iter().all(|s| s.x.len() == 1000));
    }
}
