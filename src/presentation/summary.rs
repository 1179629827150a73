//! Human-readable summary of the derived quantities.

use serde::Serialize;

use crate::solver::CircuitSolution;

/// One formatted quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl SummaryLine {
    fn new(label: &'static str, symbol: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            label,
            symbol,
            value,
            unit,
        }
    }
}

/// The displayed quantities in order. φ is reported in degrees.
pub fn summary_lines(solution: &CircuitSolution) -> Vec<SummaryLine> {
    vec![
        SummaryLine::new("Angular frequency", "ω", solution.angular_frequency, "rad/s"),
        SummaryLine::new("Total impedance", "Z", solution.impedance, "Ω"),
        SummaryLine::new("Inductive reactance", "XL", solution.inductive_reactance, "Ω"),
        SummaryLine::new("Capacitive reactance", "XC", solution.capacitive_reactance, "Ω"),
        SummaryLine::new("Peak current", "I0", solution.current_amplitude, "A"),
        SummaryLine::new("Phase angle", "φ", solution.phase_degrees(), "°"),
        SummaryLine::new("Quality factor", "Q", solution.quality_factor, ""),
        SummaryLine::new("Resonance frequency", "f0", solution.resonant_frequency, "Hz"),
        SummaryLine::new("Average power", "P", solution.average_power, "W"),
    ]
}

/// Render the summary as text, one quantity per line, two decimals.
pub fn format_summary(solution: &CircuitSolution) -> String {
    summary_lines(solution)
        .iter()
        .map(|line| {
            let value = format!("{:.2}", line.value);
            match line.unit {
                "" => format!("- {} ({}) = {}\n", line.label, line.symbol, value),
                "°" => format!("- {} ({}) = {}°\n", line.label, line.symbol, value),
                unit => format!("- {} ({}) = {} {}\n", line.label, line.symbol, value, unit),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CircuitParameters, CircuitSolver};

    #[test]
    fn test_reference_summary_text() {
        let sol = CircuitSolver::new().solve(&CircuitParameters::default());
        let text = format_summary(&sol);

        assert!(text.contains("- Angular frequency (ω) = 314.16 rad/s\n"));
        assert!(text.contains("- Inductive reactance (XL) = 31.42 Ω\n"));
        assert!(text.contains("- Capacitive reactance (XC) = 3.18 Ω\n"));
        assert!(text.contains("- Quality factor (Q) = 3.14\n"));
        assert!(text.contains("- Resonance frequency (f0) = 15.92 Hz\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_phase_reported_in_degrees() {
        let sol = CircuitSolver::new().solve(&CircuitParameters::default());
        let phase = summary_lines(&sol)
            .into_iter()
            .find(|l| l.symbol == "φ")
            .unwrap();
        assert!((phase.value - sol.phase.to_degrees()).abs() < 1e-12);
        assert!(phase.value > 70.0 && phase.value < 71.0);
    }
}
