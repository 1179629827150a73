//! Bundle of everything a front end displays for one parameter set.

use serde::Serialize;

use crate::circuit::CircuitParameters;
use crate::solver::CircuitSolution;

use super::{summary_lines, Schematic, SummaryLine};

/// Parameters, solution, schematic and summary in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub parameters: &'a CircuitParameters,
    pub solution: &'a CircuitSolution,
    pub schematic: Schematic,
    pub summary: Vec<SummaryLine>,
}

impl<'a> Report<'a> {
    /// Assemble the report for a solved parameter set.
    pub fn new(parameters: &'a CircuitParameters, solution: &'a CircuitSolution) -> Self {
        Self {
            parameters,
            solution,
            schematic: Schematic::series_rlc(parameters),
            summary: summary_lines(solution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircuitSolver;

    #[test]
    fn test_report_serializes_all_sections() {
        let params = CircuitParameters::default();
        let sol = CircuitSolver::new().solve(&params);
        let value = serde_json::to_value(Report::new(&params, &sol)).unwrap();

        assert_eq!(value["parameters"]["resistance"], 10.0);
        assert_eq!(value["solution"]["waveforms"]["time"].as_array().unwrap().len(), 1000);
        assert_eq!(value["schematic"]["markers"].as_array().unwrap().len(), 4);
        assert_eq!(value["summary"].as_array().unwrap().len(), 9);
    }
}
