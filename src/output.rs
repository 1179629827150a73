//! Result output for the CLI frontend.
//!
//! Writes a solved circuit as a text summary, a JSON report or CSV
//! waveform samples to any [`Write`] sink (stdout or a file).

use std::io::Write;

use clap::ValueEnum;

use crate::circuit::CircuitParameters;
use crate::error::{RlcError, Result};
use crate::presentation::{format_summary, Report};
use crate::solver::{CircuitSolution, Waveforms};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Formatted summary of the derived quantities
    #[default]
    Text,
    /// Full report: parameters, solution, schematic and summary
    Json,
    /// Waveform samples as `t,v,i,p` rows
    Csv,
}

/// Write a solved circuit in the requested format.
pub fn write_solution<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    params: &CircuitParameters,
    solution: &CircuitSolution,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, solution)?,
        OutputFormat::Json => write_json(writer, params, solution)?,
        OutputFormat::Csv => write_csv(writer, &solution.waveforms)?,
    }

    writer.flush().map_err(|e| RlcError::output(e.to_string()))
}

/// Write the formatted summary.
pub fn write_text<W: Write>(writer: &mut W, solution: &CircuitSolution) -> Result<()> {
    writer
        .write_all(format_summary(solution).as_bytes())
        .map_err(|e| RlcError::output(e.to_string()))
}

/// Write the pretty-printed JSON report followed by a newline.
pub fn write_json<W: Write>(
    writer: &mut W,
    params: &CircuitParameters,
    solution: &CircuitSolution,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report::new(params, solution)).map_err(|e| {
        RlcError::Serialization {
            message: e.to_string(),
        }
    })?;
    writeln!(writer).map_err(|e| RlcError::output(e.to_string()))
}

/// Write the waveform samples as CSV with a `t,v,i,p` header.
pub fn write_csv<W: Write>(writer: &mut W, waveforms: &Waveforms) -> Result<()> {
    writeln!(writer, "t,v,i,p").map_err(|e| RlcError::output(e.to_string()))?;

    for (t, v, i, p) in waveforms.rows() {
        writeln!(writer, "{t:e},{v:e},{i:e},{p:e}").map_err(|e| RlcError::output(e.to_string()))?;
    }

    Ok(())
}
