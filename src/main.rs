//! rlc - Series RLC Circuit Calculator
//!
//! Solves the steady-state response of a series RLC circuit and prints the
//! derived quantities, a JSON report or the sampled waveforms.
//!
//! # Usage
//!
//! ```bash
//! rlc --resistance 10 --inductance 0.1 --capacitance 0.001 --amplitude 10 --frequency 50
//! rlc -f 5 --periods 5 --format csv --output waveforms.csv
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use rlc_core::{
    error::{Result, RlcError},
    output::{write_solution, OutputFormat},
    CircuitParameters, CircuitSolver, Parameter, SolverConfig, DEFAULT_SAMPLE_COUNT,
};

/// Series RLC circuit calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resistance R in ohms
    #[arg(short = 'R', long, default_value_t = Parameter::Resistance.default_value())]
    resistance: f64,

    /// Inductance L in henries
    #[arg(short = 'L', long, default_value_t = Parameter::Inductance.default_value())]
    inductance: f64,

    /// Capacitance C in farads
    #[arg(short = 'C', long, default_value_t = Parameter::Capacitance.default_value())]
    capacitance: f64,

    /// Source voltage amplitude E0 in volts
    #[arg(short = 'E', long, default_value_t = Parameter::Amplitude.default_value())]
    amplitude: f64,

    /// Source frequency f in hertz
    #[arg(short = 'f', long, default_value_t = Parameter::Frequency.default_value())]
    frequency: f64,

    /// Sample this many drive periods instead of the fixed 0.1 s window
    #[arg(short, long)]
    periods: Option<f64>,

    /// Number of waveform samples
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    // Validate the inputs
    let params = CircuitParameters::new(
        args.resistance,
        args.inductance,
        args.capacitance,
        args.amplitude,
        args.frequency,
    )?;

    for param in params.out_of_reference_range() {
        let range = param.reference_range();
        log::warn!(
            "{} = {} {} is outside the usual range [{}, {}]",
            param,
            params.get(param),
            param.unit(),
            range.start(),
            range.end()
        );
    }

    // Configure the waveform window
    let mut config = SolverConfig::new().with_samples(args.samples);
    if let Some(periods) = args.periods {
        config = config.with_periods(periods);
    }
    let solver = CircuitSolver::with_config(config)?;

    // Solve
    let solution = solver.solve(&params);
    log::info!(
        "f = {} Hz, f0 = {:.4} Hz ({:?})",
        params.frequency(),
        solution.resonant_frequency,
        solution.character()
    );

    // Write results
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| RlcError::FileWriteError {
                path: path.display().to_string(),
                source,
            })?;
            write_solution(&mut BufWriter::new(file), args.format, &params, &solution)?;
            log::info!("wrote {:?} output to {}", args.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            write_solution(&mut stdout.lock(), args.format, &params, &solution)?;
        }
    }

    Ok(())
}

/// Route `log` records to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
