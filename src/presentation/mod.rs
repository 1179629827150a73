//! Display data for UI front ends.
//!
//! Nothing here computes electrical quantities. These types package a
//! [`CircuitSolution`](crate::CircuitSolution) for a renderer: the fixed
//! loop schematic, the two waveform charts, a formatted summary and a
//! [`Report`] bundling them for JSON consumers.

mod charts;
mod report;
mod schematic;
mod summary;

pub use charts::{waveform_charts, Chart, Series};
pub use report::Report;
pub use schematic::{Marker, Point, Schematic, Wire};
pub use summary::{format_summary, summary_lines, SummaryLine};
