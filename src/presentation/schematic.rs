//! Static schematic of the series loop.

use serde::Serialize;

use crate::circuit::CircuitParameters;

/// A point in schematic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight wire segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wire {
    pub from: Point,
    pub to: Point,
}

/// A labelled, hoverable component marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Short label drawn on the marker ("R", "L", "C", "V")
    pub label: &'static str,
    pub position: Point,
    pub color: &'static str,
    /// Hover text embedding the current component value
    pub hover: String,
}

/// Rectangular loop: bottom, right, top and left edges.
const LOOP: [(Point, Point); 4] = [
    (Point::new(0.0, 0.0), Point::new(8.0, 0.0)),
    (Point::new(8.0, 0.0), Point::new(8.0, 2.0)),
    (Point::new(8.0, 2.0), Point::new(0.0, 2.0)),
    (Point::new(0.0, 2.0), Point::new(0.0, 0.0)),
];

/// Diagram of the series RLC loop.
///
/// The topology and layout never change; only the hover texts follow the
/// parameter values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schematic {
    pub wires: Vec<Wire>,
    pub markers: Vec<Marker>,
}

impl Schematic {
    /// Build the diagram for a parameter set.
    pub fn series_rlc(params: &CircuitParameters) -> Self {
        let wires = LOOP.iter().map(|&(from, to)| Wire { from, to }).collect();

        let markers = vec![
            Marker {
                label: "R",
                position: Point::new(0.5, 2.0),
                color: "red",
                hover: format!("Resistor\nR = {:.2} Ω", params.resistance()),
            },
            Marker {
                label: "L",
                position: Point::new(3.0, 2.0),
                color: "blue",
                hover: format!("Inductor\nL = {:.4} H", params.inductance()),
            },
            Marker {
                label: "C",
                position: Point::new(5.5, 2.0),
                color: "green",
                hover: format!("Capacitor\nC = {:.6} F", params.capacitance()),
            },
            Marker {
                label: "V",
                position: Point::new(0.0, 1.0),
                color: "magenta",
                hover: format!("AC Source\nE₀ = {:.2} V", params.amplitude()),
            },
        ];

        Self { wires, markers }
    }

    /// Find a marker by its label.
    pub fn marker(&self, label: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.label == label)
    }
}
