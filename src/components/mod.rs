//! Component models for the series RLC circuit.
//!
//! This module provides models for the supported circuit elements:
//! - Linear: Resistor, Inductor, Capacitor
//! - Sources: sinusoidal AC voltage source
//!
//! Each passive element reports its complex impedance at an angular
//! frequency; a series connection is simply the sum of those phasors.

mod linear;
mod sources;

pub use linear::{Capacitor, Inductor, Resistor};
pub use sources::{angular_frequency, AcSource};

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::circuit::CircuitParameters;

/// A passive circuit element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    Resistor(Resistor),
    Inductor(Inductor),
    Capacitor(Capacitor),
}

impl Component {
    /// Complex impedance at angular frequency `omega`.
    pub fn impedance(&self, omega: f64) -> Complex64 {
        match self {
            Component::Resistor(r) => r.impedance(omega),
            Component::Inductor(l) => l.impedance(omega),
            Component::Capacitor(c) => c.impedance(omega),
        }
    }

    /// Schematic label of the element.
    pub fn symbol(&self) -> &'static str {
        match self {
            Component::Resistor(_) => "R",
            Component::Inductor(_) => "L",
            Component::Capacitor(_) => "C",
        }
    }
}

/// A resistor, inductor and capacitor connected in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRlc {
    pub resistor: Resistor,
    pub inductor: Inductor,
    pub capacitor: Capacitor,
}

impl SeriesRlc {
    /// Create a series RLC loop.
    pub fn new(resistance: f64, inductance: f64, capacitance: f64) -> Self {
        Self {
            resistor: Resistor::new(resistance),
            inductor: Inductor::new(inductance),
            capacitor: Capacitor::new(capacitance),
        }
    }

    /// Build the passive part of a parameter set.
    pub fn from_parameters(params: &CircuitParameters) -> Self {
        Self::new(
            params.resistance(),
            params.inductance(),
            params.capacitance(),
        )
    }

    /// Elements in loop order.
    pub fn components(&self) -> [Component; 3] {
        [
            Component::Resistor(self.resistor),
            Component::Inductor(self.inductor),
            Component::Capacitor(self.capacitor),
        ]
    }

    /// Total impedance phasor R + j(X_L - X_C).
    pub fn impedance(&self, omega: f64) -> Complex64 {
        self.components()
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, c| acc + c.impedance(omega))
    }

    /// Resonance frequency f0 = 1/(2π√(LC)) in hertz.
    pub fn resonant_frequency(&self) -> f64 {
        1.0 / (2.0 * PI * (self.inductor.inductance * self.capacitor.capacitance).sqrt())
    }

    /// Quality factor ωL/R evaluated at the drive frequency.
    pub fn quality_factor_at(&self, omega: f64) -> f64 {
        self.inductor.reactance(omega) / self.resistor.resistance
    }

    /// Quality factor at resonance, √(L/C)/R.
    pub fn resonant_quality_factor(&self) -> f64 {
        (self.inductor.inductance / self.capacitor.capacitance).sqrt() / self.resistor.resistance
    }
}
