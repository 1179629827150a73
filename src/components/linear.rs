//! Linear passive components: Resistor, Inductor, Capacitor.
//!
//! Each element reports its steady-state impedance as a complex phasor
//! at a given angular frequency ω (rad/s).

use num_complex::Complex64;

/// An ideal resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    /// Resistance in ohms
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(resistance: f64) -> Self {
        Self { resistance }
    }

    /// Impedance Z_R = R + j0, independent of frequency.
    pub fn impedance(&self, _omega: f64) -> Complex64 {
        Complex64::new(self.resistance, 0.0)
    }
}

/// An ideal inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    /// Inductance in henries
    pub inductance: f64,
}

impl Inductor {
    /// Create a new inductor.
    pub fn new(inductance: f64) -> Self {
        Self { inductance }
    }

    /// Inductive reactance X_L = ωL.
    pub fn reactance(&self, omega: f64) -> f64 {
        omega * self.inductance
    }

    /// Impedance Z_L = jωL.
    pub fn impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(0.0, self.reactance(omega))
    }
}

/// An ideal capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    /// Capacitance in farads
    pub capacitance: f64,
}

impl Capacitor {
    /// Create a new capacitor.
    pub fn new(capacitance: f64) -> Self {
        Self { capacitance }
    }

    /// Capacitive reactance X_C = 1/(ωC), reported as a positive magnitude.
    ///
    /// Diverges as ω → 0; callers only pass ω derived from a validated
    /// positive frequency.
    pub fn reactance(&self, omega: f64) -> f64 {
        1.0 / (omega * self.capacitance)
    }

    /// Impedance Z_C = -j/(ωC).
    pub fn impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(0.0, -self.reactance(omega))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resistor_is_purely_real() {
        let r = Resistor::new(47.0);
        let z = r.impedance(1234.0);
        assert_eq!(z.re, 47.0);
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn test_inductor_reactance() {
        let l = Inductor::new(0.1);
        // X_L = 2π·50·0.1 ≈ 31.4159 Ω
        let omega = 2.0 * std::f64::consts::PI * 50.0;
        assert_relative_eq!(l.reactance(omega), 31.415_926_535, max_relative = 1e-9);
        assert_eq!(l.impedance(omega).re, 0.0);
        assert!(l.impedance(omega).im > 0.0);
    }

    #[test]
    fn test_capacitor_reactance() {
        let c = Capacitor::new(0.001);
        // X_C = 1 / (2π·50·0.001) ≈ 3.1831 Ω
        let omega = 2.0 * std::f64::consts::PI * 50.0;
        assert_relative_eq!(c.reactance(omega), 3.183_098_861_8, max_relative = 1e-9);
        assert!(c.impedance(omega).im < 0.0);
    }
}
