//! Core types for circuit parameters.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::Result;

use super::validate::validate_parameter;

/// One of the five scalar inputs of a series RLC circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Parameter {
    /// Resistance R in ohms
    Resistance,
    /// Inductance L in henries
    Inductance,
    /// Capacitance C in farads
    Capacitance,
    /// Source voltage amplitude E0 in volts
    Amplitude,
    /// Source frequency f in hertz
    Frequency,
}

impl Parameter {
    /// All parameters in display order.
    pub const ALL: [Parameter; 5] = [
        Parameter::Resistance,
        Parameter::Inductance,
        Parameter::Capacitance,
        Parameter::Amplitude,
        Parameter::Frequency,
    ];

    /// Short symbol used in formulas and error messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::Resistance => "R",
            Parameter::Inductance => "L",
            Parameter::Capacitance => "C",
            Parameter::Amplitude => "E0",
            Parameter::Frequency => "f",
        }
    }

    /// SI unit symbol.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Resistance => "Ω",
            Parameter::Inductance => "H",
            Parameter::Capacitance => "F",
            Parameter::Amplitude => "V",
            Parameter::Frequency => "Hz",
        }
    }

    /// Range offered by the reference slider UI.
    ///
    /// The solver accepts any positive finite value; these bounds only
    /// describe the region where the plots are meaningful.
    pub fn reference_range(&self) -> RangeInclusive<f64> {
        match self {
            Parameter::Resistance => 1.0..=100.0,
            Parameter::Inductance => 0.001..=1.0,
            Parameter::Capacitance => 1e-6..=1e-2,
            Parameter::Amplitude => 1.0..=100.0,
            Parameter::Frequency => 0.1..=100.0,
        }
    }

    /// Initial slider position of the reference UI.
    pub fn default_value(&self) -> f64 {
        match self {
            Parameter::Resistance => 10.0,
            Parameter::Inductance => 0.1,
            Parameter::Capacitance => 0.001,
            Parameter::Amplitude => 10.0,
            Parameter::Frequency => 50.0,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Validated inputs of a series RLC circuit driven by a sinusoidal source.
///
/// Every field is guaranteed strictly positive and finite, so the
/// closed-form formulas never divide by zero. A new value is built for
/// every parameter change; existing values are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircuitParameters {
    resistance: f64,
    inductance: f64,
    capacitance: f64,
    amplitude: f64,
    frequency: f64,
}

impl CircuitParameters {
    /// Create a validated parameter set.
    ///
    /// # Arguments
    /// * `resistance` - R in ohms
    /// * `inductance` - L in henries
    /// * `capacitance` - C in farads
    /// * `amplitude` - E0 in volts
    /// * `frequency` - f in hertz
    ///
    /// # Errors
    /// Returns [`RlcError::InvalidParameter`](crate::RlcError::InvalidParameter)
    /// for the first value that is zero, negative, NaN or infinite.
    pub fn new(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        amplitude: f64,
        frequency: f64,
    ) -> Result<Self> {
        Ok(Self {
            resistance: validate_parameter(Parameter::Resistance, resistance)?,
            inductance: validate_parameter(Parameter::Inductance, inductance)?,
            capacitance: validate_parameter(Parameter::Capacitance, capacitance)?,
            amplitude: validate_parameter(Parameter::Amplitude, amplitude)?,
            frequency: validate_parameter(Parameter::Frequency, frequency)?,
        })
    }

    /// Resistance R in ohms.
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Inductance L in henries.
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Capacitance C in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Source amplitude E0 in volts.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Source frequency f in hertz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Look up a value by parameter.
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Resistance => self.resistance,
            Parameter::Inductance => self.inductance,
            Parameter::Capacitance => self.capacitance,
            Parameter::Amplitude => self.amplitude,
            Parameter::Frequency => self.frequency,
        }
    }

    /// Return a copy with one parameter replaced.
    ///
    /// This is the "slider moved" operation: the original value is untouched.
    pub fn with(&self, param: Parameter, value: f64) -> Result<Self> {
        let value = validate_parameter(param, value)?;
        let mut next = *self;
        match param {
            Parameter::Resistance => next.resistance = value,
            Parameter::Inductance => next.inductance = value,
            Parameter::Capacitance => next.capacitance = value,
            Parameter::Amplitude => next.amplitude = value,
            Parameter::Frequency => next.frequency = value,
        }
        Ok(next)
    }

    /// Parameters lying outside their reference UI range.
    pub fn out_of_reference_range(&self) -> Vec<Parameter> {
        Parameter::ALL
            .iter()
            .copied()
            .filter(|p| !p.reference_range().contains(&self.get(*p)))
            .collect()
    }
}

impl Default for CircuitParameters {
    /// The reference UI defaults: R=10 Ω, L=0.1 H, C=1 mF, E0=10 V, f=50 Hz.
    fn default() -> Self {
        Self {
            resistance: Parameter::Resistance.default_value(),
            inductance: Parameter::Inductance.default_value(),
            capacitance: Parameter::Capacitance.default_value(),
            amplitude: Parameter::Amplitude.default_value(),
            frequency: Parameter::Frequency.default_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RlcError;

    #[test]
    fn test_defaults_lie_in_reference_ranges() {
        let params = CircuitParameters::default();
        assert!(params.out_of_reference_range().is_empty());
        for p in Parameter::ALL {
            assert!(p.reference_range().contains(&p.default_value()), "{p}");
        }
    }

    #[test]
    fn test_new_rejects_zero_capacitance() {
        let err = CircuitParameters::new(10.0, 0.1, 0.0, 10.0, 50.0).unwrap_err();
        match err {
            RlcError::InvalidParameter { param, .. } => assert_eq!(param, "C"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_replaces_single_value() {
        let base = CircuitParameters::default();
        let next = base.with(Parameter::Frequency, 60.0).unwrap();
        assert_eq!(next.frequency(), 60.0);
        assert_eq!(next.resistance(), base.resistance());
        assert_eq!(base.frequency(), 50.0);
    }

    #[test]
    fn test_with_rejects_negative_value() {
        let base = CircuitParameters::default();
        assert!(base.with(Parameter::Resistance, -1.0).is_err());
    }

    #[test]
    fn test_out_of_reference_range_accepts_but_reports() {
        let params = CircuitParameters::new(500.0, 0.1, 0.001, 10.0, 1000.0).unwrap();
        assert_eq!(
            params.out_of_reference_range(),
            vec![Parameter::Resistance, Parameter::Frequency]
        );
    }
}
