//! Parameter validation.

use crate::error::{RlcError, Result};

use super::Parameter;

/// Validate a single circuit parameter.
///
/// Checks:
/// - The value is finite (no NaN or infinity)
/// - The value is strictly positive
///
/// Returns the value unchanged so it can be used inline in constructors.
pub fn validate_parameter(param: Parameter, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(RlcError::invalid_parameter(
            param.symbol(),
            value,
            "must be a finite number",
        ));
    }

    if value <= 0.0 {
        return Err(RlcError::invalid_parameter(
            param.symbol(),
            value,
            format!("must be strictly positive ({})", param.unit()),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_values() {
        assert_eq!(validate_parameter(Parameter::Inductance, 0.5).unwrap(), 0.5);
        assert_eq!(validate_parameter(Parameter::Capacitance, 1e-12).unwrap(), 1e-12);
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert!(validate_parameter(Parameter::Frequency, f64::NAN).is_err());
        assert!(validate_parameter(Parameter::Frequency, f64::INFINITY).is_err());
        assert!(validate_parameter(Parameter::Frequency, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        let err = validate_parameter(Parameter::Resistance, 0.0).unwrap_err();
        assert!(err.to_string().contains("'R'"));
        assert!(err.to_string().contains("strictly positive"));
        assert!(validate_parameter(Parameter::Amplitude, -3.0).is_err());
        assert!(validate_parameter(Parameter::Amplitude, -0.0).is_err());
    }
}
