//! Sinusoidal voltage source.

use std::f64::consts::PI;

/// An ideal AC voltage source e(t) = E0·sin(ωt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcSource {
    /// Peak amplitude E0 in volts
    pub amplitude: f64,
    /// Frequency f in hertz
    pub frequency: f64,
}

impl AcSource {
    /// Create a new AC source.
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Angular frequency ω = 2πf in rad/s.
    pub fn angular_frequency(&self) -> f64 {
        angular_frequency(self.frequency)
    }

    /// Period 1/f in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// Instantaneous source voltage at time `t` (seconds).
    pub fn voltage_at(&self, t: f64) -> f64 {
        self.amplitude * (self.angular_frequency() * t).sin()
    }
}

/// Angular frequency ω = 2πf for a frequency in hertz.
#[inline]
pub fn angular_frequency(hz: f64) -> f64 {
    2.0 * PI * hz
}
