//! Error types for the RLC solver.
//!
//! This module provides a unified error type [`RlcError`] that covers
//! parameter validation, waveform window configuration and the output
//! paths used by the CLI and WASM front ends. The solver itself never
//! fails once it holds validated parameters.

use thiserror::Error;

/// Result type alias using [`RlcError`].
pub type Result<T> = std::result::Result<T, RlcError>;

/// Unified error type for all RLC operations.
#[derive(Error, Debug)]
pub enum RlcError {
    // ============ Input Errors ============
    /// A circuit parameter is non-finite or not strictly positive
    #[error("Invalid parameter '{param}' = {value}: {message}")]
    InvalidParameter {
        param: String,
        value: f64,
        message: String,
    },

    /// The waveform window cannot produce a usable time grid
    #[error("Invalid waveform window: {message}")]
    InvalidWindow { message: String },

    // ============ Output Errors ============
    /// Error writing results to the output stream
    #[error("Output error: {message}")]
    OutputError { message: String },

    /// Error creating or writing an output file
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error encoding results as JSON
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RlcError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: impl Into<String>, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            value,
            message: message.into(),
        }
    }

    /// Create an invalid window error
    pub fn invalid_window(message: impl Into<String>) -> Self {
        Self::InvalidWindow {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_the_parameter() {
        let err = RlcError::invalid_parameter("C", 0.0, "must be strictly positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'C' = 0: must be strictly positive"
        );
    }

    #[test]
    fn test_file_write_error_keeps_source() {
        use std::error::Error as _;

        let err = RlcError::FileWriteError {
            path: "out.csv".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.csv"));
        assert!(err.source().is_some());
    }
}
