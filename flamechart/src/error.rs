//! Error types for flamechart.
//!
//! Building a chart never fails. Errors only arise at the edges: loading a
//! profile from disk, validating measurement samples, and reading chart
//! options.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for all fallible flamechart operations.
#[derive(Error, Debug)]
pub enum FlamechartError {
    /// Error loading or parsing a profile document.
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// A measurement failed validation.
    #[error("measurement error: {0}")]
    Measurement(#[from] MeasurementError),

    /// Chart options could not be loaded or are invalid.
    #[error("options error: {0}")]
    Options(#[from] OptionsError),
}

/// Errors that can occur while loading a profile document.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read profile '{}': {source}", path.display())]
    Read {
        /// The profile path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile JSON could not be parsed.
    #[error("failed to parse profile JSON: {source}")]
    Parse {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while validating a measurement.
#[derive(Error, Debug)]
pub enum MeasurementError {
    /// A sample carries a NaN or infinite value.
    #[error("measurement '{name}' has non-finite value {value} at sample {index}")]
    NonFiniteValue {
        /// The measurement name.
        name: String,
        /// Index of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The measurement name is empty.
    #[error("measurement name cannot be empty")]
    EmptyName,
}

/// Errors that can occur while loading or validating chart options.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The options file could not be read.
    #[error("failed to read options '{}': {source}", path.display())]
    Read {
        /// The options path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The options JSON could not be parsed.
    #[error("failed to parse options '{}': {source}", path.display())]
    Parse {
        /// The options path.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The base rectangle is unusable.
    #[error("invalid base rectangle: {reason}")]
    InvalidRect {
        /// Description of what is wrong with the rectangle.
        reason: String,
    },
}

/// Type alias for `Result<T, FlamechartError>`.
pub type Result<T> = std::result::Result<T, FlamechartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: FlamechartError = MeasurementError::NonFiniteValue {
            name: "cpu_usage_0".to_string(),
            index: 2,
            value: f64::NAN,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "measurement error: measurement 'cpu_usage_0' has non-finite value NaN at sample 2"
        );

        let err: FlamechartError = OptionsError::InvalidRect {
            reason: "width must be finite".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("options error: invalid base rectangle"));
    }

    #[test]
    fn test_read_error_includes_path() {
        let err = ProfileError::Read {
            path: PathBuf::from("/nope/profile.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/profile.json"));
    }
}
