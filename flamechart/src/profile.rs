//! Loading measurements from profile documents.
//!
//! Profilers attach measurements to a profile as a JSON object keyed by
//! measurement name:
//!
//! ```json
//! {
//!   "measurements": {
//!     "cpu_usage_0": {
//!       "unit": "percent",
//!       "values": [{ "elapsed_since_start_ns": 0, "value": 12.5 }]
//!     }
//!   }
//! }
//! ```
//!
//! Other top-level profile fields are ignored. Measurements come back
//! ordered by name.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProfileError, Result};
use crate::measurement::{Measurement, Sample, Unit};

/// Name prefix of per-core CPU usage measurements.
pub const CPU_USAGE_PREFIX: &str = "cpu_usage";

/// Name prefix of memory footprint measurements.
pub const MEMORY_FOOTPRINT_PREFIX: &str = "memory_footprint";

/// Name prefix of native memory footprint measurements.
pub const MEMORY_NATIVE_FOOTPRINT_PREFIX: &str = "memory_native_footprint";

#[derive(Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    measurements: BTreeMap<String, RawMeasurement>,
}

#[derive(Deserialize)]
struct RawMeasurement {
    unit: Unit,
    #[serde(default)]
    values: Vec<Sample>,
}

/// The charts a profile view typically draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartPreset {
    /// Per-core CPU usage.
    Cpu,
    /// Memory footprint, managed and native.
    Memory,
}

impl ChartPreset {
    /// Name prefixes selected by this preset.
    pub fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Cpu => &[CPU_USAGE_PREFIX],
            Self::Memory => &[MEMORY_FOOTPRINT_PREFIX, MEMORY_NATIVE_FOOTPRINT_PREFIX],
        }
    }
}

/// An ordered set of measurements taken from one profile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementSet {
    measurements: Vec<Measurement>,
}

impl MeasurementSet {
    /// Parses a profile document and validates every measurement.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Parse`] for malformed JSON and
    /// [`MeasurementError`](crate::error::MeasurementError) for empty names
    /// or non-finite values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: ProfileDocument =
            serde_json::from_str(json).map_err(|e| ProfileError::Parse { source: e })?;

        let measurements: Vec<Measurement> = document
            .measurements
            .into_iter()
            .map(|(name, raw)| Measurement::new(name, raw.unit, raw.values))
            .collect();

        for measurement in &measurements {
            measurement.validate()?;
        }

        tracing::debug!(count = measurements.len(), "loaded profile measurements");
        Ok(Self { measurements })
    }

    /// Reads and parses a profile document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Read`] if the file cannot be read, otherwise
    /// the errors of [`MeasurementSet::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| ProfileError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&data)
    }

    /// Returns the measurements whose name starts with `prefix`.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        self.with_any_prefix(&[prefix])
    }

    /// Returns the measurements selected by a preset.
    #[must_use]
    pub fn for_preset(&self, preset: ChartPreset) -> Self {
        self.with_any_prefix(preset.prefixes())
    }

    fn with_any_prefix(&self, prefixes: &[&str]) -> Self {
        let measurements = self
            .measurements
            .iter()
            .filter(|m| prefixes.iter().any(|p| m.name.starts_with(p)))
            .cloned()
            .collect();
        Self { measurements }
    }

    /// The measurements, in order.
    pub fn as_slice(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FlamechartError, MeasurementError};

    const PROFILE: &str = r#"{
        "platform": "cocoa",
        "measurements": {
            "memory_footprint": {"unit": "byte", "values": [
                {"elapsed_since_start_ns": 0, "value": 1000}
            ]},
            "cpu_usage_1": {"unit": "percent", "values": []},
            "cpu_usage_0": {"unit": "percent", "values": [
                {"elapsed_since_start_ns": 10, "value": 1.5},
                {"elapsed_since_start_ns": 20, "value": 2.5}
            ]},
            "memory_native_footprint": {"unit": "byte"}
        }
    }"#;

    #[test]
    fn test_measurements_ordered_by_name() {
        let set = MeasurementSet::from_json_str(PROFILE).unwrap();
        let names: Vec<_> = set.as_slice().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "cpu_usage_0",
                "cpu_usage_1",
                "memory_footprint",
                "memory_native_footprint"
            ]
        );
        assert_eq!(set.as_slice()[0].values[1], Sample::new(20, 2.5));
        assert!(set.as_slice()[3].is_empty());
    }

    #[test]
    fn test_presets() {
        let set = MeasurementSet::from_json_str(PROFILE).unwrap();
        assert_eq!(set.for_preset(ChartPreset::Cpu).len(), 2);

        let memory = set.for_preset(ChartPreset::Memory);
        assert_eq!(memory.len(), 2);
        assert!(memory.as_slice().iter().all(|m| m.unit == Unit::Bytes));

        assert_eq!(set.with_prefix("gpu").len(), 0);
    }

    #[test]
    fn test_missing_measurements_is_empty() {
        let set = MeasurementSet::from_json_str(r#"{"version": "1"}"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MeasurementSet::from_json_str("{"),
            Err(FlamechartError::Profile(ProfileError::Parse { .. }))
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{"measurements": {"": {"unit": "count"}}}"#;
        assert!(matches!(
            MeasurementSet::from_json_str(json),
            Err(FlamechartError::Measurement(MeasurementError::EmptyName))
        ));
    }
}
