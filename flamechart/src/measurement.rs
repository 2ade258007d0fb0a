//! Measurement input types.
//!
//! A [`Measurement`] is one named series of timestamped samples as recorded
//! by a profiler (CPU usage per core, memory footprint, energy usage). The
//! [`Unit`] tag tells the chart how to format its values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MeasurementError, Result};

/// A single sample within a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Nanoseconds elapsed since the profile started.
    pub elapsed_since_start_ns: u64,
    /// The sampled value, interpreted according to the measurement's unit.
    pub value: f64,
}

impl Sample {
    /// Creates a new sample.
    pub const fn new(elapsed_since_start_ns: u64, value: f64) -> Self {
        Self {
            elapsed_since_start_ns,
            value,
        }
    }
}

/// Semantic unit of a measurement's values.
///
/// Recognised tags map to dedicated formatting rules. Anything else is
/// carried verbatim in [`Unit::Other`] and formatted as a plain number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// Percentage, e.g. CPU utilisation.
    Percent,
    /// Nanoseconds.
    Nanoseconds,
    /// Microseconds.
    Microseconds,
    /// Milliseconds.
    Milliseconds,
    /// Seconds.
    Seconds,
    /// Bytes, formatted with base-10 prefixes.
    Bytes,
    /// Dimensionless count.
    Count,
    /// Nanojoules, for energy measurements.
    Nanojoules,
    /// Watts, for power measurements.
    Watts,
    /// A unit tag the chart does not know about.
    Other(String),
}

impl Unit {
    /// Returns the canonical tag for this unit.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Percent => "percent",
            Self::Nanoseconds => "nanosecond",
            Self::Microseconds => "microsecond",
            Self::Milliseconds => "millisecond",
            Self::Seconds => "second",
            Self::Bytes => "byte",
            Self::Count => "count",
            Self::Nanojoules => "nanojoule",
            Self::Watts => "watt",
            Self::Other(tag) => tag,
        }
    }

    /// Returns how many nanoseconds one unit of this duration represents, or
    /// `None` if the unit is not a duration.
    pub fn nanos_per_unit(&self) -> Option<f64> {
        match self {
            Self::Nanoseconds => Some(1.0),
            Self::Microseconds => Some(1e3),
            Self::Milliseconds => Some(1e6),
            Self::Seconds => Some(1e9),
            _ => None,
        }
    }
}

impl FromStr for Unit {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "percent" | "percentage" => Self::Percent,
            "nanosecond" | "nanoseconds" => Self::Nanoseconds,
            "microsecond" | "microseconds" => Self::Microseconds,
            "millisecond" | "milliseconds" => Self::Milliseconds,
            "second" | "seconds" => Self::Seconds,
            "byte" | "bytes" => Self::Bytes,
            "count" => Self::Count,
            "nanojoule" | "nanojoules" => Self::Nanojoules,
            "watt" | "watts" => Self::Watts,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for Unit {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named input series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Identifier of the series, e.g. `cpu_usage_0`.
    pub name: String,
    /// Unit of every value in `values`.
    pub unit: Unit,
    /// Samples in recording order. A missing list is treated as empty.
    #[serde(default)]
    pub values: Vec<Sample>,
}

impl Measurement {
    /// Creates a new measurement.
    pub fn new(name: impl Into<String>, unit: Unit, values: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            unit,
            values,
        }
    }

    /// Creates a measurement from `(elapsed_since_start_ns, value)` pairs.
    pub fn from_pairs(name: impl Into<String>, unit: Unit, pairs: &[(u64, f64)]) -> Self {
        let values = pairs
            .iter()
            .map(|&(elapsed, value)| Sample::new(elapsed, value))
            .collect();
        Self::new(name, unit, values)
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the measurement has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validates the measurement.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError`] if the name is empty or any sample value
    /// is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(MeasurementError::EmptyName.into());
        }

        if let Some((index, sample)) = self
            .values
            .iter()
            .enumerate()
            .find(|(_, s)| !s.value.is_finite())
        {
            return Err(MeasurementError::NonFiniteValue {
                name: self.name.clone(),
                index,
                value: sample.value,
            }
            .into());
        }

        Ok(())
    }
}
