//! Unit-aware value formatting.
//!
//! Each [`Unit`] maps to one [`FormatRule`] through the pure function
//! [`FormatRule::for_unit`]. A [`ValueFormatter`] pairs that rule with a
//! precision and renders numbers for axis labels and tooltips. The
//! [`TimelineFormatter`] renders elapsed nanoseconds as `mm:ss.mmm`.

use serde::{Deserialize, Serialize};

use crate::measurement::Unit;

/// Duration abbreviations, largest first, with their size in nanoseconds.
const DURATION_STEPS: [(&str, f64); 6] = [
    ("d", 86_400e9),
    ("hr", 3_600e9),
    ("min", 60e9),
    ("s", 1e9),
    ("ms", 1e6),
    ("μs", 1e3),
];

/// Base-10 byte suffixes.
const BYTE_SUFFIXES: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Energy suffixes starting at nanojoules.
const ENERGY_SUFFIXES: [&str; 5] = ["nJ", "μJ", "mJ", "J", "kJ"];

/// How values of a unit are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatRule {
    /// `12.50%`.
    Percent,
    /// Abbreviated duration, from a source unit of `nanos_per_unit` ns.
    Duration {
        /// Nanoseconds per source unit.
        nanos_per_unit: f64,
    },
    /// Base-10 scaled bytes, `1.50 MB`.
    Bytes,
    /// Scaled energy starting at nanojoules, `2.00 mJ`.
    Energy,
    /// Power in watts, `3.00 W`.
    Power,
    /// Plain number.
    Plain,
}

impl FormatRule {
    /// Resolves the rule for a unit.
    pub fn for_unit(unit: &Unit) -> Self {
        if let Some(nanos_per_unit) = unit.nanos_per_unit() {
            return Self::Duration { nanos_per_unit };
        }
        match unit {
            Unit::Percent => Self::Percent,
            Unit::Bytes => Self::Bytes,
            Unit::Nanojoules => Self::Energy,
            Unit::Watts => Self::Power,
            _ => Self::Plain,
        }
    }
}

/// Formats numbers of one unit at a fixed precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFormatter {
    unit: Unit,
    precision: usize,
}

impl ValueFormatter {
    /// Precision of the general axis formatter.
    pub const DEFAULT_PRECISION: usize = 0;

    /// Precision of the tooltip formatter.
    pub const TOOLTIP_PRECISION: usize = 2;

    /// Creates a formatter for `unit` rendering `precision` decimal places.
    pub fn for_unit(unit: &Unit, precision: usize) -> Self {
        Self {
            unit: unit.clone(),
            precision,
        }
    }

    /// The unit this formatter renders.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Number of decimal places.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The formatting rule in effect.
    pub fn rule(&self) -> FormatRule {
        FormatRule::for_unit(&self.unit)
    }

    /// Formats a single value.
    pub fn format(&self, value: f64) -> String {
        let p = self.precision;
        match self.rule() {
            FormatRule::Percent => format!("{value:.p$}%"),
            FormatRule::Duration { nanos_per_unit } => format_duration(value * nanos_per_unit, p),
            FormatRule::Bytes => format!("{}", Scaled::new(value, 1000.0, &BYTE_SUFFIXES, p)),
            FormatRule::Energy => {
                format!("{}", Scaled::new(value, 1000.0, &ENERGY_SUFFIXES, p))
            }
            FormatRule::Power => format!("{value:.p$} W"),
            FormatRule::Plain => format!("{value:.p$}"),
        }
    }
}

/// Renders a nanosecond count with the largest abbreviation it fills.
fn format_duration(nanos: f64, precision: usize) -> String {
    let magnitude = nanos.abs();
    for (suffix, size) in DURATION_STEPS {
        if magnitude >= size {
            return format!("{:.precision$}{suffix}", nanos / size);
        }
    }
    format!("{nanos:.precision$}ns")
}

/// A value divided down through a ladder of suffixes.
struct Scaled<'a> {
    value: f64,
    suffix: &'a str,
    precision: usize,
}

impl<'a> Scaled<'a> {
    fn new(value: f64, base: f64, suffixes: &'a [&'a str], precision: usize) -> Self {
        let mut value = value;
        let mut index = 0;
        while value.abs() >= base && index + 1 < suffixes.len() {
            value /= base;
            index += 1;
        }
        Self {
            value,
            suffix: suffixes[index],
            precision,
        }
    }
}

impl std::fmt::Display for Scaled<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.*} {}", self.precision, self.value, self.suffix)
    }
}

/// Formats elapsed nanoseconds as `mm:ss.mmm` for the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineFormatter;

impl TimelineFormatter {
    /// The nanosecond-denominated timeline formatter.
    pub const fn nanoseconds() -> Self {
        Self
    }

    /// Formats a nanosecond offset. Minutes are not wrapped into hours.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Floored non-negative values
    pub fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let total_millis = (value.abs() / 1e6).floor() as u64;
        let minutes = total_millis / 60_000;
        let seconds = total_millis / 1_000 % 60;
        let millis = total_millis % 1_000;
        format!("{sign}{minutes:02}:{seconds:02}.{millis:03}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(unit: Unit, precision: usize, value: f64) -> String {
        ValueFormatter::for_unit(&unit, precision).format(value)
    }

    #[test]
    fn test_rule_mapping() {
        assert_eq!(FormatRule::for_unit(&Unit::Percent), FormatRule::Percent);
        assert_eq!(
            FormatRule::for_unit(&Unit::Milliseconds),
            FormatRule::Duration {
                nanos_per_unit: 1e6
            }
        );
        assert_eq!(FormatRule::for_unit(&Unit::Count), FormatRule::Plain);
        assert_eq!(
            FormatRule::for_unit(&Unit::Other("frames".to_string())),
            FormatRule::Plain
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(fmt(Unit::Percent, 0, 42.0), "42%");
        assert_eq!(fmt(Unit::Percent, 2, 12.5), "12.50%");
    }

    #[test]
    fn test_durations() {
        assert_eq!(fmt(Unit::Nanoseconds, 2, 1_500_000.0), "1.50ms");
        assert_eq!(fmt(Unit::Nanoseconds, 0, 250.0), "250ns");
        assert_eq!(fmt(Unit::Microseconds, 1, 2_500.0), "2.5ms");
        assert_eq!(fmt(Unit::Milliseconds, 0, 3_000.0), "3s");
        assert_eq!(fmt(Unit::Seconds, 1, 90.0), "1.5min");
        assert_eq!(fmt(Unit::Seconds, 0, 7_200.0), "2hr");
        assert_eq!(fmt(Unit::Seconds, 0, 172_800.0), "2d");
        assert_eq!(fmt(Unit::Nanoseconds, 2, -1_500_000.0), "-1.50ms");
        assert_eq!(fmt(Unit::Nanoseconds, 0, 0.0), "0ns");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(fmt(Unit::Bytes, 0, 512.0), "512 B");
        assert_eq!(fmt(Unit::Bytes, 2, 1_500_000.0), "1.50 MB");
        assert_eq!(fmt(Unit::Bytes, 1, 2_000_000_000_000_000_000.0), "2000.0 PB");
    }

    #[test]
    fn test_energy_and_power() {
        assert_eq!(fmt(Unit::Nanojoules, 2, 2_000_000.0), "2.00 mJ");
        assert_eq!(fmt(Unit::Watts, 1, 3.26), "3.3 W");
    }

    #[test]
    fn test_plain() {
        assert_eq!(fmt(Unit::Count, 0, 17.0), "17");
        assert_eq!(fmt(Unit::Other("frames".to_string()), 2, 1.0), "1.00");
    }

    #[test]
    fn test_formatter_serde() {
        let f = ValueFormatter::for_unit(&Unit::Percent, 2);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json, serde_json::json!({"unit": "percent", "precision": 2}));

        let back: ValueFormatter = serde_json::from_value(json).unwrap();
        assert_eq!(back.format(1.0), "1.00%");
    }

    #[test]
    fn test_timeline() {
        let t = TimelineFormatter::nanoseconds();
        assert_eq!(t.format(0.0), "00:00.000");
        assert_eq!(t.format(1_500_000_000.0), "00:01.500");
        assert_eq!(t.format(61_250_000_000.0), "01:01.250");
        assert_eq!(t.format(-2_000_000_000.0), "-00:02.000");
        assert_eq!(t.format(6_000_000_000_000.0), "100:00.000");
    }
}
