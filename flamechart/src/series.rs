//! Drawable chart series.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a series is drawn by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// A stroked line, used when several series are overlaid.
    Line,
    /// A filled area, used for a single series.
    Area,
}

impl SeriesKind {
    /// Returns the kind used when the caller does not choose one.
    ///
    /// A lone series renders as an area; comparisons render as lines so the
    /// series do not occlude each other.
    pub const fn default_for(measurement_count: usize) -> Self {
        if measurement_count == 1 {
            Self::Area
        } else {
            Self::Line
        }
    }
}

impl FromStr for SeriesKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "area" => Ok(Self::Area),
            other => Err(format!("unknown series kind '{other}', expected line or area")),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => f.write_str("line"),
            Self::Area => f.write_str("area"),
        }
    }
}

/// A single plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Nanoseconds since profile start.
    pub x: u64,
    /// Sample value.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: u64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A renderable series produced from one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Name copied from the source measurement.
    pub name: String,
    /// Drawing style.
    pub kind: SeriesKind,
    /// Stroke colour.
    pub line_color: String,
    /// Fill colour. Always equal to `line_color`.
    pub fill_color: String,
    /// Points in sample order.
    pub points: Vec<Point>,
}

impl Series {
    /// Arithmetic mean of the series' y values, or `0.0` with no points.
    ///
    /// Placeholder points of a skipped measurement count as zeros.
    #[allow(clippy::cast_precision_loss)] // Point counts stay far below 2^52
    pub fn mean_y(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.points.iter().map(|p| p.y).sum();
        sum / self.points.len() as f64
    }
}
