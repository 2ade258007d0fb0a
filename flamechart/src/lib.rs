//! # flamechart
//!
//! Measurement series, axis domains and value formatters for profiling
//! flamegraph charts.
//!
//! Profilers record side-channel measurements next to their samples: CPU
//! usage per core, memory footprint, energy. flamechart turns those
//! measurements into everything a rendering layer needs to draw them under a
//! flamegraph, without doing any rendering itself.
//!
//! **Status**: This crate is in early development. The API is not yet stable.
//!
//! ## Key Properties
//!
//! - Single pass over the samples, no allocation beyond the output
//! - Pure: the same inputs always produce the same chart
//! - Never fails; sparse or missing data degrades to placeholder series
//! - Colours and formatting are pluggable at explicit seams
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flamechart::{ChartOptions, ChartPreset, FlamegraphChart, MeasurementSet, Rect};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = MeasurementSet::load("./profile.json")?;
//! let cpu = profile.for_preset(ChartPreset::Cpu);
//!
//! let chart = FlamegraphChart::new(
//!     Rect::new(0.0, 0.0, 1000.0, 100.0),
//!     Some(cpu.as_slice()),
//!     &[],
//!     &ChartOptions::default(),
//! );
//!
//! for series in &chart.series {
//!     println!("{} ({}): {} points", series.name, series.kind, series.points.len());
//! }
//! println!("peak: {}", chart.tooltip_formatter.format(chart.domains.y[1]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`FlamegraphChart`]: The built chart (series, domains, config space, formatters)
//! - [`ChartBuilder`]: Builds charts with a custom [`ColorResolver`]
//! - [`Measurement`]: One named input series of [`Sample`]s
//! - [`MeasurementSet`]: Measurements loaded from a profile document
//!
//! ## Modules
//!
//! - [`chart`]: Chart construction
//! - [`domain`]: Domain fold and x-minimum policy
//! - [`series`]: Output series types
//! - [`measurement`]: Input types and units
//! - [`profile`]: Profile document loading and presets
//! - [`format`]: Value and timeline formatters
//! - [`color`]: Colour components and resolvers
//! - [`rect`]: Plot-space rectangles
//! - [`options`]: Chart options
//! - [`error`]: Error types

pub mod chart;
pub mod color;
pub mod domain;
pub mod error;
pub mod format;
pub mod measurement;
pub mod options;
pub mod profile;
pub mod rect;
pub mod series;

// Re-export primary API types at crate root for convenience.
pub use chart::{ChartBuilder, FlamegraphChart, MIN_RENDERABLE_POINTS};
pub use color::{ColorComponents, ColorResolver, RgbaResolver};
pub use domain::{Domain, DomainAccumulator, XMinTracking};
pub use error::{FlamechartError, Result};
pub use format::{FormatRule, TimelineFormatter, ValueFormatter};
pub use measurement::{Measurement, Sample, Unit};
pub use options::ChartOptions;
pub use profile::{ChartPreset, MeasurementSet};
pub use rect::Rect;
pub use series::{Point, Series, SeriesKind};
