//! Building a flamegraph measurement chart.
//!
//! [`FlamegraphChart`] turns a list of [`Measurement`]s into drawable
//! [`Series`], the [`Domain`] that bounds them, a config space sized to the
//! y range, and the formatters the rendering layer uses for axis labels,
//! tooltips and the timeline.
//!
//! # Example
//!
//! ```rust
//! use flamechart::{ChartOptions, FlamegraphChart, Measurement, Rect, SeriesKind, Unit};
//!
//! let measurements = vec![
//!     Measurement::from_pairs("cpu_usage_0", Unit::Percent, &[(0, 10.0), (1, 20.0), (2, 30.0)]),
//!     Measurement::from_pairs("cpu_usage_1", Unit::Percent, &[(0, 5.0), (1, 5.0), (2, 5.0)]),
//! ];
//!
//! let chart = FlamegraphChart::new(
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Some(&measurements),
//!     &[],
//!     &ChartOptions::default(),
//! );
//!
//! assert_eq!(chart.series[0].name, "cpu_usage_0");
//! assert_eq!(chart.series[0].kind, SeriesKind::Line);
//! assert_eq!(chart.domains.y, [5.0, 33.0]);
//! assert_eq!(chart.config_space.height, 28.0);
//! assert_eq!(chart.tooltip_formatter.format(12.5), "12.50%");
//! ```

use serde::Serialize;

use crate::color::{ColorComponents, ColorResolver, RgbaResolver, color_at};
use crate::domain::{Domain, DomainAccumulator};
use crate::format::{TimelineFormatter, ValueFormatter};
use crate::measurement::{Measurement, Unit};
use crate::options::ChartOptions;
use crate::rect::Rect;
use crate::series::{Point, Series, SeriesKind};

/// Measurements with fewer samples than this keep placeholder points and do
/// not contribute to the domain.
pub const MIN_RENDERABLE_POINTS: usize = 3;

/// Sort key for a series mean. NaN ranks below every number, and `-0.0`
/// ranks equal to `0.0`, so `f64::total_cmp` gives the intended order.
fn sort_rank(mean: f64) -> f64 {
    if mean.is_nan() {
        f64::NEG_INFINITY
    } else {
        mean + 0.0
    }
}

/// A built measurement chart.
///
/// Constructed once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlamegraphChart {
    /// Series ordered by descending mean value.
    pub series: Vec<Series>,
    /// Bounds of every retained sample, with y headroom applied.
    pub domains: Domain,
    /// The base rectangle with its height set to the y span.
    pub config_space: Rect,
    /// Axis label formatter for the first measurement's unit.
    pub formatter: ValueFormatter,
    /// Higher-precision formatter for tooltips.
    pub tooltip_formatter: ValueFormatter,
    /// Time axis formatter.
    pub timeline_formatter: TimelineFormatter,
}

impl FlamegraphChart {
    /// Builds a chart with the default RGBA colour resolver.
    ///
    /// `colors` is indexed by measurement position and cycles if shorter
    /// than `measurements`. `None` or an empty slice produce
    /// [`FlamegraphChart::empty`].
    pub fn new(
        base: Rect,
        measurements: Option<&[Measurement]>,
        colors: &[ColorComponents],
        options: &ChartOptions,
    ) -> Self {
        ChartBuilder::new(base)
            .options(*options)
            .build(measurements, colors)
    }

    /// The chart produced when there is nothing to plot.
    pub fn empty(base: Rect) -> Self {
        Self {
            series: Vec::new(),
            domains: Domain::default(),
            config_space: base,
            formatter: ValueFormatter::for_unit(&Unit::Percent, 0),
            tooltip_formatter: ValueFormatter::for_unit(&Unit::Percent, 0),
            timeline_formatter: TimelineFormatter::nanoseconds(),
        }
    }

    /// Returns `true` if the chart has no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Builds [`FlamegraphChart`]s with a configurable colour resolver.
#[derive(Debug, Clone)]
pub struct ChartBuilder<R = RgbaResolver> {
    base: Rect,
    options: ChartOptions,
    resolver: R,
}

impl ChartBuilder {
    /// Creates a builder for the given base rectangle.
    pub fn new(base: Rect) -> Self {
        Self {
            base,
            options: ChartOptions::default(),
            resolver: RgbaResolver,
        }
    }

    /// Creates a builder whose base rectangle comes from `options`.
    pub fn from_options(options: ChartOptions) -> Self {
        Self::new(options.base_rect).options(options)
    }
}

impl<R: ColorResolver> ChartBuilder<R> {
    /// Replaces the colour resolver.
    pub fn resolver<S: ColorResolver>(self, resolver: S) -> ChartBuilder<S> {
        ChartBuilder {
            base: self.base,
            options: self.options,
            resolver,
        }
    }

    /// Replaces the options. The base rectangle is left unchanged.
    #[must_use]
    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Forces every series to `kind`.
    #[must_use]
    pub fn kind(mut self, kind: SeriesKind) -> Self {
        self.options.kind = Some(kind);
        self
    }

    /// Builds the chart.
    pub fn build(
        &self,
        measurements: Option<&[Measurement]>,
        colors: &[ColorComponents],
    ) -> FlamegraphChart {
        let Some(measurements) = measurements.filter(|m| !m.is_empty()) else {
            tracing::debug!("no measurements to chart");
            return FlamegraphChart::empty(self.base);
        };

        let kind = self
            .options
            .kind
            .unwrap_or_else(|| SeriesKind::default_for(measurements.len()));

        let mut accumulator = DomainAccumulator::new(self.options.x_min_tracking);
        let mut ranked = Vec::with_capacity(measurements.len());

        for (j, measurement) in measurements.iter().enumerate() {
            let color = self.resolver.resolve(&color_at(colors, j));
            let mut points = vec![Point::default(); measurement.values.len()];

            if measurement.values.len() < MIN_RENDERABLE_POINTS {
                tracing::debug!(
                    name = %measurement.name,
                    samples = measurement.values.len(),
                    "skipping sparse measurement"
                );
            } else {
                accumulator = accumulator.extend(&measurement.values);
                for (point, sample) in points.iter_mut().zip(&measurement.values) {
                    *point = Point::new(sample.elapsed_since_start_ns, sample.value);
                }
            }

            let series = Series {
                name: measurement.name.clone(),
                kind,
                line_color: color.clone(),
                fill_color: color,
                points,
            };
            ranked.push((sort_rank(series.mean_y()), series));
        }

        // Vec::sort_by is stable, so equal means keep input order.
        ranked.sort_by(|(a, _), (b, _)| b.total_cmp(a));
        let series: Vec<Series> = ranked.into_iter().map(|(_, s)| s).collect();

        let domains = accumulator.finish().with_headroom();
        let config_space = self.base.with_height(domains.y_span());

        let unit = &measurements[0].unit;
        let chart = FlamegraphChart {
            series,
            domains,
            config_space,
            formatter: ValueFormatter::for_unit(unit, ValueFormatter::DEFAULT_PRECISION),
            tooltip_formatter: ValueFormatter::for_unit(unit, ValueFormatter::TOOLTIP_PRECISION),
            timeline_formatter: TimelineFormatter::nanoseconds(),
        };

        tracing::trace!(
            series = chart.series.len(),
            x_min = chart.domains.x[0],
            x_max = chart.domains.x[1],
            y_min = chart.domains.y[0],
            y_max = chart.domains.y[1],
            "built flamegraph chart"
        );

        chart
    }
}
