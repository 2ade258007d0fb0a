//! CLI for flamechart.
//!
//! Builds measurement charts from profile documents and formats values the
//! way the chart would.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flamechart::{
    ChartBuilder, ChartOptions, ChartPreset, FlamegraphChart, MeasurementSet, SeriesKind,
    TimelineFormatter, Unit, ValueFormatter, XMinTracking,
};
use tracing_subscriber::EnvFilter;

/// flamechart: flamegraph measurement chart builder.
#[derive(Parser)]
#[command(name = "flamechart", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Build a chart from the measurements of a profile.
    Build {
        /// Path to the profile JSON document.
        profile: PathBuf,

        /// Which measurements to chart.
        #[arg(long, default_value = "cpu")]
        preset: Preset,

        /// Force every series to this kind.
        #[arg(long)]
        kind: Option<KindArg>,

        /// How the x minimum of the domain is tracked.
        #[arg(long)]
        x_min: Option<XMinArg>,

        /// Chart options JSON file. Flags override its values.
        #[arg(long)]
        options: Option<PathBuf>,

        /// Width of the base rectangle.
        #[arg(long)]
        width: Option<f64>,

        /// Height of the base rectangle.
        #[arg(long)]
        height: Option<f64>,

        /// Output format.
        #[arg(long, default_value = "json")]
        output: OutputFormat,
    },

    /// Format a single value for a unit.
    Format {
        /// Unit tag, e.g. "percent", "nanosecond", "byte".
        unit: String,

        /// Value to format.
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Number of decimal places.
        #[arg(long, default_value = "2")]
        precision: usize,

        /// Format as a timeline offset (value in nanoseconds) instead.
        #[arg(long)]
        timeline: bool,
    },
}

/// Measurement selection for `build`.
#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Per-core CPU usage.
    Cpu,
    /// Memory footprint.
    Memory,
    /// Every measurement in the profile.
    All,
}

/// Series kind override.
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    /// Stroked lines.
    Line,
    /// Filled areas.
    Area,
}

impl From<KindArg> for SeriesKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Line => SeriesKind::Line,
            KindArg::Area => SeriesKind::Area,
        }
    }
}

/// X-minimum tracking policy.
#[derive(Clone, Copy, ValueEnum)]
enum XMinArg {
    /// Keep the minimum pinned at zero.
    Legacy,
    /// Track the smallest elapsed time.
    Tracked,
}

impl From<XMinArg> for XMinTracking {
    fn from(arg: XMinArg) -> Self {
        match arg {
            XMinArg::Legacy => XMinTracking::Legacy,
            XMinArg::Tracked => XMinTracking::Tracked,
        }
    }
}

/// Output format for `build`.
#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// The full chart as JSON.
    Json,
    /// One line per series.
    Summary,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            profile,
            preset,
            kind,
            x_min,
            options,
            width,
            height,
            output,
        } => {
            let overrides = Overrides {
                kind,
                x_min,
                width,
                height,
            };
            cmd_build(
                &profile,
                preset,
                options.as_ref(),
                &overrides,
                &output,
                &mut std::io::stdout().lock(),
            )
        }
        Commands::Format {
            unit,
            value,
            precision,
            timeline,
        } => {
            cmd_format(&unit, value, precision, timeline);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("command failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Flag values that override the options file.
struct Overrides {
    kind: Option<KindArg>,
    x_min: Option<XMinArg>,
    width: Option<f64>,
    height: Option<f64>,
}

/// Resolves chart options from an optional file plus flag overrides.
fn resolve_options(
    options_path: Option<&PathBuf>,
    overrides: &Overrides,
) -> Result<ChartOptions, Box<dyn std::error::Error>> {
    let mut options = match options_path {
        Some(path) => ChartOptions::load(path)?,
        None => ChartOptions::default(),
    };

    if let Some(kind) = overrides.kind {
        options.kind = Some(kind.into());
    }
    if let Some(x_min) = overrides.x_min {
        options.x_min_tracking = x_min.into();
    }
    if let Some(width) = overrides.width {
        options.base_rect.width = width;
    }
    if let Some(height) = overrides.height {
        options.base_rect.height = height;
    }

    options.validate()?;
    Ok(options)
}

/// Implements `flamechart build <profile>`.
fn cmd_build(
    profile_path: &PathBuf,
    preset: Preset,
    options_path: Option<&PathBuf>,
    overrides: &Overrides,
    output: &OutputFormat,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = resolve_options(options_path, overrides)?;

    let profile = MeasurementSet::load(profile_path)?;
    let selected = match preset {
        Preset::Cpu => profile.for_preset(ChartPreset::Cpu),
        Preset::Memory => profile.for_preset(ChartPreset::Memory),
        Preset::All => profile,
    };
    tracing::info!(
        profile = %profile_path.display(),
        measurements = selected.len(),
        "building chart"
    );

    let chart = ChartBuilder::from_options(options).build(Some(selected.as_slice()), &[]);

    match output {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&chart)?)?;
        }
        OutputFormat::Summary => write_summary(&chart, out)?,
    }

    Ok(())
}

/// Writes one line per series plus the chart bounds.
fn write_summary(chart: &FlamegraphChart, out: &mut impl Write) -> std::io::Result<()> {
    if chart.is_empty() {
        return writeln!(out, "No measurements to chart");
    }

    let [x_min, x_max] = chart.domains.x;
    #[allow(clippy::cast_precision_loss)] // Display-only conversion
    let (start, end) = (x_min as f64, x_max as f64);
    writeln!(
        out,
        "Time: {} .. {}",
        chart.timeline_formatter.format(start),
        chart.timeline_formatter.format(end)
    )?;
    writeln!(
        out,
        "Range: {} .. {}",
        chart.formatter.format(chart.domains.y[0]),
        chart.formatter.format(chart.domains.y[1])
    )?;
    writeln!(out, "Series: {}", chart.series.len())?;
    for series in &chart.series {
        writeln!(
            out,
            "  - {} ({}, {} points, mean {}, color {})",
            series.name,
            series.kind,
            series.points.len(),
            chart.tooltip_formatter.format(series.mean_y()),
            series.line_color
        )?;
    }
    Ok(())
}

/// Implements `flamechart format <unit> <value>`.
fn cmd_format(unit: &str, value: f64, precision: usize, timeline: bool) {
    if timeline {
        println!("{}", TimelineFormatter::nanoseconds().format(value));
        return;
    }

    let unit = Unit::from(unit.to_string());
    println!("{}", ValueFormatter::for_unit(&unit, precision).format(value));
}
