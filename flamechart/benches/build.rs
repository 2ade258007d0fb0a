//! Benchmarks for chart construction.
//!
//! Run with: `cargo bench -p flamechart -- build`

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use flamechart::chart::FlamegraphChart;
use flamechart::measurement::{Measurement, Sample, Unit};
use flamechart::options::ChartOptions;
use flamechart::rect::Rect;

/// Creates `series_count` CPU measurements with `samples` samples each,
/// spaced 10ms apart.
fn setup_measurements(series_count: usize, samples: usize) -> Vec<Measurement> {
    (0..series_count)
        .map(|core| {
            let values = (0..samples)
                .map(|i| {
                    let value = f64::from(((i * 7 + core * 13) % 100) as u32);
                    Sample::new(i as u64 * 10_000_000, value)
                })
                .collect();
            Measurement::new(format!("cpu_usage_{core}"), Unit::Percent, values)
        })
        .collect()
}

fn bench_build_series_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("build/series_count");
    let base = Rect::new(0.0, 0.0, 1000.0, 100.0);
    let options = ChartOptions::default();

    for count in [1, 4, 8, 16] {
        let measurements = setup_measurements(count, 1_000);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                FlamegraphChart::new(
                    black_box(base),
                    black_box(Some(measurements.as_slice())),
                    &[],
                    &options,
                )
            });
        });
    }

    group.finish();
}

fn bench_build_long_profile(c: &mut Criterion) {
    let measurements = setup_measurements(8, 60_000);
    let base = Rect::new(0.0, 0.0, 1000.0, 100.0);
    let options = ChartOptions::default();

    c.bench_function("build/8_cores_10min", |b| {
        b.iter(|| {
            FlamegraphChart::new(
                black_box(base),
                black_box(Some(measurements.as_slice())),
                &[],
                &options,
            )
        });
    });
}

criterion_group!(benches, bench_build_series_count, bench_build_long_profile);
criterion_main!(benches);
