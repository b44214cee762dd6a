//! # Interpretation Benchmarks
//!
//! Measures calibration, band classification and weather lookup.
//!
//! Run: `cargo bench --bench interpret_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kheti_core::prelude::*;

/// Benchmark soil-moisture calibration
fn bench_calibration(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibration");
    let cal = MoistureCalibration::default();

    for raw in [0.0, 1500.0, 2500.0, 4095.0] {
        group.bench_with_input(BenchmarkId::new("percentage", raw as u32), &raw, |b, &raw| {
            b.iter(|| black_box(cal.percentage(black_box(raw))))
        });
    }

    group.bench_function("equal_bounds", |b| {
        b.iter(|| black_box(calibrate(black_box(2000.0), 1800.0, 1800.0)))
    });

    group.finish();
}

/// Benchmark band classifiers
fn bench_bands(c: &mut Criterion) {
    let mut group = c.benchmark_group("bands");

    group.bench_function("temperature", |b| {
        b.iter(|| black_box(TemperatureBand::classify(black_box(31.2))))
    });

    group.bench_function("humidity", |b| {
        b.iter(|| black_box(HumidityBand::classify(black_box(72.0))))
    });

    group.bench_function("ph_invalid", |b| {
        b.iter(|| black_box(PhBand::classify(black_box(15.0))))
    });

    group.finish();
}

/// Benchmark WMO lookup (hit and miss)
fn bench_weather(c: &mut Criterion) {
    let mut group = c.benchmark_group("weather");

    group.bench_function("known", |b| b.iter(|| black_box(describe_weather(black_box(63)))));
    group.bench_function("unknown", |b| b.iter(|| black_box(describe_weather(black_box(999)))));

    group.finish();
}

/// Benchmark a full snapshot interpretation
fn bench_interpret(c: &mut Criterion) {
    let snapshot = SensorSnapshot {
        temperature: Some(26.4),
        humidity: Some(58.0),
        soil_moisture: Some(2310.0),
        ph: Some(6.7),
    };
    let cal = MoistureCalibration::default();

    c.bench_function("interpret_snapshot", |b| {
        b.iter(|| black_box(interpret(black_box(&snapshot), Some(&cal))))
    });
}

criterion_group!(
    benches,
    bench_calibration,
    bench_bands,
    bench_weather,
    bench_interpret,
);
criterion_main!(benches);
