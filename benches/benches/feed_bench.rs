//! # Feed Benchmarks
//!
//! Measures decoding of a 100-record ThingSpeak channel and dashboard assembly.
//!
//! Run: `cargo bench --bench feed_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kheti_core::SensorKind;
use kheti_feed::{parse_channel, Dashboard, DashboardConfig, FieldMapping};

/// Canal sintético com o mesmo formato do ThingSpeak
fn channel_json(records: usize) -> String {
    let feeds: Vec<String> = (0..records)
        .map(|i| {
            format!(
                r#"{{"created_at": "2025-09-01T{:02}:{:02}:00Z", "entry_id": {}, "field1": "{:.1}", "field2": "{:.0}", "field3": "{}", "field4": "{:.2}"}}"#,
                (i / 4) % 24,
                (i % 4) * 15,
                i + 1,
                20.0 + (i % 10) as f64,
                50.0 + (i % 30) as f64,
                1500 + (i * 17) % 2000,
                6.0 + (i % 20) as f64 / 10.0,
            )
        })
        .collect();
    format!(r#"{{"channel": {{"id": 1}}, "feeds": [{}]}}"#, feeds.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let json = channel_json(100);
    let mapping = FieldMapping::default();

    c.bench_function("parse_channel_100", |b| {
        b.iter(|| black_box(parse_channel(black_box(&json), &mapping)))
    });
}

fn bench_dashboard(c: &mut Criterion) {
    let farm = parse_channel(&channel_json(100), &FieldMapping::default())
        .expect("synthetic channel should parse");
    let config = DashboardConfig::default();

    c.bench_function("dashboard_build", |b| {
        b.iter(|| black_box(Dashboard::build(black_box(&farm), None, &config)))
    });

    c.bench_function("stats_temperature", |b| {
        b.iter(|| black_box(farm.stats(SensorKind::Temperature)))
    });
}

criterion_group!(benches, bench_parse, bench_dashboard);
criterion_main!(benches);
