use bodymetrics::api::{assess, assess_batch};
use bodymetrics::config::PlannerParams;
use bodymetrics::units::{RawInput, UnitScheme};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_inputs(n: usize) -> Vec<RawInput> {
    (0..n)
        .map(|i| RawInput {
            weight_value: 40.0 + (i % 120) as f64,
            ..RawInput::defaults_for(UnitScheme::Metric)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let params = PlannerParams::default();
    let raw = RawInput::default();
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

    c.bench_function("assess (single)", |b| {
        b.iter(|| assess(black_box(&raw), black_box(&params)))
    });

    let assessment = assess(&raw, &params).unwrap();
    c.bench_function("report format", |b| {
        b.iter(|| black_box(&assessment).report(date))
    });

    let inputs = sample_inputs(10_000);
    c.bench_function("assess_batch (10k)", |b| {
        b.iter(|| assess_batch(black_box(&inputs), black_box(&params)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
