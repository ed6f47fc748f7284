//! Benchmarks for coefficient synthesis and export

use allpass_core::math::{feedback_coefficients, feedforward_coefficients};
use allpass_core::{AllpassFilter, DesignOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;

fn create_poles(npoles: usize) -> Vec<Complex64> {
    (0..npoles)
        .map(|k| Complex64::from_polar(0.5 + 0.4 * (k as f64 / npoles as f64), 0.7 * k as f64 + 0.1))
        .collect()
}

fn bench_feedback_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_coefficients");

    for npoles in [2, 8, 32, 128].iter() {
        let poles = create_poles(*npoles);
        let id = BenchmarkId::from_parameter(npoles);

        group.bench_with_input(id, npoles, |b, _| {
            b.iter(|| {
                let a = feedback_coefficients(black_box(&poles)).expect("finite poles");
                black_box(feedforward_coefficients(&a))
            })
        });
    }

    group.finish();
}

fn bench_export_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_text");

    for npoles in [4, 16, 64].iter() {
        let filter = AllpassFilter::from_positions(&create_poles(*npoles), DesignOptions::default())
            .expect("poles inside unit disc");
        let table = filter.coefficients();
        let id = BenchmarkId::from_parameter(npoles);

        group.bench_with_input(id, npoles, |b, _| b.iter(|| black_box(table.export_text())));
    }

    group.finish();
}

criterion_group!(benches, bench_feedback_expansion, bench_export_text);
criterion_main!(benches);
