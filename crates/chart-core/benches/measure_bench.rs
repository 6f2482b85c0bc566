// File: crates/chart-core/benches/measure_bench.rs
// Summary: Benchmarks the full measure pipeline (stacking, bounds, scaling, materializing) for stacked areas.

use std::time::Duration;

use chart_core::{Animation, CartesianChart, RecordingSurface, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_values(n: usize, phase: f64) -> Vec<f64> {
    // simple waveform with drift, kept positive for stacking
    (0..n).map(|i| (i as f64 * 0.01 + phase).sin() * 10.0 + 12.0 + i as f64 * 0.0001).collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    for &n in &[1_000usize, 10_000usize] {
        for &series in &[1usize, 4usize] {
            let mut chart = CartesianChart::new(1280.0, 720.0);
            chart.animation = Animation::none();
            for s in 0..series {
                chart.add_series(Series::stacked_area(gen_values(n, s as f64)));
            }
            let surface = RecordingSurface::new(1280.0, 720.0);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_s{series}")), &n, |b, _| {
                b.iter(|| {
                    chart.invalidate();
                    let _ = black_box(chart.measure(&surface, Duration::ZERO));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_measure);
criterion_main!(benches);
