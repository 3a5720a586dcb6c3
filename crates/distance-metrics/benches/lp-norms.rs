use criterion::{measurement, *};
use rand::prelude::*;

use distance_metrics::{chebyshev, euclidean, manhattan, minkowski, DistanceError};

fn random_pair(dimensionality: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vector = || (0..dimensionality).map(|_| rng.gen_range(-10.0..10.0)).collect();
    (vector(), vector())
}

fn bench_one(
    group: &mut BenchmarkGroup<'_, measurement::WallTime>,
    name: &str,
    p: f64,
    x: &[f64],
    y: &[f64],
    metric: fn(&[f64], &[f64]) -> Result<f64, DistanceError>,
) {
    let dimensionality = x.len();

    let id = BenchmarkId::new(format!("{name}_con"), dimensionality);
    group.bench_with_input(id, &dimensionality, |b, _| b.iter(|| black_box(metric(x, y))));

    // Nudging the order off the integer forces the general formula.
    let id = BenchmarkId::new(format!("{name}_gen"), dimensionality);
    let p = p + 1e-9;
    group.bench_with_input(id, &dimensionality, |b, _| {
        b.iter(|| black_box(minkowski(x, y, p)))
    });
}

fn lp_norms(c: &mut Criterion) {
    let mut group = c.benchmark_group("LpNorms");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    let metrics: &[(&str, f64, fn(&[f64], &[f64]) -> Result<f64, DistanceError>)] = &[
        ("L1", 1.0, manhattan),
        ("L2", 2.0, euclidean),
        ("Linf", 64.0, chebyshev),
    ];

    for d in 1..=5 {
        let dimensionality = 10_usize.pow(d);
        let (x, y) = random_pair(dimensionality, u64::from(d));

        for &(name, p, metric) in metrics {
            bench_one(&mut group, name, p, &x, &y, metric);
        }
    }
    group.finish();
}

criterion_group!(benches, lp_norms);
criterion_main!(benches);
