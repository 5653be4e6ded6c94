use chh_math::{brent, normal_cdf};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// The variance equation is the hot solve of the calibration: invert the
// normal-CDF spread for a typical forward-discount ratio and chi level.
fn bench_variance_solve(c: &mut Criterion) {
    c.bench_function("brent_variance_equation", |b| {
        b.iter(|| {
            brent(
                |v| {
                    black_box(0.98) * (normal_cdf(v / 2.0) - normal_cdf(-v / 2.0))
                        - black_box(0.02)
                },
                0.0,
                1.0,
                1e-11,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_variance_solve);
criterion_main!(benches);
