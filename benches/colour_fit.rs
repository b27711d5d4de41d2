use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::DMatrix;

use chromatica::colour_model::{
    Chromaticity, CurveOptions, Primaries, encoding_cctf_slice, first_order_colour_fit,
    normalised_primary_matrix,
};

fn generate_samples(rows: usize, seed: u64) -> DMatrix<f64> {
    // Cheap deterministic pseudo-random values in [0, 1).
    let mut state = seed;
    DMatrix::from_fn(rows, 3, |_, _| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    })
}

fn benchmark_fit_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_order_colour_fit");

    for rows in [24, 240, 2400] {
        let m1 = generate_samples(rows, 1);
        let m2 = generate_samples(rows, 2);

        group.bench_with_input(
            BenchmarkId::from_parameter(rows),
            &(m1, m2),
            |b, (m1, m2)| {
                b.iter(|| first_order_colour_fit(black_box(m1), black_box(m2)));
            },
        );
    }

    group.finish();
}

fn benchmark_matrix_derivation(c: &mut Criterion) {
    let primaries = Primaries::new(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.30, 0.60),
        Chromaticity::new(0.15, 0.06),
    );
    let d65 = Chromaticity::new(0.31271, 0.32902);

    c.bench_function("normalised_primary_matrix", |b| {
        b.iter(|| normalised_primary_matrix(black_box(&primaries), black_box(&d65)));
    });
}

fn benchmark_cctf_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding_cctf");
    let values: Vec<f64> = (0..4096).map(|i| i as f64 / 4095.0).collect();
    let options = CurveOptions::default();

    for curve in ["sRGB", "ITU-R BT.709", "ACEScct"] {
        group.bench_with_input(BenchmarkId::from_parameter(curve), &values, |b, values| {
            b.iter(|| encoding_cctf_slice(black_box(values), curve, &options));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fit_sizes,
    benchmark_matrix_derivation,
    benchmark_cctf_encoding
);
criterion_main!(benches);
