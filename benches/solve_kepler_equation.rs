use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use almanac::orbital::EquinoctialVariables;
use almanac::theory::mean_elements::solve_kepler_equation;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Equinoctial variables with only λ, k, h set.
#[inline]
fn make_variables(e: f64, perihelion: f64, mean_longitude: f64) -> EquinoctialVariables {
    EquinoctialVariables {
        semi_major_axis: 1.0,
        mean_longitude,
        k: e * perihelion.cos(),
        h: e * perihelion.sin(),
        q: 0.0,
        p: 0.0,
    }
}

fn random_cases(rng: &mut StdRng, samples: usize, eccentricity: impl Fn(&mut StdRng) -> f64) -> Vec<EquinoctialVariables> {
    (0..samples)
        .map(|_| {
            let e = eccentricity(rng);
            let perihelion = rand_angle(rng);
            let lambda = rand_angle(rng);
            make_variables(e, perihelion, lambda)
        })
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.21]
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/planetary_e<=0.21", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, |rng| rng.random_range(0.0..=0.21)),
            |cases| {
                for variables in cases {
                    let f = solve_kepler_equation(black_box(&variables)).unwrap();
                    black_box(f);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.9]
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/high_e_0.7..0.9", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, |rng| rng.random_range(0.7..0.9)),
            |cases| {
                for variables in cases {
                    let _ = solve_kepler_equation(black_box(&variables));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-circular regime: e ≈ 1e-12
fn bench_near_circular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/near_circular_e=1e-12", |b| {
        b.iter_batched(
            || random_cases(&mut rng, samples, |_| 1e-12),
            |cases| {
                for variables in cases {
                    let f = solve_kepler_equation(black_box(&variables)).unwrap();
                    black_box(f);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_near_circular
);
criterion_main!(benches);
