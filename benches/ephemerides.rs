use criterion::{black_box, criterion_group, criterion_main, Criterion};

use almanac::ephemeris::Equinox;
use almanac::time::{CalendarDate, Month};
use almanac::{Almanac, Planet};

fn bench_planets(c: &mut Criterion) {
    let almanac = Almanac::new();
    let date = CalendarDate::new(1992, Month::December, 20.0);

    let mut group = c.benchmark_group("planet_apparent_position");
    for planet in Planet::ALL {
        group.bench_function(planet.name(), |b| {
            b.iter(|| {
                black_box(
                    almanac
                        .planet_apparent_position(black_box(&date), planet)
                        .unwrap(),
                )
            })
        });
    }
    group.finish();

    c.bench_function("planet_apparent_magnitude/Saturn", |b| {
        b.iter(|| {
            black_box(
                almanac
                    .planet_apparent_magnitude(black_box(&date), Planet::Saturn)
                    .unwrap(),
            )
        })
    });
}

fn bench_sun_and_moon(c: &mut Criterion) {
    let almanac = Almanac::new();
    let date = CalendarDate::new(1992, Month::April, 12.0);

    c.bench_function("sun_apparent_position", |b| {
        b.iter(|| black_box(almanac.sun_apparent_position(black_box(&date)).unwrap()))
    });
    c.bench_function("moon_bright_limb_position_angle", |b| {
        b.iter(|| {
            black_box(
                almanac
                    .moon_bright_limb_position_angle(black_box(&date))
                    .unwrap(),
            )
        })
    });
    c.bench_function("equinox/March", |b| {
        b.iter(|| black_box(almanac.equinox(black_box(2000), Equinox::March).unwrap()))
    });
}

criterion_group!(benches, bench_planets, bench_sun_and_moon);
criterion_main!(benches);
