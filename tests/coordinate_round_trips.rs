mod common;

use almanac::constants::{DPI, RADEG};
use almanac::coordinates::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
    horizontal_to_equatorial, EquatorialPoint, GeographicPoint,
};
use almanac::time::calendar_date;
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;

use common::{angle_difference, assert_equatorial_close};

#[test]
fn ecliptic_equatorial_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let point = EquatorialPoint::new(rng.random_range(0.0..DPI), rng.random_range(-1.5..1.5));
        let obliquity = rng.random_range(-1.5..1.5);

        let ecliptic = equatorial_to_ecliptic(&point, obliquity);
        // the longitude is ill-conditioned at the ecliptic poles
        if ecliptic.latitude.abs() > 1.5 {
            continue;
        }
        let back = ecliptic_to_equatorial(&ecliptic, obliquity);
        assert_equatorial_close(&back, &point, 1e-9);

        let reverse = equatorial_to_ecliptic(&ecliptic_to_equatorial(&ecliptic, obliquity), obliquity);
        assert_abs_diff_eq!(
            angle_difference(reverse.longitude, ecliptic.longitude),
            0.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(reverse.latitude, ecliptic.latitude, epsilon = 1e-9);
    }
}

#[test]
fn equatorial_horizontal_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let date = calendar_date(rng.random_range(2_400_000.0..2_500_000.0));
        let location = GeographicPoint::new(
            rng.random_range(-std::f64::consts::PI..std::f64::consts::PI),
            rng.random_range(-1.4..1.4),
        );
        let point = EquatorialPoint::new(rng.random_range(0.0..DPI), rng.random_range(-1.4..1.4));

        let horizontal = equatorial_to_horizontal(&date, &location, &point);
        assert!(horizontal.elevation.abs() <= FRAC_PI_2);
        if horizontal.elevation.abs() > 1.5 {
            continue;
        }

        let back = horizontal_to_equatorial(&date, &location, &horizontal);
        assert_equatorial_close(&back, &point, 1e-8);
    }
}

#[test]
fn zenith_is_the_local_meridian() {
    // a star whose declination equals the latitude culminates at the zenith
    let date = calendar_date(2_451_545.0);
    let location = GeographicPoint::new(10.0 * RADEG, 45.0 * RADEG);
    let sidereal = almanac::time::greenwich_mean_sidereal_time(&date) * almanac::constants::RADH;
    let point = EquatorialPoint::new((sidereal - location.longitude).rem_euclid(DPI), 45.0 * RADEG);

    let horizontal = equatorial_to_horizontal(&date, &location, &point);
    assert_abs_diff_eq!(horizontal.elevation, FRAC_PI_2, epsilon = 1e-7);
}
