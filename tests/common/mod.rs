#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use almanac::constants::{DPI, RADEG};
use almanac::coordinates::{EclipticPoint, EquatorialPoint};

/// Install a test logger once, so that `RUST_LOG=debug` shows the solver traces.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Signed difference `a − b` of two angles, reduced to [−π, π).
pub fn angle_difference(a: f64, b: f64) -> f64 {
    (a - b + std::f64::consts::PI).rem_euclid(DPI) - std::f64::consts::PI
}

/// Compare ecliptic positions with a tolerance given in degrees.
pub fn assert_ecliptic_close(actual: &EclipticPoint, longitude: f64, latitude: f64, epsilon: f64) {
    assert_abs_diff_eq!(
        angle_difference(actual.longitude, longitude * RADEG) / RADEG,
        0.0,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.latitude / RADEG, latitude, epsilon = epsilon);
}

/// Compare equatorial positions, both in radians.
pub fn assert_equatorial_close(actual: &EquatorialPoint, expected: &EquatorialPoint, epsilon: f64) {
    assert_abs_diff_eq!(
        angle_difference(actual.right_ascension, expected.right_ascension),
        0.0,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.declination, expected.declination, epsilon = epsilon);
}

/// Degrees, arcminutes and arcseconds to radians.
pub fn dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees.signum() * (degrees.abs() + minutes / 60.0 + seconds / 3600.0) * RADEG
}
