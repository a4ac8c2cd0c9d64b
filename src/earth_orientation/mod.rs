//! # Earth orientation and Earth-bound effects
//!
//! Corrections that depend on the motion and the shape of the Earth:
//!
//! - [`obliquity_of_ecliptic`] – mean obliquity ε, IAU 1976 polynomial,
//! - [`precession`] – ecliptic coordinates carried from one epoch to another,
//! - [`nutation`] – 1980 IAU nutation series (Δψ, Δε), see [`nutation`](mod@nutation),
//! - [`annual_aberration`] – shift of an ecliptic position due to the Earth's orbital velocity,
//! - [`geodesic_distance`] – distance between two sites on the reference ellipsoid.
//!
//! The aberration here is the pure formula; the Sun longitude and the Earth orbital elements it
//! needs are supplied by [`Almanac::aberration`](crate::almanac::Almanac::aberration).

pub mod nutation;

pub use nutation::{nutation, nutation_in_longitude, nutation_in_obliquity};

use crate::constants::{
    ArcSec, JulianDate, Kilometer, Radian, ABERRATION_CONSTANT, DAYS_PER_JULIAN_CENTURY,
    EARTH_EQUATORIAL_RADIUS, EARTH_FLATTENING, J2000, RADSEC,
};
use crate::coordinates::{principal_angle, EclipticPoint, GeographicPoint};
use crate::time::CalendarDate;

/// Compute the mean obliquity of the ecliptic at a given date (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `date`: the calendar date; `T` is counted in Julian centuries of JD since J2000.
///
/// Return
/// ------
/// * Mean obliquity ε in radians.
///
/// Formula
/// -------
/// ```text
/// ε = 84381.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
/// ```
/// evaluated with Horner's scheme.
pub fn obliquity_of_ecliptic(date: &CalendarDate) -> Radian {
    let ob0 = 84381.448 * RADSEC;
    let ob1 = -46.8150 * RADSEC;
    let ob2 = -0.00059 * RADSEC;
    let ob3 = 0.001813 * RADSEC;

    let t = (date.julian_date() - J2000) / DAYS_PER_JULIAN_CENTURY;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Reduce ecliptic coordinates from one epoch to another for precession.
///
/// Arguments
/// ---------
/// * `point`: ecliptic coordinates referred to the equinox of `from`.
/// * `from`: Julian date of the starting epoch.
/// * `to`: Julian date of the target epoch.
///
/// Return
/// ------
/// * Ecliptic coordinates referred to the equinox of `to`, longitude in [0, 2π).
///
/// Method
/// ------
/// With `T` the centuries from J2000 to `from` and `t` the centuries from `from` to `to`,
/// the angles η, Π and p (arcseconds) are
///
/// ```text
/// η = (47.0029 − 0.06603T + 0.000598T²)t + (−0.03302 + 0.000598T)t² + 0.000060t³
/// Π = 629554.9824 + 3289.4789T + 0.60622T² − (869.8089 + 0.50491T)t + 0.03536t²
/// p = (5029.0966 + 2.22226T − 0.000042T²)t + (1.11113 − 0.000042T)t² − 0.000006t³
/// ```
///
/// and the precessed position follows from rotating about the ecliptic pole.
pub fn precession(point: &EclipticPoint, from: JulianDate, to: JulianDate) -> EclipticPoint {
    let t0 = (from - J2000) / DAYS_PER_JULIAN_CENTURY;
    let t = (to - from) / DAYS_PER_JULIAN_CENTURY;

    let eta: ArcSec = (47.0029 - 0.06603 * t0 + 0.000598 * t0 * t0) * t
        + (-0.03302 + 0.000598 * t0) * t * t
        + 0.000060 * t * t * t;
    let pi: ArcSec = 629554.9824 + 3289.4789 * t0 + 0.60622 * t0 * t0
        - (869.8089 + 0.50491 * t0) * t
        + 0.03536 * t * t;
    let p: ArcSec = (5029.0966 + 2.22226 * t0 - 0.000042 * t0 * t0) * t
        + (1.11113 - 0.000042 * t0) * t * t
        - 0.000006 * t * t * t;

    let (eta, pi, p) = (eta * RADSEC, pi * RADSEC, p * RADSEC);

    let (sin_eta, cos_eta) = eta.sin_cos();
    let (sin_b, cos_b) = point.latitude.sin_cos();
    let (sin_d, cos_d) = (pi - point.longitude).sin_cos();

    let a = cos_eta * cos_b * sin_d - sin_eta * sin_b;
    let b = cos_b * cos_d;
    let c = cos_eta * sin_b + sin_eta * cos_b * sin_d;

    EclipticPoint {
        longitude: principal_angle(-a.atan2(b) + p + pi),
        latitude: c.asin(),
    }
}

/// Compute the displacement of an ecliptic position due to annual aberration.
///
/// Arguments
/// ---------
/// * `point`: true ecliptic position of the body.
/// * `sun_longitude`: true geometric longitude of the Sun ☉.
/// * `eccentricity`: eccentricity `e` of the Earth's orbit.
/// * `perihelion_longitude`: longitude ϖ of the perihelion of the Earth's orbit.
///
/// Return
/// ------
/// * The correction (Δλ, Δβ) in radians, to be added to the true position. It is a
///   difference and is not normalized.
///
/// Formula
/// -------
/// ```text
/// Δλ = −κ (cos(☉ − λ) − e cos(ϖ − λ)) / cos β
/// Δβ = −κ sin β (sin(☉ − λ) − e sin(ϖ − λ))
/// ```
/// with κ = 20.49552″.
pub fn annual_aberration(
    point: &EclipticPoint,
    sun_longitude: Radian,
    eccentricity: f64,
    perihelion_longitude: Radian,
) -> EclipticPoint {
    let k = ABERRATION_CONSTANT * RADSEC;
    let (sin_s, cos_s) = (sun_longitude - point.longitude).sin_cos();
    let (sin_p, cos_p) = (perihelion_longitude - point.longitude).sin_cos();
    let (sin_b, cos_b) = point.latitude.sin_cos();

    EclipticPoint {
        longitude: -k * (cos_s - eccentricity * cos_p) / cos_b,
        latitude: -k * sin_b * (sin_s - eccentricity * sin_p),
    }
}

/// Compute the distance between two sites on the Earth ellipsoid (Andoyer–Lambert).
///
/// Arguments
/// ---------
/// * `first`, `second`: geographic positions, longitudes west-positive.
///
/// Return
/// ------
/// * Distance along the ellipsoid in kilometers. Accurate to about 50 m for a ≈ 6378.14 km
///   and f ≈ 1/298.257. Identical points yield NaN (0/0 in the auxiliary ratio).
pub fn geodesic_distance(first: &GeographicPoint, second: &GeographicPoint) -> Kilometer {
    let f = (first.latitude + second.latitude) / 2.0;
    let g = (first.latitude - second.latitude) / 2.0;
    let l = (first.longitude - second.longitude) / 2.0;

    let (sin_f, cos_f) = f.sin_cos();
    let (sin_g, cos_g) = g.sin_cos();
    let (sin_l, cos_l) = l.sin_cos();

    let s = sin_g.powi(2) * cos_l.powi(2) + cos_f.powi(2) * sin_l.powi(2);
    let c = cos_g.powi(2) * cos_l.powi(2) + sin_f.powi(2) * sin_l.powi(2);
    let omega = s.sqrt().atan2(c.sqrt());
    let r = (s * c).sqrt() / omega;

    let d = 2.0 * omega * EARTH_EQUATORIAL_RADIUS;
    let h1 = (3.0 * r - 1.0) / (2.0 * c);
    let h2 = (3.0 * r + 1.0) / (2.0 * s);

    d * (1.0 + EARTH_FLATTENING * h1 * sin_f.powi(2) * cos_g.powi(2)
        - EARTH_FLATTENING * h2 * cos_f.powi(2) * sin_g.powi(2))
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use crate::constants::RADEG;
    use crate::time::Month;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_obliquity_at_j2000() {
        let date = CalendarDate::new(2000, Month::January, 1.5);
        assert_abs_diff_eq!(
            obliquity_of_ecliptic(&date) / RADSEC,
            84381.448,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_obliquity_1987_april_10() {
        // ε₀ = 23°26'27.407"
        let date = CalendarDate::new(1987, Month::April, 10.0);
        assert_abs_diff_eq!(
            obliquity_of_ecliptic(&date) / RADSEC,
            23.0 * 3600.0 + 26.0 * 60.0 + 27.407,
            epsilon = 5e-3
        );
    }

    #[test]
    fn test_precession_to_antiquity() {
        let point = EclipticPoint::new(149.48194 * RADEG, 1.76549 * RADEG);
        let precessed = precession(&point, J2000, 1643074.5);

        assert_abs_diff_eq!(precessed.longitude / RADEG, 118.704, epsilon = 1e-3);
        assert_abs_diff_eq!(precessed.latitude / RADEG, 1.615, epsilon = 1e-3);
    }

    #[test]
    fn test_precession_identity() {
        let point = EclipticPoint::new(2.0, -0.4);
        let same = precession(&point, 2_440_000.5, 2_440_000.5);
        assert_abs_diff_eq!(same.longitude, point.longitude, epsilon = 1e-12);
        assert_abs_diff_eq!(same.latitude, point.latitude, epsilon = 1e-12);
    }

    #[test]
    fn test_aberration_is_bounded() {
        let point = EclipticPoint::new(1.2, 0.1);
        for step in 0..12 {
            let sun = f64::from(step) * 30.0 * RADEG;
            let delta = annual_aberration(&point, sun, 0.0167, 103.0 * RADEG);
            assert!(delta.longitude.abs() / RADSEC < 21.5);
            assert!(delta.latitude.abs() / RADSEC < 21.5);
        }
    }

    #[test]
    fn test_aberration_at_conjunction() {
        // body in conjunction with the Sun on the ecliptic, circular orbit: Δλ = −κ
        let point = EclipticPoint::new(0.7, 0.0);
        let delta = annual_aberration(&point, 0.7, 0.0, 0.0);
        assert_abs_diff_eq!(delta.longitude / RADSEC, -ABERRATION_CONSTANT, epsilon = 1e-9);
        assert_abs_diff_eq!(delta.latitude, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_geodesic_distance_paris_washington() {
        let paris = GeographicPoint::new(
            -(2.0 + 20.0 / 60.0 + 14.0 / 3600.0) * RADEG,
            (48.0 + 50.0 / 60.0 + 11.0 / 3600.0) * RADEG,
        );
        let washington = GeographicPoint::new(
            (77.0 + 3.0 / 60.0 + 56.0 / 3600.0) * RADEG,
            (38.0 + 55.0 / 60.0 + 17.0 / 3600.0) * RADEG,
        );

        let distance = geodesic_distance(&paris, &washington);
        assert_abs_diff_eq!(distance, 6181.63, epsilon = 0.05);
        assert_abs_diff_eq!(
            geodesic_distance(&washington, &paris),
            distance,
            epsilon = 1e-9
        );
    }
}
