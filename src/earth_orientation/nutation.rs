//! # IAU 1980 theory of nutation
//!
//! Nutation in longitude (Δψ) and in obliquity (Δε) as the 106-term trigonometric series of
//! the 1980 IAU Theory of Nutation (Seidelmann, 1982).
//!
//! Each term has an argument
//!
//! ```text
//! A = m₁·l + m₂·l′ + m₃·F + m₄·D + m₅·Ω
//! ```
//!
//! built from the four Delaunay arguments (l, l′, F, D), supplied by a
//! [`DelaunayArguments`] implementation, and the longitude of the Moon's mean ascending
//! node Ω, evaluated here. The series are
//!
//! ```text
//! Δψ = Σ (S + S′·T) · sin A
//! Δε = Σ (C + C′·T) · cos A
//! ```
//!
//! with the coefficients in units of 0.0001″ and `T` in Julian centuries of JD since J2000.

use crate::constants::{ArcSec, Radian, ARCSEC_PER_CIRCLE, DAYS_PER_JULIAN_CENTURY, J2000, RADEG};
use crate::theory::{evaluate_polynomial, DelaunayArguments, SeriesOrder};
use crate::time::CalendarDate;

/// One term of the nutation series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationTerm {
    /// Multipliers of l, l′, F, D and Ω
    pub multipliers: [i8; 5],
    /// Longitude sine coefficient and its rate per century (0.0001″)
    pub sine: f64,
    pub sine_rate: f64,
    /// Obliquity cosine coefficient and its rate per century (0.0001″)
    pub cosine: f64,
    pub cosine_rate: f64,
}

const fn term(
    multipliers: [i8; 5],
    sine: f64,
    sine_rate: f64,
    cosine: f64,
    cosine_rate: f64,
) -> NutationTerm {
    NutationTerm {
        multipliers,
        sine,
        sine_rate,
        cosine,
        cosine_rate,
    }
}

/// Longitude of the Moon's mean ascending node, arcseconds, polynomial in centuries.
pub const LUNAR_NODE_LONGITUDE: [ArcSec; 4] = [450160.28, -6962890.539, 7.455, 0.008];

/// Conversion from the 0.0001″ series unit to degrees.
const SERIES_UNITS_PER_DEGREE: f64 = 36_000_000.0;

pub static NUTATION_TERMS: [NutationTerm; 106] = [
    term([0, 0, 0, 0, 1], -171996.0, -174.2, 92025.0, 8.9),
    term([0, 0, 2, -2, 2], -13187.0, -1.6, 5736.0, -3.1),
    term([0, 0, 2, 0, 2], -2274.0, -0.2, 977.0, -0.5),
    term([0, 0, 0, 0, 2], 2062.0, 0.2, -895.0, 0.5),
    term([0, -1, 0, 0, 0], -1426.0, 3.4, 54.0, -0.1),
    term([1, 0, 0, 0, 0], 712.0, 0.1, -7.0, 0.0),
    term([0, 1, 2, -2, 2], -517.0, 1.2, 224.0, -0.6),
    term([0, 0, 2, 0, 1], -386.0, -0.4, 200.0, 0.0),
    term([1, 0, 2, 0, 2], -301.0, 0.0, 129.0, -0.1),
    term([0, -1, 2, -2, 2], 217.0, -0.5, -95.0, 0.3),
    term([-1, 0, 0, 2, 0], 158.0, 0.0, -1.0, 0.0),
    term([0, 0, 2, -2, 1], 129.0, 0.1, -70.0, 0.0),
    term([-1, 0, 2, 0, 2], 123.0, 0.0, -53.0, 0.0),
    term([1, 0, 0, 0, 1], 63.0, 0.1, -33.0, 0.0),
    term([0, 0, 0, 2, 0], 63.0, 0.0, -2.0, 0.0),
    term([-1, 0, 2, 2, 2], -59.0, 0.0, 26.0, 0.0),
    term([-1, 0, 0, 0, 1], -58.0, -0.1, 32.0, 0.0),
    term([1, 0, 2, 0, 1], -51.0, 0.0, 27.0, 0.0),
    term([-2, 0, 0, 2, 0], -48.0, 0.0, 1.0, 0.0),
    term([-2, 0, 2, 0, 1], 46.0, 0.0, -24.0, 0.0),
    term([0, 0, 2, 2, 2], -38.0, 0.0, 16.0, 0.0),
    term([2, 0, 2, 0, 2], -31.0, 0.0, 13.0, 0.0),
    term([2, 0, 0, 0, 0], 29.0, 0.0, -1.0, 0.0),
    term([1, 0, 2, -2, 2], 29.0, 0.0, -12.0, 0.0),
    term([0, 0, 2, 0, 0], 26.0, 0.0, -1.0, 0.0),
    term([0, 0, 2, -2, 0], -22.0, 0.0, 0.0, 0.0),
    term([-1, 0, 2, 0, 1], 21.0, 0.0, -10.0, 0.0),
    term([0, 2, 0, 0, 0], 17.0, -0.1, 0.0, 0.0),
    term([0, 2, 2, -2, 2], -16.0, 0.1, 7.0, 0.0),
    term([-1, 0, 0, 2, 1], 16.0, 0.0, -8.0, 0.0),
    term([0, 1, 0, 0, 1], -15.0, 0.0, 9.0, 0.0),
    term([1, 0, 0, -2, 1], -13.0, 0.0, 7.0, 0.0),
    term([0, -1, 0, 0, 1], -12.0, 0.0, 6.0, 0.0),
    term([2, 0, -2, 0, 0], 11.0, 0.0, 0.0, 0.0),
    term([-1, 0, 2, 2, 1], -10.0, 0.0, 5.0, 0.0),
    term([1, 0, 2, 2, 2], -8.0, 0.0, 3.0, 0.0),
    term([0, -1, 2, 0, 2], -7.0, 0.0, 3.0, 0.0),
    term([0, 0, 2, 2, 1], -7.0, 0.0, 3.0, 0.0),
    term([1, 1, 0, -2, 0], -7.0, 0.0, 0.0, 0.0),
    term([0, 1, 2, 0, 2], 7.0, 0.0, -3.0, 0.0),
    term([-2, 0, 0, 2, 1], -6.0, 0.0, 3.0, 0.0),
    term([0, 0, 0, 2, 1], -6.0, 0.0, 3.0, 0.0),
    term([2, 0, 2, -2, 2], 6.0, 0.0, -3.0, 0.0),
    term([1, 0, 0, 2, 0], 6.0, 0.0, 0.0, 0.0),
    term([1, 0, 2, -2, 1], 6.0, 0.0, -3.0, 0.0),
    term([0, 0, 0, -2, 1], -5.0, 0.0, 3.0, 0.0),
    term([0, -1, 2, -2, 1], -5.0, 0.0, 3.0, 0.0),
    term([2, 0, 2, 0, 1], -5.0, 0.0, 3.0, 0.0),
    term([1, -1, 0, 0, 0], 5.0, 0.0, 0.0, 0.0),
    term([1, 0, 0, -1, 0], -4.0, 0.0, 0.0, 0.0),
    term([0, 0, 0, 1, 0], -4.0, 0.0, 0.0, 0.0),
    term([0, 1, 0, -2, 0], -4.0, 0.0, 0.0, 0.0),
    term([1, 0, -2, 0, 0], 4.0, 0.0, 0.0, 0.0),
    term([2, 0, 0, -2, 1], 4.0, 0.0, -2.0, 0.0),
    term([0, 1, 2, -2, 1], 4.0, 0.0, -2.0, 0.0),
    term([1, 1, 0, 0, 0], -3.0, 0.0, 0.0, 0.0),
    term([1, -1, 0, -1, 0], -3.0, 0.0, 0.0, 0.0),
    term([-1, -1, 2, 2, 2], -3.0, 0.0, 1.0, 0.0),
    term([0, -1, 2, 2, 2], -3.0, 0.0, 1.0, 0.0),
    term([1, -1, 2, 0, 2], -3.0, 0.0, 1.0, 0.0),
    term([3, 0, 2, 0, 2], -3.0, 0.0, 1.0, 0.0),
    term([-2, 0, 2, 0, 2], -3.0, 0.0, 1.0, 0.0),
    term([1, 0, 2, 0, 0], 3.0, 0.0, 0.0, 0.0),
    term([-1, 0, 2, 4, 2], -2.0, 0.0, 1.0, 0.0),
    term([1, 0, 0, 0, 2], -2.0, 0.0, 1.0, 0.0),
    term([-1, 0, 2, -2, 1], -2.0, 0.0, 1.0, 0.0),
    term([0, -2, 2, -2, 1], -2.0, 0.0, 1.0, 0.0),
    term([-2, 0, 0, 0, 1], -2.0, 0.0, 1.0, 0.0),
    term([2, 0, 0, 0, 1], 2.0, 0.0, -1.0, 0.0),
    term([3, 0, 0, 0, 0], 2.0, 0.0, 0.0, 0.0),
    term([1, 1, 2, 0, 2], 2.0, 0.0, -1.0, 0.0),
    term([0, 0, 2, 1, 2], 2.0, 0.0, -1.0, 0.0),
    term([1, 0, 0, 2, 1], -1.0, 0.0, 0.0, 0.0),
    term([1, 0, 2, 2, 1], -1.0, 0.0, 1.0, 0.0),
    term([1, 1, 0, -2, 1], -1.0, 0.0, 0.0, 0.0),
    term([0, 1, 0, 2, 0], -1.0, 0.0, 0.0, 0.0),
    term([0, 1, 2, -2, 0], -1.0, 0.0, 0.0, 0.0),
    term([0, 1, -2, 2, 0], -1.0, 0.0, 0.0, 0.0),
    term([1, 0, -2, 2, 0], -1.0, 0.0, 0.0, 0.0),
    term([1, 0, -2, -2, 0], -1.0, 0.0, 0.0, 0.0),
    term([1, 0, 2, -2, 0], -1.0, 0.0, 0.0, 0.0),
    term([1, 0, 0, -4, 0], -1.0, 0.0, 0.0, 0.0),
    term([2, 0, 0, -4, 0], -1.0, 0.0, 0.0, 0.0),
    term([0, 0, 2, 4, 2], -1.0, 0.0, 0.0, 0.0),
    term([0, 0, 2, -1, 2], -1.0, 0.0, 0.0, 0.0),
    term([-2, 0, 2, 4, 2], -1.0, 0.0, 1.0, 0.0),
    term([2, 0, 2, 2, 2], -1.0, 0.0, 0.0, 0.0),
    term([0, -1, 2, 0, 1], -1.0, 0.0, 0.0, 0.0),
    term([0, 0, -2, 0, 1], -1.0, 0.0, 0.0, 0.0),
    term([0, 0, 4, -2, 2], 1.0, 0.0, 0.0, 0.0),
    term([0, 1, 0, 0, 2], 1.0, 0.0, 0.0, 0.0),
    term([1, 1, 2, -2, 2], 1.0, 0.0, -1.0, 0.0),
    term([3, 0, 2, -2, 2], 1.0, 0.0, 0.0, 0.0),
    term([-2, 0, 2, 2, 2], 1.0, 0.0, -1.0, 0.0),
    term([-1, 0, 0, 0, 2], 1.0, 0.0, -1.0, 0.0),
    term([0, 0, -2, 2, 1], 1.0, 0.0, 0.0, 0.0),
    term([0, 1, 2, 0, 1], 1.0, 0.0, 0.0, 0.0),
    term([-1, 0, 4, 0, 2], 1.0, 0.0, 0.0, 0.0),
    term([2, 1, 0, -2, 0], 1.0, 0.0, 0.0, 0.0),
    term([2, 0, 0, 2, 0], 1.0, 0.0, 0.0, 0.0),
    term([2, 0, 2, -2, 1], 1.0, 0.0, -1.0, 0.0),
    term([2, 0, -2, 0, 1], 1.0, 0.0, 0.0, 0.0),
    term([1, -1, 0, -2, 0], 1.0, 0.0, 0.0, 0.0),
    term([-1, 0, 0, 1, 1], 1.0, 0.0, 0.0, 0.0),
    term([-1, -1, 0, 2, 1], 1.0, 0.0, 0.0, 0.0),
    term([0, 1, 0, 1, 0], 1.0, 0.0, 0.0, 0.0),
];

fn julian_centuries(date: &CalendarDate) -> f64 {
    (date.julian_date() - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Sum both nutation series in the 0.0001″ unit.
fn nutation_series(t: f64, delaunay: &impl DelaunayArguments) -> (f64, f64) {
    let [l, l_prime, f, d] = delaunay.arguments(t, SeriesOrder::Full);
    let node = evaluate_polynomial(&LUNAR_NODE_LONGITUDE, t);
    let fundamental = [l, l_prime, f, d, node];

    NUTATION_TERMS
        .iter()
        .fold((0.0, 0.0), |(longitude, obliquity), term| {
            let argument: ArcSec = term
                .multipliers
                .iter()
                .zip(fundamental.iter())
                .map(|(&m, &angle)| f64::from(m) * angle)
                .sum::<f64>()
                % ARCSEC_PER_CIRCLE;
            let (sin_a, cos_a) = (argument / 3600.0 * RADEG).sin_cos();
            (
                longitude + (term.sine + term.sine_rate * t) * sin_a,
                obliquity + (term.cosine + term.cosine_rate * t) * cos_a,
            )
        })
}

/// Compute the nutation in longitude and in obliquity.
///
/// Arguments
/// ---------
/// * `date`: the calendar date; `T` is taken from its Julian date.
/// * `delaunay`: evaluator of the Delaunay arguments l, l′, F, D.
///
/// Return
/// ------
/// * `(Δψ, Δε)` in radians. Both stay below about 20″ in modern epochs.
pub fn nutation(date: &CalendarDate, delaunay: &impl DelaunayArguments) -> (Radian, Radian) {
    let (longitude, obliquity) = nutation_series(julian_centuries(date), delaunay);
    (
        longitude / SERIES_UNITS_PER_DEGREE * RADEG,
        obliquity / SERIES_UNITS_PER_DEGREE * RADEG,
    )
}

/// Nutation in longitude Δψ, radians.
pub fn nutation_in_longitude(date: &CalendarDate, delaunay: &impl DelaunayArguments) -> Radian {
    nutation(date, delaunay).0
}

/// Nutation in obliquity Δε, radians.
pub fn nutation_in_obliquity(date: &CalendarDate, delaunay: &impl DelaunayArguments) -> Radian {
    nutation(date, delaunay).1
}

#[cfg(test)]
mod nutation_test {
    use super::*;
    use crate::constants::RADSEC;
    use crate::theory::Iau1980Arguments;
    use crate::time::Month;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nutation_1987_april_10() {
        let date = CalendarDate::new(1987, Month::April, 10.0);
        let (dpsi, deps) = nutation(&date, &Iau1980Arguments);

        assert_abs_diff_eq!(dpsi / RADSEC, -3.788, epsilon = 0.02);
        assert_abs_diff_eq!(deps / RADSEC, 9.443, epsilon = 0.02);
    }

    #[test]
    fn test_split_accessors_match() {
        let date = CalendarDate::new(2024, Month::March, 3.25);
        let (dpsi, deps) = nutation(&date, &Iau1980Arguments);
        assert_eq!(nutation_in_longitude(&date, &Iau1980Arguments), dpsi);
        assert_eq!(nutation_in_obliquity(&date, &Iau1980Arguments), deps);
    }

    #[test]
    fn test_nutation_stays_bounded() {
        for year in (1900..=2100).step_by(7) {
            for month in [Month::January, Month::May, Month::September] {
                let date = CalendarDate::new(year, month, 12.0);
                let (dpsi, deps) = nutation(&date, &Iau1980Arguments);
                assert!(dpsi.abs() / RADSEC < 20.0, "Δψ out of range in {year}");
                assert!(deps.abs() / RADSEC < 11.0, "Δε out of range in {year}");
            }
        }
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(NUTATION_TERMS[0].multipliers, [0, 0, 0, 0, 1]);
        assert_eq!(NUTATION_TERMS[0].sine, -171996.0);
        assert_eq!(NUTATION_TERMS[105].multipliers, [0, 1, 0, 1, 0]);
    }
}
