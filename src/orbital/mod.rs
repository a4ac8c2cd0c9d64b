//! # Mean orbital elements of the major planets
//!
//! Evaluates the VSOP82 polynomial series of [`vsop82`] and derives the classical mean
//! elements from the equinoctial variables:
//!
//! ```text
//! ϖ = atan2(h, k)      e = √(k² + h²)
//! Ω = atan2(p, q)      i = 2 asin √(q² + p²)
//! ```
//!
//! Angles are radians and reduced to [0, 2π), the semi-major axis is in AU.
//! Time is counted in Julian millennia of JDE since J2000.

pub mod vsop82;

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Radian, DAYS_PER_JULIAN_MILLENNIUM, J2000};
use crate::coordinates::principal_angle;
use crate::planet::Planet;
use crate::theory::evaluate_polynomial;
use crate::time::CalendarDate;

/// Reference equinox of a set of orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceFrame {
    /// Standard equinox of J2000
    J2000,
    /// Mean dynamical ecliptic and equinox of date
    OfDate,
}

/// Mean orbital elements of a planet at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Mean longitude of the planet (λ)
    pub mean_longitude: Radian,
    /// Semi-major axis (a)
    pub semi_major_axis: AstronomicalUnit,
    /// Eccentricity (e)
    pub eccentricity: f64,
    /// Inclination on the ecliptic (i)
    pub inclination: Radian,
    /// Longitude of the ascending node (Ω)
    pub ascending_node_longitude: Radian,
    /// Longitude of the perihelion (ϖ)
    pub perihelion_longitude: Radian,
}

/// Raw VSOP82 equinoctial variables (a, λ, k, h, q, p).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquinoctialVariables {
    pub semi_major_axis: AstronomicalUnit,
    pub mean_longitude: Radian,
    /// k = e cos ϖ
    pub k: f64,
    /// h = e sin ϖ
    pub h: f64,
    /// q = sin(i/2) cos Ω
    pub q: f64,
    /// p = sin(i/2) sin Ω
    pub p: f64,
}

impl EquinoctialVariables {
    /// Evaluate one VSOP82 table at `millennia` from J2000.
    pub fn from_series<const N: usize>(coefficients: &[[f64; N]; 6], millennia: f64) -> Self {
        let [a, l, k, h, q, p] = coefficients.map(|row| evaluate_polynomial(&row, millennia));
        EquinoctialVariables {
            semi_major_axis: a,
            mean_longitude: l,
            k,
            h,
            q,
            p,
        }
    }

    /// Series of `planet` in `frame` evaluated at `millennia` from J2000.
    pub fn at(millennia: f64, planet: Planet, frame: ReferenceFrame) -> Self {
        let descriptor = planet.descriptor();
        match frame {
            ReferenceFrame::J2000 => Self::from_series(descriptor.j2000, millennia),
            ReferenceFrame::OfDate => Self::from_series(descriptor.of_date, millennia),
        }
    }
}

impl From<EquinoctialVariables> for OrbitalElements {
    fn from(variables: EquinoctialVariables) -> Self {
        let EquinoctialVariables {
            semi_major_axis,
            mean_longitude,
            k,
            h,
            q,
            p,
        } = variables;

        OrbitalElements {
            mean_longitude: principal_angle(mean_longitude),
            semi_major_axis,
            eccentricity: k.hypot(h),
            inclination: 2.0 * q.hypot(p).asin(),
            ascending_node_longitude: principal_angle(p.atan2(q)),
            perihelion_longitude: principal_angle(h.atan2(k)),
        }
    }
}

impl OrbitalElements {
    /// Mean elements of `planet` in `frame` at `millennia` of JDE from J2000.
    pub fn at(millennia: f64, planet: Planet, frame: ReferenceFrame) -> Self {
        EquinoctialVariables::at(millennia, planet, frame).into()
    }

    /// Mean anomaly M = λ − ϖ, in [0, 2π).
    pub fn mean_anomaly(&self) -> Radian {
        principal_angle(self.mean_longitude - self.perihelion_longitude)
    }
}

/// Julian millennia of JDE elapsed since J2000.
pub fn julian_millennia(date: &CalendarDate) -> f64 {
    (date.julian_ephemeris_date() - J2000) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Compute the mean orbital elements of a planet at a calendar date.
///
/// Arguments
/// ---------
/// * `date`: the calendar date (UT); the series run on its Julian ephemeris date.
/// * `planet`: the planet, Earth included.
/// * `frame`: reference equinox of the result.
///
/// Return
/// ------
/// * The six mean elements, angles in [0, 2π).
pub fn orbital_elements(
    date: &CalendarDate,
    planet: Planet,
    frame: ReferenceFrame,
) -> OrbitalElements {
    OrbitalElements::at(julian_millennia(date), planet, frame)
}

#[cfg(test)]
mod orbital_test {
    use super::*;
    use crate::constants::RADEG;
    use crate::time::Month;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_elements_at_j2000_epoch() {
        let earth = OrbitalElements::at(0.0, Planet::Earth, ReferenceFrame::OfDate);
        assert_abs_diff_eq!(earth.semi_major_axis, 1.00000101778, epsilon = 1e-12);
        assert_abs_diff_eq!(earth.mean_longitude, 1.75347031435, epsilon = 1e-12);
        assert_abs_diff_eq!(earth.eccentricity, 0.0167086, epsilon = 1e-6);
        assert_abs_diff_eq!(earth.perihelion_longitude / RADEG, 102.937, epsilon = 1e-2);
        assert_eq!(earth.inclination, 0.0);
    }

    #[test]
    fn test_frames_agree_at_epoch() {
        for planet in Planet::ALL {
            let j2000 = OrbitalElements::at(0.0, planet, ReferenceFrame::J2000);
            let of_date = OrbitalElements::at(0.0, planet, ReferenceFrame::OfDate);
            assert_eq!(j2000, of_date, "{planet}");
        }
    }

    #[test]
    fn test_mercury_elements() {
        let elements = OrbitalElements::at(0.0, Planet::Mercury, ReferenceFrame::J2000);
        assert_abs_diff_eq!(elements.eccentricity, 0.2056318, epsilon = 1e-6);
        assert_abs_diff_eq!(elements.inclination / RADEG, 7.004986, epsilon = 1e-5);
        assert_abs_diff_eq!(elements.ascending_node_longitude / RADEG, 48.330893, epsilon = 1e-5);
    }

    #[test]
    fn test_precession_of_longitude() {
        // of-date mean longitude runs ahead of the J2000 one by the general precession
        let t = 0.1;
        let j2000 = OrbitalElements::at(t, Planet::Mars, ReferenceFrame::J2000);
        let of_date = OrbitalElements::at(t, Planet::Mars, ReferenceFrame::OfDate);
        let drift = principal_angle(of_date.mean_longitude - j2000.mean_longitude);
        assert_abs_diff_eq!(drift / RADEG, 1.397, epsilon = 1e-2);
    }

    #[test]
    fn test_orbital_elements_from_date() {
        let date = CalendarDate::new(2000, Month::January, 1.5);
        let elements = orbital_elements(&date, Planet::Venus, ReferenceFrame::OfDate);
        assert!(elements.mean_longitude >= 0.0 && elements.mean_longitude < crate::constants::DPI);
        assert_abs_diff_eq!(elements.semi_major_axis, 0.72333, epsilon = 1e-5);
    }
}
