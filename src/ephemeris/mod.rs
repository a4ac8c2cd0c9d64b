//! # Ephemerides of the Sun, the Moon and the planets
//!
//! Geocentric reductions built on the theories injected in [`Almanac`](crate::almanac::Almanac):
//!
//! - [`sun`] – true and apparent positions, distance, equinoxes and solstices, equation of time,
//! - [`moon`] – positions, distance, phase, bright limb, horizontal parallax,
//! - [`planets`] – light-time corrected positions, distances, phase, magnitude, Saturn's rings.
//!
//! Positions are ecliptic coordinates referred to the mean equinox of date for the *true*
//! variants and to the true equinox of date (nutation applied) for the *apparent* ones.
//!
//! This module also hosts the VSOP to FK5 frame correction shared by the Sun and the planets.

pub mod moon;
pub mod planets;
pub mod sun;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::{RADEG, RADSEC};
use crate::coordinates::EclipticPoint;
use crate::time::Month;

/// Correction (Δλ, Δβ) from the dynamical ecliptic of VSOP to the FK5 frame.
///
/// Arguments
/// ---------
/// * `point`: geocentric ecliptic position in the VSOP frame.
/// * `centuries`: Julian centuries of JDE since J2000.
///
/// Return
/// ------
/// * The correction in radians, to be added to `point`.
///
/// Formula
/// -------
/// ```text
/// λ′ = λ − 1.397°T − 0.00031°T²
/// Δλ = −0.09033″ + 0.03916″ (cos λ′ + sin λ′) tan β
/// Δβ = 0.03916″ (cos λ′ − sin λ′)
/// ```
pub fn fk5_correction(point: &EclipticPoint, centuries: f64) -> EclipticPoint {
    let shifted = point.longitude - (1.397 * centuries + 0.00031 * centuries * centuries) * RADEG;
    let (sin_l, cos_l) = shifted.sin_cos();

    EclipticPoint {
        longitude: (-0.09033 + 0.03916 * (cos_l + sin_l) * point.latitude.tan()) * RADSEC,
        latitude: 0.03916 * (cos_l - sin_l) * RADSEC,
    }
}

/// The two equinoxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equinox {
    March,
    September,
}

/// The two solstices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Solstice {
    June,
    December,
}

/// Start of an astronomical season, indexed by the Sun's apparent longitude k·90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    /// λ☉ = 0°
    MarchEquinox,
    /// λ☉ = 90°
    JuneSolstice,
    /// λ☉ = 180°
    SeptemberEquinox,
    /// λ☉ = 270°
    DecemberSolstice,
}

impl Season {
    /// Index k such that the Sun's apparent longitude is k·90°.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Month in which the season starts.
    pub fn month(self) -> Month {
        match self {
            Season::MarchEquinox => Month::March,
            Season::JuneSolstice => Month::June,
            Season::SeptemberEquinox => Month::September,
            Season::DecemberSolstice => Month::December,
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = AlmanacError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Season::MarchEquinox),
            1 => Ok(Season::JuneSolstice),
            2 => Ok(Season::SeptemberEquinox),
            3 => Ok(Season::DecemberSolstice),
            _ => Err(AlmanacError::InvalidSeasonIndex(index)),
        }
    }
}

impl From<Equinox> for Season {
    fn from(equinox: Equinox) -> Self {
        match equinox {
            Equinox::March => Season::MarchEquinox,
            Equinox::September => Season::SeptemberEquinox,
        }
    }
}

impl From<Solstice> for Season {
    fn from(solstice: Solstice) -> Self {
        match solstice {
            Solstice::June => Season::JuneSolstice,
            Solstice::December => Season::DecemberSolstice,
        }
    }
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fk5_correction_of_the_sun() {
        // Sun, 1992 October 13: geometric λ = 199.907372°, β = 0.000179°
        let t = -0.072183436;
        let point = EclipticPoint::new(199.907372 * RADEG, 0.000179 * RADEG);
        let delta = fk5_correction(&point, t);
        assert_abs_diff_eq!(delta.longitude / RADSEC, -0.09033, epsilon = 1e-4);
        assert_abs_diff_eq!(delta.latitude / RADSEC, -0.0236, epsilon = 1e-3);
    }

    #[test]
    fn test_season_index() {
        for index in 0..4 {
            assert_eq!(Season::try_from(index).unwrap().index(), index);
        }
        assert_eq!(
            Season::try_from(4),
            Err(AlmanacError::InvalidSeasonIndex(4))
        );
        assert_eq!(Season::from(Equinox::September).month(), Month::September);
        assert_eq!(Season::from(Solstice::December).month(), Month::December);
    }
}
