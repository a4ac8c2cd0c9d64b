//! # Pluggable analytic theories
//!
//! The reduction pipeline consumes three external theories through traits, so that more
//! accurate series (a full VSOP87 or ELP2000 implementation, for instance) can be swapped in:
//!
//! | Trait                 | Produces                                             | Built-in implementation   |
//! |-----------------------|------------------------------------------------------|---------------------------|
//! | [`PlanetaryTheory`]   | heliocentric ecliptic position of a planet (rad, AU) | [`MeanElementTheory`]     |
//! | [`LunarTheory`]       | geocentric ecliptic position of the Moon (″, km)     | [`TruncatedLunarTheory`]  |
//! | [`DelaunayArguments`] | Delaunay arguments l, l′, F, D (″)                   | [`Iau1980Arguments`]      |
//!
//! All positions are referred to the mean ecliptic and equinox of date.

pub mod delaunay;
pub mod lunar;
pub mod mean_elements;

pub use delaunay::Iau1980Arguments;
pub use lunar::TruncatedLunarTheory;
pub use mean_elements::MeanElementTheory;

use serde::{Deserialize, Serialize};

use crate::almanac_errors::AlmanacError;
use crate::constants::ArcSec;
use crate::coordinates::SphericalPoint;
use crate::planet::Planet;

/// Truncation of the polynomial part of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesOrder {
    /// Constant and secular rate only
    Linear,
    /// Every available power of time
    #[default]
    Full,
}

/// Source of heliocentric planetary positions.
pub trait PlanetaryTheory {
    /// Heliocentric ecliptic position of `planet`.
    ///
    /// Arguments
    /// ---------
    /// * `millennia`: Julian millennia of JDE since J2000.
    /// * `planet`: the planet, Earth included.
    ///
    /// Return
    /// ------
    /// * Longitude and latitude in radians, radius vector in AU, referred to the mean
    ///   ecliptic and equinox of date.
    fn heliocentric_position(
        &self,
        millennia: f64,
        planet: Planet,
    ) -> Result<SphericalPoint, AlmanacError>;
}

/// Source of geocentric lunar positions.
pub trait LunarTheory {
    /// Geocentric ecliptic position of the Moon at `centuries` of JDE since J2000:
    /// longitude and latitude in arcseconds, distance in kilometers.
    fn geocentric_position(&self, centuries: f64) -> SphericalPoint;
}

/// Source of the Delaunay fundamental arguments.
pub trait DelaunayArguments {
    /// Arguments `[l, l′, F, D]` in arcseconds at `centuries` since J2000: mean anomaly of the
    /// Moon, mean anomaly of the Sun, argument of latitude of the Moon, mean elongation of the
    /// Moon from the Sun.
    fn arguments(&self, centuries: f64, order: SeriesOrder) -> [ArcSec; 4];
}

impl<T: PlanetaryTheory + ?Sized> PlanetaryTheory for &T {
    fn heliocentric_position(
        &self,
        millennia: f64,
        planet: Planet,
    ) -> Result<SphericalPoint, AlmanacError> {
        (**self).heliocentric_position(millennia, planet)
    }
}

impl<T: LunarTheory + ?Sized> LunarTheory for &T {
    fn geocentric_position(&self, centuries: f64) -> SphericalPoint {
        (**self).geocentric_position(centuries)
    }
}

impl<T: DelaunayArguments + ?Sized> DelaunayArguments for &T {
    fn arguments(&self, centuries: f64, order: SeriesOrder) -> [ArcSec; 4] {
        (**self).arguments(centuries, order)
    }
}

/// Evaluate `c₀ + c₁t + c₂t² + …` with Horner's scheme.
pub fn evaluate_polynomial(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}
