//! # Major planets
//!
//! [`Planet`] is the closed set of major planets, the Earth included. Everything that varies
//! per planet is read from one static lookup table of [`PlanetDescriptor`]s:
//!
//! - the VSOP82 mean element series in both reference frames,
//! - the visual magnitude law, absent for the Earth.
//!
//! Magnitude laws take the heliocentric and geocentric distances (AU) and the phase angle
//! (degrees) through [`MagnitudeInputs`]:
//!
//! ```text
//! V = V₀ + 5 log₁₀(rΔ) + f(i)
//! ```
//!
//! Saturn adds the contribution of its rings from [`RingGeometry`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Radian};
use crate::orbital::vsop82::{
    J2000Coefficients, OfDateCoefficients, EARTH_J2000, EARTH_OF_DATE, JUPITER_J2000,
    JUPITER_OF_DATE, MARS_J2000, MARS_OF_DATE, MERCURY_J2000, MERCURY_OF_DATE, NEPTUNE_J2000,
    NEPTUNE_OF_DATE, SATURN_J2000, SATURN_OF_DATE, URANUS_J2000, URANUS_OF_DATE, VENUS_J2000,
    VENUS_OF_DATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets ordered by distance from the Sun.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Static data of this planet.
    pub fn descriptor(self) -> &'static PlanetDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Saturnicentric geometry of the ring plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RingGeometry {
    /// Saturnicentric latitude of the Earth referred to the ring plane (B)
    pub earth_latitude: Radian,
    /// Difference between the saturnicentric longitudes of the Sun and of the Earth,
    /// measured in the ring plane (ΔU)
    pub sun_earth_longitude_difference: Radian,
}

/// Observation geometry consumed by a magnitude law.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagnitudeInputs {
    /// Distance to the Sun r, AU
    pub heliocentric_distance: f64,
    /// Distance to the Earth Δ, AU
    pub geocentric_distance: f64,
    /// Phase angle i, degrees
    pub phase_angle: Degree,
    /// Ring geometry, Saturn only
    pub ring: Option<RingGeometry>,
}

impl MagnitudeInputs {
    fn distance_term(&self) -> f64 {
        5.0 * (self.heliocentric_distance * self.geocentric_distance).log10()
    }
}

pub type MagnitudeLaw = fn(&MagnitudeInputs) -> f64;

/// Per-planet entry of the lookup table.
pub struct PlanetDescriptor {
    pub name: &'static str,
    /// VSOP82 series referred to the equinox of J2000
    pub j2000: &'static J2000Coefficients,
    /// VSOP82 series referred to the equinox of date
    pub of_date: &'static OfDateCoefficients,
    /// Visual magnitude law, `None` for the Earth
    pub magnitude: Option<MagnitudeLaw>,
}

fn mercury_magnitude(inputs: &MagnitudeInputs) -> f64 {
    let i = inputs.phase_angle;
    -0.42 + inputs.distance_term() + 0.0380 * i - 0.000273 * i.powi(2) + 0.000002 * i.powi(3)
}

fn venus_magnitude(inputs: &MagnitudeInputs) -> f64 {
    let i = inputs.phase_angle;
    -4.40 + inputs.distance_term() + 0.0009 * i + 0.000239 * i.powi(2) - 0.00000065 * i.powi(3)
}

fn mars_magnitude(inputs: &MagnitudeInputs) -> f64 {
    -1.52 + inputs.distance_term() + 0.016 * inputs.phase_angle
}

fn jupiter_magnitude(inputs: &MagnitudeInputs) -> f64 {
    -9.40 + inputs.distance_term() + 0.005 * inputs.phase_angle
}

fn saturn_magnitude(inputs: &MagnitudeInputs) -> f64 {
    let ring = inputs.ring.unwrap_or_default();
    let sin_b = ring.earth_latitude.sin().abs();
    let delta_u = ring.sun_earth_longitude_difference.to_degrees().abs();
    let delta_u = if delta_u > 180.0 { 360.0 - delta_u } else { delta_u };

    -8.88 + inputs.distance_term() + 0.044 * delta_u - 2.60 * sin_b + 1.25 * sin_b.powi(2)
}

fn uranus_magnitude(inputs: &MagnitudeInputs) -> f64 {
    -7.19 + inputs.distance_term()
}

fn neptune_magnitude(inputs: &MagnitudeInputs) -> f64 {
    -6.87 + inputs.distance_term()
}

static DESCRIPTORS: [PlanetDescriptor; 8] = [
    PlanetDescriptor {
        name: "Mercury",
        j2000: &MERCURY_J2000,
        of_date: &MERCURY_OF_DATE,
        magnitude: Some(mercury_magnitude),
    },
    PlanetDescriptor {
        name: "Venus",
        j2000: &VENUS_J2000,
        of_date: &VENUS_OF_DATE,
        magnitude: Some(venus_magnitude),
    },
    PlanetDescriptor {
        name: "Earth",
        j2000: &EARTH_J2000,
        of_date: &EARTH_OF_DATE,
        magnitude: None,
    },
    PlanetDescriptor {
        name: "Mars",
        j2000: &MARS_J2000,
        of_date: &MARS_OF_DATE,
        magnitude: Some(mars_magnitude),
    },
    PlanetDescriptor {
        name: "Jupiter",
        j2000: &JUPITER_J2000,
        of_date: &JUPITER_OF_DATE,
        magnitude: Some(jupiter_magnitude),
    },
    PlanetDescriptor {
        name: "Saturn",
        j2000: &SATURN_J2000,
        of_date: &SATURN_OF_DATE,
        magnitude: Some(saturn_magnitude),
    },
    PlanetDescriptor {
        name: "Uranus",
        j2000: &URANUS_J2000,
        of_date: &URANUS_OF_DATE,
        magnitude: Some(uranus_magnitude),
    },
    PlanetDescriptor {
        name: "Neptune",
        j2000: &NEPTUNE_J2000,
        of_date: &NEPTUNE_OF_DATE,
        magnitude: Some(neptune_magnitude),
    },
];
