//! # Spherical coordinate systems
//!
//! Value types for the four coordinate pairs of positional astronomy and the
//! spherical-trigonometry conversions between them.
//!
//! ## Conventions
//!
//! | Type               | First angle                                | Second angle           |
//! |--------------------|--------------------------------------------|------------------------|
//! | [`GeographicPoint`] | longitude, **west-positive**              | latitude, north-positive |
//! | [`HorizontalPoint`] | azimuth, from the **south**, west-positive | elevation              |
//! | [`EquatorialPoint`] | right ascension, east-positive            | declination            |
//! | [`EclipticPoint`]   | longitude, east-positive                  | latitude               |
//!
//! All angles are radians. The conversions are closed-form and carry no guard against
//! degenerate inputs: at the celestial poles `tan δ` diverges and the results follow IEEE
//! arithmetic.
//!
//! ## See also
//! ------------
//! * [`crate::earth_orientation::obliquity_of_ecliptic`] – the obliquity used by the ecliptic ⇄ equatorial pair.
//! * [`crate::time::greenwich_mean_sidereal_time`] – the sidereal time used by the equatorial ⇄ horizontal pair.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Radian, DPI, RADH};
use crate::time::{greenwich_mean_sidereal_time, CalendarDate};

/// Reduce an angle to the interval [0, 2π).
pub fn principal_angle(angle: Radian) -> Radian {
    let reduced = angle.rem_euclid(DPI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if reduced >= DPI {
        0.0
    } else {
        reduced
    }
}

/// Location on the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeographicPoint {
    /// Longitude, positive west of Greenwich
    pub longitude: Radian,
    /// Latitude, positive north
    pub latitude: Radian,
}

/// Local horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalPoint {
    /// Azimuth measured westward from the south
    pub azimuth: Radian,
    /// Elevation above the horizon
    pub elevation: Radian,
}

/// Equatorial coordinates referred to the equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EquatorialPoint {
    pub right_ascension: Radian,
    pub declination: Radian,
}

/// Ecliptic coordinates, the canonical celestial representation of the crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EclipticPoint {
    pub longitude: Radian,
    pub latitude: Radian,
}

/// Spherical position with a distance, as produced by the planetary and lunar theories.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SphericalPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

impl GeographicPoint {
    pub fn new(longitude: Radian, latitude: Radian) -> Self {
        GeographicPoint {
            longitude,
            latitude,
        }
    }
}

impl HorizontalPoint {
    pub fn new(azimuth: Radian, elevation: Radian) -> Self {
        HorizontalPoint { azimuth, elevation }
    }
}

impl EquatorialPoint {
    pub fn new(right_ascension: Radian, declination: Radian) -> Self {
        EquatorialPoint {
            right_ascension,
            declination,
        }
    }
}

impl EclipticPoint {
    pub fn new(longitude: Radian, latitude: Radian) -> Self {
        EclipticPoint {
            longitude,
            latitude,
        }
    }

    /// Same point with its longitude reduced to [0, 2π).
    pub fn normalized(self) -> Self {
        EclipticPoint {
            longitude: principal_angle(self.longitude),
            latitude: self.latitude,
        }
    }

    /// Direction point of a rectangular ecliptic vector.
    pub fn from_rectangular(vector: &Vector3<f64>) -> Self {
        EclipticPoint {
            longitude: principal_angle(vector.y.atan2(vector.x)),
            latitude: vector.z.atan2(vector.x.hypot(vector.y)),
        }
    }
}

impl SphericalPoint {
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        SphericalPoint {
            longitude,
            latitude,
            distance,
        }
    }

    /// Rectangular ecliptic coordinates, in the distance unit of the point.
    pub fn to_rectangular(&self) -> Vector3<f64> {
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        self.distance * Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Spherical coordinates of a rectangular vector, longitude in [0, 2π).
    pub fn from_rectangular(vector: &Vector3<f64>) -> Self {
        let direction = EclipticPoint::from_rectangular(vector);
        SphericalPoint {
            longitude: direction.longitude,
            latitude: direction.latitude,
            distance: vector.norm(),
        }
    }

    /// Angular part of the position.
    pub fn direction(&self) -> EclipticPoint {
        EclipticPoint::new(self.longitude, self.latitude)
    }
}

/// Convert ecliptic coordinates to equatorial coordinates.
///
/// Arguments
/// ---------
/// * `point`: ecliptic longitude and latitude.
/// * `obliquity`: obliquity of the ecliptic ε; use the true obliquity (ε + Δε) for
///   apparent positions.
///
/// Return
/// ------
/// * Equatorial point, right ascension in [0, 2π).
pub fn ecliptic_to_equatorial(point: &EclipticPoint, obliquity: Radian) -> EquatorialPoint {
    let (sin_e, cos_e) = obliquity.sin_cos();
    let (sin_l, cos_l) = point.longitude.sin_cos();
    let (sin_b, cos_b) = point.latitude.sin_cos();

    let right_ascension = (sin_l * cos_e - sin_b / cos_b * sin_e).atan2(cos_l);
    let declination = (sin_b * cos_e + cos_b * sin_e * sin_l).asin();

    EquatorialPoint {
        right_ascension: principal_angle(right_ascension),
        declination,
    }
}

/// Convert equatorial coordinates to ecliptic coordinates.
///
/// Inverse of [`ecliptic_to_equatorial`] for the same obliquity.
pub fn equatorial_to_ecliptic(point: &EquatorialPoint, obliquity: Radian) -> EclipticPoint {
    let (sin_e, cos_e) = obliquity.sin_cos();
    let (sin_a, cos_a) = point.right_ascension.sin_cos();
    let (sin_d, cos_d) = point.declination.sin_cos();

    let longitude = (sin_a * cos_e + sin_d / cos_d * sin_e).atan2(cos_a);
    let latitude = (sin_d * cos_e - cos_d * sin_e * sin_a).asin();

    EclipticPoint {
        longitude: principal_angle(longitude),
        latitude,
    }
}

/// Local hour angle H = θ₀ − L − α of a right ascension, θ₀ being the Greenwich mean
/// sidereal time of the date.
pub fn local_hour_angle(
    date: &CalendarDate,
    location: &GeographicPoint,
    right_ascension: Radian,
) -> Radian {
    greenwich_mean_sidereal_time(date) * RADH - location.longitude - right_ascension
}

/// Convert equatorial coordinates to horizontal coordinates for an observer.
///
/// Arguments
/// ---------
/// * `date`: instant of the observation (UT).
/// * `location`: geographic position of the observer.
/// * `point`: equatorial position of the body.
///
/// Return
/// ------
/// * Horizontal point, azimuth from the south in [0, 2π).
pub fn equatorial_to_horizontal(
    date: &CalendarDate,
    location: &GeographicPoint,
    point: &EquatorialPoint,
) -> HorizontalPoint {
    let hour_angle = local_hour_angle(date, location, point.right_ascension);
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_phi, cos_phi) = location.latitude.sin_cos();
    let (sin_d, cos_d) = point.declination.sin_cos();

    let azimuth = sin_h.atan2(cos_h * sin_phi - sin_d / cos_d * cos_phi);
    let elevation = (sin_phi * sin_d + cos_phi * cos_d * cos_h).asin();

    HorizontalPoint {
        azimuth: principal_angle(azimuth),
        elevation,
    }
}

/// Convert horizontal coordinates back to equatorial coordinates.
///
/// Inverse of [`equatorial_to_horizontal`] for the same date and location.
pub fn horizontal_to_equatorial(
    date: &CalendarDate,
    location: &GeographicPoint,
    point: &HorizontalPoint,
) -> EquatorialPoint {
    let (sin_a, cos_a) = point.azimuth.sin_cos();
    let (sin_phi, cos_phi) = location.latitude.sin_cos();
    let (sin_h, cos_h) = point.elevation.sin_cos();

    let hour_angle = sin_a.atan2(cos_a * sin_phi + sin_h / cos_h * cos_phi);
    let declination = (sin_phi * sin_h - cos_phi * cos_h * cos_a).asin();
    let right_ascension =
        greenwich_mean_sidereal_time(date) * RADH - location.longitude - hour_angle;

    EquatorialPoint {
        right_ascension: principal_angle(right_ascension),
        declination,
    }
}
