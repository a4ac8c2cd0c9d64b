//! # Observer on the Earth's surface
//!
//! Quantities that depend on the observer's site:
//!
//! - [`Almanac::parallactic_angle`] – angle between the directions of the zenith and of the
//!   celestial pole at the body,
//! - [`Almanac::transit`], [`Almanac::rising`], [`Almanac::setting`] – times of the day, in hours
//!   UT, from a single set of equatorial coordinates,
//! - [`atmospheric_refraction`] – Sæmundsson's formula scaled to the local weather,
//! - [`Almanac::diurnal_parallax`] – topocentric equatorial coordinates on the reference
//!   ellipsoid.
//!
//! Rising and setting use the closed-form hour angle
//!
//! ```text
//! cos H₀ = (sin h₀ − sin φ sin δ) / (cos φ cos δ)
//! ```
//!
//! where h₀ is the standard altitude of the body (see [`StandardAltitude`]). A body whose
//! |cos H₀| exceeds 1 never crosses that altitude and yields `None`.

use serde::{Deserialize, Serialize};

use crate::almanac::Almanac;
use crate::constants::{
    Hour, Kilometer, Radian, DPI, EARTH_EQUATORIAL_RADIUS, EARTH_POLAR_RADIUS, RADEG, RADH,
};
use crate::coordinates::{EquatorialPoint, GeographicPoint};
use crate::theory::{DelaunayArguments, LunarTheory, PlanetaryTheory};
use crate::time::{greenwich_mean_sidereal_time, CalendarDate};

/// Height of an observer at sea level, kilometers
pub const SEA_LEVEL: Kilometer = 0.0;

/// Standard atmospheric temperature at sea level, kelvins (10 °C)
pub const STANDARD_TEMPERATURE: f64 = 283.15;

/// Standard atmospheric pressure at sea level, pascals
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Geometric altitude of the center of a body at its apparent rising or setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardAltitude {
    /// Stars and planets: −0°34′
    Star,
    /// Upper limb of the Sun: −0°50′
    Sun,
    /// Upper limb of the Moon, given its equatorial horizontal parallax
    Moon(Radian),
}

impl StandardAltitude {
    /// Standard altitude of the Moon for a horizontal parallax π.
    pub fn moon(parallax: Radian) -> Self {
        StandardAltitude::Moon(parallax)
    }

    /// Altitude h₀ in radians.
    pub fn radians(self) -> Radian {
        match self {
            StandardAltitude::Star => -0.5667 * RADEG,
            StandardAltitude::Sun => -0.8333 * RADEG,
            StandardAltitude::Moon(parallax) => 0.7275 * parallax - 0.5667 * RADEG,
        }
    }
}

impl From<StandardAltitude> for Radian {
    fn from(altitude: StandardAltitude) -> Self {
        altitude.radians()
    }
}

/// Compute the atmospheric refraction for a true altitude.
///
/// Arguments
/// ---------
/// * `altitude`: true (airless) altitude of the body, radians.
/// * `temperature`: air temperature, kelvins.
/// * `pressure`: air pressure, pascals.
///
/// Return
/// ------
/// * Refraction R in radians, to be added to the true altitude.
///
/// Formula
/// -------
/// ```text
/// R = 1.02 / tan(h + 10.3 / (h + 5.11))      h in degrees, R in arcminutes
/// ```
/// scaled by `(P / 101325) · (283.15 / T)`.
pub fn atmospheric_refraction(altitude: Radian, temperature: f64, pressure: f64) -> Radian {
    let h = altitude / RADEG;
    let arcminutes = 1.02 / ((h + 10.3 / (h + 5.11)) * RADEG).tan();
    let scale = (pressure / STANDARD_PRESSURE) * (STANDARD_TEMPERATURE / temperature);

    arcminutes * scale / 60.0 * RADEG
}

impl<P, L, D> Almanac<P, L, D>
where
    P: PlanetaryTheory,
    L: LunarTheory,
    D: DelaunayArguments,
{
    /// Apparent sidereal time at Greenwich, radians, not reduced.
    fn apparent_sidereal_angle(&self, date: &CalendarDate) -> Radian {
        greenwich_mean_sidereal_time(date) * RADH + self.equation_of_the_equinoxes(date)
    }

    /// Compute the parallactic angle of a body.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    /// * `location`: the observer.
    /// * `point`: apparent equatorial position of the body.
    ///
    /// Return
    /// ------
    /// * q in (−π, π], 0 for a body transiting south of the zenith.
    pub fn parallactic_angle(
        &self,
        date: &CalendarDate,
        location: &GeographicPoint,
        point: &EquatorialPoint,
    ) -> Radian {
        let hour_angle =
            self.apparent_sidereal_angle(date) - location.longitude - point.right_ascension;
        let (sin_h, cos_h) = hour_angle.sin_cos();
        let (sin_d, cos_d) = point.declination.sin_cos();

        sin_h.atan2(location.latitude.tan() * cos_d - sin_d * cos_h)
    }

    /// Compute the time of the upper meridian transit of a body.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date; only its day is used.
    /// * `location`: the observer.
    /// * `point`: apparent equatorial position of the body on that day.
    ///
    /// Return
    /// ------
    /// * The transit time in hours UT, in [0, 24).
    pub fn transit(
        &self,
        date: &CalendarDate,
        location: &GeographicPoint,
        point: &EquatorialPoint,
    ) -> Hour {
        let sidereal = greenwich_mean_sidereal_time(&date.at_midnight()) * RADH
            + self.equation_of_the_equinoxes(date);
        let fraction = (point.right_ascension + location.longitude - sidereal) / DPI;
        fraction.rem_euclid(1.0) * 24.0
    }

    /// Compute the time a body rises above its standard altitude.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date; only its day is used.
    /// * `location`: the observer.
    /// * `point`: apparent equatorial position of the body on that day.
    /// * `standard_altitude`: altitude h₀ of the event, radians (see [`StandardAltitude`]).
    ///
    /// Return
    /// ------
    /// * `Some(hours UT)` in [0, 24), or `None` if the body stays above or below h₀ all day.
    pub fn rising(
        &self,
        date: &CalendarDate,
        location: &GeographicPoint,
        point: &EquatorialPoint,
        standard_altitude: Radian,
    ) -> Option<Hour> {
        let hour_angle = semi_diurnal_arc(location, point, standard_altitude)?;
        Some((self.transit(date, location, point) - hour_angle / RADH).rem_euclid(24.0))
    }

    /// Compute the time a body sets below its standard altitude.
    ///
    /// See [`Almanac::rising`] for the arguments; `None` has the same meaning.
    pub fn setting(
        &self,
        date: &CalendarDate,
        location: &GeographicPoint,
        point: &EquatorialPoint,
        standard_altitude: Radian,
    ) -> Option<Hour> {
        let hour_angle = semi_diurnal_arc(location, point, standard_altitude)?;
        Some((self.transit(date, location, point) + hour_angle / RADH).rem_euclid(24.0))
    }

    /// Compute topocentric equatorial coordinates.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the calendar date (UT).
    /// * `location`: the observer.
    /// * `height`: height of the observer above sea level, kilometers.
    /// * `point`: geocentric apparent equatorial position of the body.
    /// * `parallax`: equatorial horizontal parallax of the body, radians.
    ///
    /// Return
    /// ------
    /// * The position seen from the observer. Right ascension is not reduced.
    ///
    /// Formula
    /// -------
    /// ```text
    /// tan u = (b/a) tan φ
    /// ρ sin φ′ = (b/a) sin u + (H/a) sin φ
    /// ρ cos φ′ = cos u + (H/a) cos φ
    /// tan Δα = −ρ cos φ′ sin π sin H / (cos δ − ρ cos φ′ sin π cos H)
    /// tan δ′ = (sin δ − ρ sin φ′ sin π) cos Δα / (cos δ − ρ cos φ′ sin π cos H)
    /// ```
    pub fn diurnal_parallax(
        &self,
        date: &CalendarDate,
        location: &GeographicPoint,
        height: Kilometer,
        point: &EquatorialPoint,
        parallax: Radian,
    ) -> EquatorialPoint {
        let ratio = EARTH_POLAR_RADIUS / EARTH_EQUATORIAL_RADIUS;
        let elevation = height / EARTH_EQUATORIAL_RADIUS;
        let (sin_phi, cos_phi) = location.latitude.sin_cos();

        let u = (ratio * location.latitude.tan()).atan();
        let rho_sin = ratio * u.sin() + elevation * sin_phi;
        let rho_cos = u.cos() + elevation * cos_phi;

        let hour_angle =
            self.apparent_sidereal_angle(date) - location.longitude - point.right_ascension;
        let (sin_h, cos_h) = hour_angle.sin_cos();
        let (sin_d, cos_d) = point.declination.sin_cos();
        let sin_p = parallax.sin();

        let denominator = cos_d - rho_cos * sin_p * cos_h;
        let delta_alpha = (-rho_cos * sin_p * sin_h).atan2(denominator);
        let declination = ((sin_d - rho_sin * sin_p) * delta_alpha.cos()).atan2(denominator);

        EquatorialPoint {
            right_ascension: point.right_ascension + delta_alpha,
            declination,
        }
    }
}

/// Hour angle H₀ of a body at altitude h₀, `None` if it never reaches it.
fn semi_diurnal_arc(
    location: &GeographicPoint,
    point: &EquatorialPoint,
    standard_altitude: Radian,
) -> Option<Radian> {
    let cosine = (standard_altitude.sin() - location.latitude.sin() * point.declination.sin())
        / (location.latitude.cos() * point.declination.cos());
    (cosine.abs() <= 1.0).then(|| cosine.acos())
}
